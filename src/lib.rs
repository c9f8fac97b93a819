//! Ringkit - Bounded FIFO Ring Buffers
//!
//! Tiga varian dengan trade-off berbeda:
//! - [`GrowableRingBuffer`](crate::core::GrowableRingBuffer): storage tumbuh sesuai kebutuhan
//! - [`FixedRingBuffer`](crate::core::FixedRingBuffer): storage pre-allocated, O(1)
//! - [`OverwritingRingBuffer`](crate::core::OverwritingRingBuffer): menimpa item tertua saat penuh
//!
//! Semua operasi synchronous dan non-blocking. Tidak thread-safe.

pub mod core;
