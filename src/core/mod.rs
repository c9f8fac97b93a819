//! Core module: tiga varian ring buffer FIFO
//!
//! Prinsip desain:
//! - Bounded: kapasitas ditetapkan saat init dan tidak pernah berubah
//! - Non-blocking: operasi langsung berhasil atau langsung gagal
//! - Single-owner: tidak thread-safe, bungkus dengan Mutex jika perlu dibagi
//!
//! | Varian                  | Storage              | Saat penuh        |
//! |-------------------------|----------------------|-------------------|
//! | `GrowableRingBuffer`    | tumbuh sampai `cap`  | `CapacityExceeded`|
//! | `FixedRingBuffer`       | pre-allocated        | `CapacityExceeded`|
//! | `OverwritingRingBuffer` | pre-allocated        | timpa item tertua |

mod error;
mod fixed;
mod growable;
mod overwriting;

pub use error::{BufferError, Rejected, Result};
pub use fixed::FixedRingBuffer;
pub use growable::GrowableRingBuffer;
pub use overwriting::{CursorPosition, OverwritingRingBuffer};

/// Kontrak bersama semua varian.
///
/// `enqueue`/`dequeue` tetap method inherent karena tipe hasilnya berbeda
/// per varian.
pub trait RingQueue<T> {
    fn capacity(&self) -> usize;

    /// Jumlah item yang masih bisa dibaca
    fn len(&self) -> usize;

    /// Raw view ke backing storage, `None` = slot kosong.
    /// Hanya untuk diagnostik, tidak mengubah state.
    fn peek_raw(&self) -> &[Option<T>];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Maju satu slot, wrap ke 0 setelah slot terakhir
#[inline(always)]
pub(crate) const fn next_index(index: usize, capacity: usize) -> usize {
    (index + 1) % capacity
}
