//! Error types untuk ring buffer
//!
//! Semua error bersifat lokal dan recoverable: state buffer tidak berubah
//! setelah operasi gagal.

use std::fmt;

/// Alasan operasi buffer ditolak
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Enqueue pada buffer yang sudah penuh
    #[error("buffer is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    /// Dequeue pada buffer kosong
    #[error("buffer is empty")]
    BufferEmpty,
    /// Buffer tidak bisa dibuat dengan kapasitas nol
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, BufferError>;

/// Enqueue yang ditolak. Item dikembalikan ke caller, tidak di-drop.
pub struct Rejected<T> {
    item: T,
    error: BufferError,
}

impl<T> Rejected<T> {
    pub(crate) fn full(item: T, capacity: usize) -> Self {
        Self {
            item,
            error: BufferError::CapacityExceeded { capacity },
        }
    }

    pub fn error(&self) -> BufferError {
        self.error
    }

    /// Ambil kembali item yang gagal masuk
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Rejected<T>> for BufferError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
