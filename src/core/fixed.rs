//! Fixed Ring Buffer
//!
//! Storage dialokasikan sekali saat inisialisasi, penuh dengan slot kosong.
//! Enqueue/dequeue O(1) via modular index, tidak ada realokasi setelah init.

use super::error::{BufferError, Rejected, Result};
use super::{next_index, RingQueue};

/// Ring buffer dengan storage pre-allocated.
///
/// Menolak enqueue saat penuh dan dequeue saat kosong.
#[derive(Debug, Clone)]
pub struct FixedRingBuffer<T> {
    // Slot kosong = None
    buffer: Box<[Option<T>]>,
    // Slot berikutnya yang dibaca
    head: usize,
    // Slot berikutnya yang ditulis
    tail: usize,
    size: usize,
}

impl<T> FixedRingBuffer<T> {
    /// Membuat buffer dengan `capacity` slot kosong.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    /// Seperti [`new`](Self::new), tapi mengembalikan error untuk kapasitas nol
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self::new(capacity))
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Tulis item ke slot `tail`.
    ///
    /// Jika buffer penuh, item dikembalikan di dalam [`Rejected`].
    pub fn enqueue(&mut self, item: T) -> std::result::Result<(), Rejected<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "enqueue rejected, buffer full");
            return Err(Rejected::full(item, self.capacity()));
        }

        self.buffer[self.tail] = Some(item);
        self.tail = next_index(self.tail, self.capacity());
        self.size += 1;

        Ok(())
    }

    /// Ambil item tertua dari slot `head` dan kosongkan slot tersebut
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            tracing::debug!(capacity = self.capacity(), "dequeue rejected, buffer empty");
            return Err(BufferError::BufferEmpty);
        }

        let item = self.buffer[self.head]
            .take()
            .ok_or(BufferError::BufferEmpty)?;
        self.head = next_index(self.head, self.capacity());
        self.size -= 1;

        Ok(item)
    }

    /// Raw view ke storage (diagnostik saja)
    pub fn peek_raw(&self) -> &[Option<T>] {
        &self.buffer
    }

    /// Dequeue semua item dalam urutan FIFO
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.dequeue().ok())
    }

    /// Kosongkan buffer. Storage tetap teralokasi.
    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }
}

impl<T> RingQueue<T> for FixedRingBuffer<T> {
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn peek_raw(&self) -> &[Option<T>] {
        Self::peek_raw(self)
    }
}
