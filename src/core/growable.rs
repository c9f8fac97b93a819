//! Growable Ring Buffer
//!
//! Storage tumbuh satu slot setiap kali semua slot yang ada terisi, sampai
//! mencapai kapasitas. Panjang storage tidak pernah melebihi jumlah item
//! terbanyak yang pernah hidup bersamaan. Setelah storage mencapai kapasitas,
//! perilakunya sama dengan [`FixedRingBuffer`].
//!
//! [`FixedRingBuffer`]: super::FixedRingBuffer

use super::error::{BufferError, Rejected, Result};
use super::{next_index, RingQueue};

/// Ring buffer dengan storage lazy.
#[derive(Debug, Clone)]
pub struct GrowableRingBuffer<T> {
    // Panjang storage <= capacity, tidak pernah menyusut
    buffer: Vec<Option<T>>,
    capacity: usize,
    // head dan tail selalu < buffer.len() (atau 0 jika belum ada alokasi)
    head: usize,
    tail: usize,
    size: usize,
}

impl<T> GrowableRingBuffer<T> {
    /// Membuat buffer kosong tanpa alokasi slot.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        Self {
            buffer: Vec::new(),
            capacity,
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self::new(capacity))
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
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
        self.size == self.capacity
    }

    /// Jumlah slot yang sudah dialokasikan
    #[inline(always)]
    pub fn allocated(&self) -> usize {
        self.buffer.len()
    }

    /// Tambah item di `tail`.
    ///
    /// Storage hanya tumbuh jika semua slot yang sudah dialokasikan terisi.
    /// Index wrap pada panjang storage saat ini, jadi setelah storage mencapai
    /// kapasitas perilakunya identik dengan modulo `capacity`.
    pub fn enqueue(&mut self, item: T) -> std::result::Result<(), Rejected<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, "enqueue rejected, buffer full");
            return Err(Rejected::full(item, self.capacity));
        }

        if self.size == self.buffer.len() {
            // Semua slot terisi: head == tail
            if self.tail == 0 {
                // Item hidup urut di [0, len), cukup append
                self.buffer.push(Some(item));
            } else {
                // Sisipkan di tail, item tertua bergeser satu slot ke kanan
                self.buffer.insert(self.tail, Some(item));
                self.head += 1;
                self.tail += 1;
            }
            tracing::trace!(allocated = self.buffer.len(), "slot allocated");
        } else {
            self.buffer[self.tail] = Some(item);
            self.tail = next_index(self.tail, self.buffer.len());
        }
        self.size += 1;

        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            tracing::debug!(capacity = self.capacity, "dequeue rejected, buffer empty");
            return Err(BufferError::BufferEmpty);
        }

        let item = self.buffer[self.head]
            .take()
            .ok_or(BufferError::BufferEmpty)?;
        self.head = next_index(self.head, self.buffer.len());
        self.size -= 1;

        Ok(item)
    }

    /// Raw view ke slot yang sudah dialokasikan (diagnostik saja)
    pub fn peek_raw(&self) -> &[Option<T>] {
        &self.buffer
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.dequeue().ok())
    }

    /// Kosongkan buffer. Slot yang sudah dialokasikan tetap dipertahankan.
    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }
}

impl<T> RingQueue<T> for GrowableRingBuffer<T> {
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
