//! Overwriting Ring Buffer
//!
//! Storage pre-allocated seperti [`FixedRingBuffer`], tapi enqueue tidak
//! pernah gagal: saat penuh, item tertua yang belum dibaca ditimpa.
//!
//! Index tulis/baca dikelola oleh [`Cursor`]. Saat buffer penuh, cursor
//! memajukan read index lebih dulu sebelum slot ditimpa, sehingga urutan FIFO
//! dari `capacity` item terbaru tetap terjaga.
//!
//! [`FixedRingBuffer`]: super::FixedRingBuffer

use std::fmt;

use super::error::{BufferError, Result};
use super::RingQueue;

/// Posisi cursor saat ini (diagnostik)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub write_index: usize,
    pub read_index: usize,
}

/// Slot tujuan tulis dari [`Cursor::advance_write`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WriteSlot {
    index: usize,
    // true jika slot masih berisi item tertua yang belum dibaca
    evicts: bool,
}

/// Dua index independen dalam `[0, max_index]`, wrap ke 0 setelah `max_index`.
#[derive(Debug, Clone)]
struct Cursor {
    max_index: usize,
    write_index: usize,
    read_index: usize,
}

impl Cursor {
    const fn new(max_index: usize) -> Self {
        Self {
            max_index,
            write_index: 0,
            read_index: 0,
        }
    }

    #[inline(always)]
    const fn step(&self, index: usize) -> usize {
        if index == self.max_index {
            0
        } else {
            index + 1
        }
    }

    /// Ambil slot tulis berikutnya.
    ///
    /// Jika buffer penuh, write index pasti sama dengan read index: read index
    /// dimajukan dulu agar dequeue berikutnya tidak membaca slot yang ditimpa.
    fn advance_write(&mut self, full: bool) -> WriteSlot {
        let index = self.write_index;

        if full {
            debug_assert_eq!(self.write_index, self.read_index);
            self.advance_read();
        }
        self.write_index = self.step(self.write_index);

        WriteSlot {
            index,
            evicts: full,
        }
    }

    /// Ambil slot baca berikutnya
    fn advance_read(&mut self) -> usize {
        let index = self.read_index;
        self.read_index = self.step(self.read_index);
        index
    }

    fn position(&self) -> CursorPosition {
        CursorPosition {
            write_index: self.write_index,
            read_index: self.read_index,
        }
    }

    fn reset(&mut self) {
        self.write_index = 0;
        self.read_index = 0;
    }
}

/// Ring buffer yang menimpa item tertua saat penuh.
///
/// `len()` tidak pernah melebihi `capacity()`: eviction mengganti item,
/// bukan menambah. `is_full()` tetap true selama tidak ada dequeue.
#[derive(Debug, Clone)]
pub struct OverwritingRingBuffer<T> {
    buffer: Box<[Option<T>]>,
    cursor: Cursor,
    size: usize,
}

impl<T> OverwritingRingBuffer<T> {
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            cursor: Cursor::new(capacity - 1),
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

    /// Tulis item, selalu berhasil.
    ///
    /// Returns item tertua yang ditimpa jika buffer sudah penuh.
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        let slot = self.cursor.advance_write(self.is_full());
        let previous = self.buffer[slot.index].replace(item);

        if slot.evicts {
            tracing::debug!(slot = slot.index, "buffer full, oldest item overwritten");
        } else {
            self.size += 1;
        }

        previous
    }

    /// Returns `None` jika buffer kosong. Kosong bukan error untuk varian ini.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let index = self.cursor.advance_read();
        let item = self.buffer[index].take();
        self.size -= 1;

        item
    }

    pub fn peek_raw(&self) -> &[Option<T>] {
        &self.buffer
    }

    /// Posisi write/read index (diagnostik saja)
    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.dequeue())
    }

    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|slot| *slot = None);
        self.cursor.reset();
        self.size = 0;
    }
}

impl<T> RingQueue<T> for OverwritingRingBuffer<T> {
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

/// Format: `[slot, ...] write=W read=R`
impl<T: fmt::Debug> fmt::Display for OverwritingRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.cursor();
        write!(
            f,
            "{:?} write={} read={}",
            self.buffer, position.write_index, position.read_index
        )
    }
}
