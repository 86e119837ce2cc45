//! RAM Buffer Implementation.
//!
//! A fixed-capacity byte buffer allocated once at construction. Every access is
//! range-checked; an access that would run past the end yields `None` and
//! leaves the buffer untouched.

/// Byte-addressable backing storage for a [`Memory`](super::Memory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamBuffer {
    bytes: Vec<u8>,
}

impl RamBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has no capacity.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `offset..offset + len` if it lies entirely inside the buffer.
    fn span(&self, offset: usize, len: usize) -> Option<std::ops::Range<usize>> {
        let end = offset.checked_add(len)?;
        (end <= self.bytes.len()).then_some(offset..end)
    }

    /// Reads `len` bytes starting at `offset`.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let range = self.span(offset, len)?;
        self.bytes.get(range)
    }

    /// Reads a fixed-size array starting at `offset`.
    pub fn read_array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.read_slice(offset, N)?.try_into().ok()
    }

    /// Copies `data` into the buffer at `offset`.
    ///
    /// Returns `None` without writing anything if `data` does not fit.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Option<()> {
        let range = self.span(offset, data.len())?;
        self.bytes.get_mut(range)?.copy_from_slice(data);
        Some(())
    }
}
