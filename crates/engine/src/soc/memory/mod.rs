//! Hart-Local Memory.
//!
//! This module implements the flat, byte-addressable data memory seen by the
//! execution engine. It provides:
//! 1. **Buffer:** Backing storage ([`RamBuffer`]) of fixed capacity.
//! 2. **Memory:** Typed little-endian loads and stores with bounds checking.
//!
//! Addresses are byte offsets from zero. Misaligned accesses are permitted.

/// Fixed-capacity byte buffer backing the memory.
pub mod buffer;

use tracing::debug;

use self::buffer::RamBuffer;
use crate::common::constants::{BYTE_WIDTH, HALF_WIDTH, WORD_WIDTH};
use crate::common::error::MemoryError;

/// Data memory for a single hart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: RamBuffer,
}

impl Memory {
    /// Creates a zero-filled memory of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: RamBuffer::new(capacity),
        }
    }

    /// Returns the capacity in bytes.
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn fault(&self, addr: u32, width: usize) -> MemoryError {
        let err = MemoryError::OutOfBounds {
            addr,
            width,
            capacity: self.capacity(),
        };
        debug!(
            addr = format_args!("{addr:#010x}"),
            width,
            "memory access out of bounds"
        );
        err
    }

    fn load<const N: usize>(&self, addr: u32) -> Result<[u8; N], MemoryError> {
        self.buffer
            .read_array::<N>(addr as usize)
            .ok_or_else(|| self.fault(addr, N))
    }

    fn store(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryError> {
        match self.buffer.write_slice(addr as usize, data) {
            Some(()) => Ok(()),
            None => Err(self.fault(addr, data.len())),
        }
    }

    /// Reads a byte.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr` is not below the capacity.
    pub fn load_byte(&self, addr: u32) -> Result<u8, MemoryError> {
        self.load::<BYTE_WIDTH>(addr).map(u8::from_le_bytes)
    }

    /// Reads a half-word (16-bit) from memory (Little Endian).
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr + 2` exceeds the capacity.
    pub fn load_half(&self, addr: u32) -> Result<u16, MemoryError> {
        self.load::<HALF_WIDTH>(addr).map(u16::from_le_bytes)
    }

    /// Reads a word (32-bit) from memory (Little Endian).
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr + 4` exceeds the capacity.
    pub fn load_word(&self, addr: u32) -> Result<u32, MemoryError> {
        self.load::<WORD_WIDTH>(addr).map(u32::from_le_bytes)
    }

    /// Writes a byte.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr` is not below the capacity.
    pub fn store_byte(&mut self, addr: u32, val: u8) -> Result<(), MemoryError> {
        self.store(addr, &val.to_le_bytes())
    }

    /// Writes a half-word to memory (Little Endian).
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr + 2` exceeds the capacity.
    pub fn store_half(&mut self, addr: u32, val: u16) -> Result<(), MemoryError> {
        self.store(addr, &val.to_le_bytes())
    }

    /// Writes a word to memory (Little Endian).
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if `addr + 4` exceeds the capacity.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), MemoryError> {
        self.store(addr, &val.to_le_bytes())
    }

    /// Copies a byte slice into memory, e.g. to preload a program image.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if the slice does not fit; nothing is written.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryError> {
        self.store(addr, data)
    }

    /// Borrows `len` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if the range does not fit.
    pub fn read_bytes(&self, addr: u32, len: usize) -> Result<&[u8], MemoryError> {
        self.buffer
            .read_slice(addr as usize, len)
            .ok_or_else(|| self.fault(addr, len))
    }
}
