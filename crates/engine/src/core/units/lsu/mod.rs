//! Load/Store Unit (LSU).
//!
//! Moves values between the register file and [`Memory`]. Loads widen the
//! accessed bytes to 32 bits; stores keep the low bytes of the source value.

use crate::common::error::MemoryError;
use crate::isa::op::{LoadOp, MemWidth};
use crate::soc::memory::Memory;

/// Load/Store Unit (LSU) for memory operations.
pub struct Lsu;

impl Lsu {
    /// Performs a load and extends the result to 32 bits.
    ///
    /// # Arguments
    ///
    /// * `op`   - Width and signedness of the load
    /// * `mem`  - Memory to read from
    /// * `addr` - Effective byte address
    ///
    /// # Errors
    ///
    /// Propagates [`MemoryError::OutOfBounds`] from the memory.
    pub fn load(op: LoadOp, mem: &Memory, addr: u32) -> Result<u32, MemoryError> {
        let val = match (op.width, op.signed) {
            (MemWidth::Byte, true) => mem.load_byte(addr)? as i8 as i32 as u32,
            (MemWidth::Byte, false) => u32::from(mem.load_byte(addr)?),
            (MemWidth::Half, true) => mem.load_half(addr)? as i16 as i32 as u32,
            (MemWidth::Half, false) => u32::from(mem.load_half(addr)?),
            (MemWidth::Word, _) => mem.load_word(addr)?,
        };
        Ok(val)
    }

    /// Stores the low `width` bytes of `val`.
    ///
    /// # Errors
    ///
    /// Propagates [`MemoryError::OutOfBounds`]; memory is unchanged on failure.
    pub fn store(
        width: MemWidth,
        mem: &mut Memory,
        addr: u32,
        val: u32,
    ) -> Result<(), MemoryError> {
        match width {
            MemWidth::Byte => mem.store_byte(addr, val as u8),
            MemWidth::Half => mem.store_half(addr, val as u16),
            MemWidth::Word => mem.store_word(addr, val),
        }
    }
}
