//! Global Engine Constants.
//!
//! This module defines constants shared across the engine. It includes:
//! 1. **Instruction Constants:** Instruction width and the compressed-encoding marker.
//! 2. **Register Constants:** Register count and the shift-amount mask.
//! 3. **Memory Constants:** Access widths for byte, halfword and word transfers.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
///
/// Every non-jumping instruction advances the PC by this amount, and JAL/JALR
/// store `pc + INSTRUCTION_WIDTH` as the return address.
pub const INSTRUCTION_WIDTH: u32 = 4;

/// Bit mask for checking if an instruction is compressed.
pub const COMPRESSED_INSTRUCTION_MASK: u32 = 0x3;

/// Value of the low two bits of every non-compressed (32-bit) instruction.
pub const UNCOMPRESSED_INSTRUCTION_VALUE: u32 = 0x3;

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Mask applied to register shift amounts (SLL/SRL/SRA use the low 5 bits of `rs2`).
pub const SHAMT_MASK: u32 = 0x1F;

/// Width of a byte access (LB/LBU/SB).
pub const BYTE_WIDTH: usize = 1;

/// Width of a halfword access (LH/LHU/SH).
pub const HALF_WIDTH: usize = 2;

/// Width of a word access (LW/SW).
pub const WORD_WIDTH: usize = 4;
