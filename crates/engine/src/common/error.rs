//! Decode and Execution Error definitions.
//!
//! This module defines the error types reported by the engine. It provides:
//! 1. **Decode Errors:** Unsupported instruction classes, unknown opcodes and unassigned encodings.
//! 2. **Memory Errors:** Accesses that fall outside the memory buffer.
//! 3. **Register Errors:** Checked register accesses with an index outside `x0`-`x31`.
//! 4. **Execution Errors:** A single error type that wraps all of the above for the caller.
//!
//! Every error is fatal to the instruction that raised it and is reported to the
//! caller unchanged; the engine never retries or masks a failure.

use thiserror::Error;

/// Failure to turn a 32-bit word into a typed instruction.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The word belongs to an instruction class that has no decoder.
    ///
    /// Raised for compressed (16-bit) encodings, whose low two bits are not `0b11`.
    #[error("decoding of instruction {word:#010x} is not implemented")]
    NotImplemented {
        /// The raw instruction word.
        word: u32,
    },

    /// The major opcode is not part of the supported RV32I subset.
    #[error("unknown opcode {opcode:#09b} in instruction {word:#010x}")]
    UnknownOpcode {
        /// The raw instruction word.
        word: u32,
        /// The 7-bit major opcode.
        opcode: u32,
    },

    /// The opcode is known but its funct3/funct7 combination is unassigned.
    #[error("illegal instruction {word:#010x}")]
    Illegal {
        /// The raw instruction word.
        word: u32,
    },
}

/// Failure of a load or store against the memory buffer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// The access `[addr, addr + width)` does not fit inside the buffer.
    #[error("out-of-bounds {width}-byte access at {addr:#010x} (capacity {capacity:#x})")]
    OutOfBounds {
        /// Byte address of the first accessed byte.
        addr: u32,
        /// Access width in bytes.
        width: usize,
        /// Capacity of the memory buffer in bytes.
        capacity: usize,
    },
}

/// Failure of a checked register file access.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// The register index is outside `0..32`.
    #[error("invalid register index x{0}")]
    InvalidIndex(usize),
}

/// Failure while executing a decoded instruction.
///
/// When an instruction fails, no register, memory or PC state has been changed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The instruction word could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A load or store touched memory outside the buffer.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// A register index outside `x0`-`x31` was used.
    #[error(transparent)]
    Register(#[from] RegisterError),
}
