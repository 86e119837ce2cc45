//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I encoding tables, bit-field extraction, immediate
//! assembly and the decoder.
//!
//! # Layers
//!
//! * `bits`: Field boundaries and the single bit-extraction primitive.
//! * `immediate`: Sign extension and S/B/J/U immediate assembly.
//! * `instruction`: One struct per encoding format.
//! * `decode`: Word to [`op::Decoded`] translation.
//! * `rv32i`: Opcode and function-code constants.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Bit-field layout of the 32-bit instruction word.
pub mod bits;

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Immediate sign extension and fragment reassembly.
pub mod immediate;

/// Format-specific instruction structures.
pub mod instruction;

/// Resolved operations and the decoded instruction type.
pub mod op;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
