//! RV32I decode-and-execute engine.
//!
//! This crate turns 32-bit RISC-V base integer instruction words into typed
//! instructions and applies them to an explicit register file and memory:
//! 1. **ISA:** Bit-field extraction, immediate assembly and decoding of the six RV32I formats.
//! 2. **Core:** The stateless execution engine, its functional units and the [`Hart`] context.
//! 3. **Memory:** A fixed-capacity, little-endian, bounds-checked data memory.
//! 4. **Configuration:** Memory size and the `x0` policy, loadable from JSON.
//!
//! The crate installs no logging subscriber; it emits `tracing` events for
//! every executed instruction and every fault.
//!
//! # Examples
//!
//! ```
//! use rv32i_engine::{Config, Hart};
//!
//! let mut hart = Hart::new(&Config::default());
//! hart.decode_and_execute(0x00A00513)?; // addi a0, zero, 10
//! hart.decode_and_execute(0x00B52023)?; // sw a1, 0(a0)
//! assert_eq!(hart.regs().read(10), 10);
//! assert_eq!(hart.regs().read_pc(), 8);
//! # Ok::<(), rv32i_engine::ExecError>(())
//! ```

/// Common types and constants (errors, register file, widths).
pub mod common;
/// Engine configuration (defaults, JSON loading).
pub mod config;
/// Execution core (hart, execution engine, functional units, GPRs).
pub mod core;
/// Instruction set (bit fields, immediates, formats, decoder, disassembler).
pub mod isa;
/// Data memory.
pub mod soc;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Single-hart simulation context.
pub use crate::core::Hart;
/// Applies one decoded instruction to a register file and memory.
pub use crate::core::execute;
/// Decodes a 32-bit instruction word.
pub use crate::isa::decode::decode;
/// Decoded instruction and its resolved operation.
pub use crate::isa::op::{Decoded, Op};
/// Data memory type.
pub use crate::soc::Memory;

pub use crate::common::{
    DecodeError, ExecError, MemoryError, RegisterError, RegisterFile, ZeroRegister,
};
