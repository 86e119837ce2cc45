//! Common utilities and types used throughout the engine.
//!
//! This module provides the building blocks shared by the decoder and the
//! execution engine. It includes:
//! 1. **Constants:** Instruction width, register count and access widths.
//! 2. **Error Handling:** Decode, memory, register and execution error types.
//! 3. **Register Management:** The general-purpose register file and program counter.

/// Common constants used throughout the engine.
pub mod constants;

/// Error types for decoding and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::INSTRUCTION_WIDTH;
pub use error::{DecodeError, ExecError, MemoryError, RegisterError};
pub use reg::{RegisterFile, ZeroRegister};
