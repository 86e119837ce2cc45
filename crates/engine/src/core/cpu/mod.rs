//! Hart Definition and Initialization.
//!
//! This module defines the `Hart` structure, the explicit simulation context for
//! a single hardware thread. It coordinates the following:
//! 1. **State Management:** Owns the register file (including the PC) and the data memory.
//! 2. **Execution:** Routes decoded instructions to the stateless execution engine.
//!
//! There is no fetch loop: the caller supplies each instruction word.

/// Instruction execution against registers and memory.
pub mod execution;

use tracing::debug;

use crate::common::error::ExecError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::isa::decode::decode;
use crate::isa::op::Decoded;
use crate::soc::memory::Memory;

/// A single RV32I hardware thread: its registers and its memory.
#[derive(Clone, Debug)]
pub struct Hart {
    regs: RegisterFile,
    mem: Memory,
}

impl Hart {
    /// Creates a hart with zeroed registers and memory sized from `config`.
    pub fn new(config: &Config) -> Self {
        debug!(
            memory = config.memory.size,
            zero_register = ?config.registers.zero_register,
            "hart created"
        );
        Self {
            regs: RegisterFile::new(config.registers.zero_register),
            mem: Memory::new(config.memory.size),
        }
    }

    /// Executes an already decoded instruction.
    ///
    /// # Errors
    ///
    /// See [`execution::execute`].
    pub fn execute(&mut self, decoded: &Decoded) -> Result<(), ExecError> {
        execution::execute(decoded, &mut self.regs, &mut self.mem)
    }

    /// Decodes `word` and executes it.
    ///
    /// # Errors
    ///
    /// [`ExecError::Decode`] if the word does not decode, otherwise as [`Hart::execute`].
    pub fn decode_and_execute(&mut self, word: u32) -> Result<(), ExecError> {
        let decoded = decode(word).inspect_err(|e| debug!(%e, "decode failed"))?;
        self.execute(&decoded)
    }

    /// Returns the register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns the register file for mutation.
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Returns the data memory.
    pub const fn memory(&self) -> &Memory {
        &self.mem
    }

    /// Returns the data memory for mutation.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.mem
    }
}

impl Default for Hart {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
