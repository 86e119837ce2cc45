//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the architectural state of one hart.
//! It provides:
//! 1. **Storage:** The 32 general-purpose registers and the program counter.
//! 2. **Checked Access:** `try_read`/`try_write` report an invalid index as an error.
//! 3. **Zero Register Policy:** An explicit choice of how `x0` behaves.
//! 4. **Observability:** Debugging utilities for dumping register state.

use serde::Deserialize;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::RegisterError;
use crate::core::arch::gpr::Gpr;

/// Behaviour of general-purpose register `x0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRegister {
    /// `x0` always reads as zero and writes to it are discarded (RISC-V ISA manual, §2.1).
    #[default]
    Hardwired,
    /// `x0` is an ordinary storage register.
    Writable,
}

/// Register file containing the general-purpose registers and the program counter.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    gpr: Gpr,
    pc: u32,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(ZeroRegister::default())
    }
}

impl RegisterFile {
    /// Creates a new register file with all registers and the PC initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `zero` - Behaviour of register `x0`.
    pub const fn new(zero: ZeroRegister) -> Self {
        Self {
            gpr: Gpr::new(zero),
            pc: 0,
        }
    }

    /// Returns the policy applied to register `x0`.
    pub const fn zero_policy(&self) -> ZeroRegister {
        self.gpr.zero_policy()
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). A larger index is a caller bug and panics.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). A larger index is a caller bug and panics.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Reads a general-purpose register, rejecting indices outside `0..32`.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::InvalidIndex`] if `idx >= 32`.
    pub fn try_read(&self, idx: usize) -> Result<u32, RegisterError> {
        Self::check(idx)?;
        Ok(self.gpr.read(idx))
    }

    /// Writes a general-purpose register, rejecting indices outside `0..32`.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::InvalidIndex`] if `idx >= 32`.
    pub fn try_write(&mut self, idx: usize, val: u32) -> Result<(), RegisterError> {
        Self::check(idx)?;
        self.gpr.write(idx, val);
        Ok(())
    }

    /// Returns the program counter.
    pub const fn read_pc(&self) -> u32 {
        self.pc
    }

    /// Sets the program counter.
    pub const fn write_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Dumps the program counter and all general-purpose registers at trace level.
    pub fn dump(&self) {
        tracing::trace!("pc ={:#010x}", self.pc);
        self.gpr.dump();
    }

    const fn check(idx: usize) -> Result<(), RegisterError> {
        if idx < NUM_REGISTERS {
            Ok(())
        } else {
            Err(RegisterError::InvalidIndex(idx))
        }
    }
}
