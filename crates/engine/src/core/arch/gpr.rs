//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for RV32.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`) of 32 bits each.
//! 2. **Zero Register Policy:** Applies the configured behaviour of register `x0`.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::NUM_REGISTERS;
use crate::common::reg::ZeroRegister;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Whether
/// register `x0` reads as the constant zero depends on the [`ZeroRegister`] policy.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
    zero: ZeroRegister,
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `zero` - Behaviour of register `x0`.
    pub const fn new(zero: ZeroRegister) -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            zero,
        }
    }

    /// Returns the policy applied to register `x0`.
    pub const fn zero_policy(&self) -> ZeroRegister {
        self.zero
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Panics on a larger index.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` returns 0
    /// under [`ZeroRegister::Hardwired`].
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 && self.zero == ZeroRegister::Hardwired {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Panics on a larger index.
    /// * `val` - The 32-bit value to write. Dropped for `x0` under [`ZeroRegister::Hardwired`].
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 || self.zero == ZeroRegister::Writable {
            self.regs[idx] = val;
        }
    }

    /// Emits the contents of all general-purpose registers as trace events.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging purposes.
    pub fn dump(&self) {
        for i in (0..NUM_REGISTERS).step_by(2) {
            tracing::trace!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}
