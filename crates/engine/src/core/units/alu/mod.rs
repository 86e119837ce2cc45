//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU shared by the register-register
//! (`OP`) and register-immediate (`OP-IMM`) instructions. The immediate forms
//! pass the sign-extended immediate as the second operand.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::op::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1`)
    /// * `b`  - Second operand (`rs2` or the immediate; its low five bits are the shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result. Arithmetic wraps modulo 2^32.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_engine::core::units::alu::Alu;
    /// use rv32i_engine::isa::op::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -5_i32 as u32, 10), 0);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
