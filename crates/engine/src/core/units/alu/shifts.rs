//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). Only the low five bits of the shift
//! amount are used.

use crate::common::constants::SHAMT_MASK;
use crate::isa::op::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (upper 27 bits ignored).
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
