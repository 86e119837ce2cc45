//! Branch Resolution Unit (BRU).
//!
//! Evaluates the comparison of a conditional branch. Target computation and
//! the PC update are left to the execution engine.

use crate::isa::op::BranchCond;

/// Branch Resolution Unit for conditional branches.
pub struct Bru;

impl Bru {
    /// Returns `true` if the branch condition holds for operands `a` (`rs1`) and `b` (`rs2`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32i_engine::core::units::bru::Bru;
    /// use rv32i_engine::isa::op::BranchCond;
    ///
    /// assert!(Bru::taken(BranchCond::Lt, -1_i32 as u32, 0));
    /// assert!(!Bru::taken(BranchCond::Ltu, -1_i32 as u32, 0));
    /// ```
    pub const fn taken(cond: BranchCond, a: u32, b: u32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i32) < (b as i32),
            BranchCond::Ge => (a as i32) >= (b as i32),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}
