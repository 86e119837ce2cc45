//! Execution units and functional components.
//!
//! This module contains the functional units the execution engine dispatches
//! to: the integer ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
