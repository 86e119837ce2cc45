//! Core processor implementation.
//!
//! This module contains the hart, the stateless execution engine, the
//! architectural register storage and the functional units.

/// Architecture-specific components (general-purpose registers).
pub mod arch;

/// Hart context and instruction execution.
pub mod cpu;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Hart;
pub use self::cpu::execution::execute;
