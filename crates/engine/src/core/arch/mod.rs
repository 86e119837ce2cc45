//! RISC-V architecture-specific components.
//!
//! This module contains the architectural register storage. Only the integer
//! register file exists in RV32I.

/// General-Purpose Register file implementation.
pub mod gpr;
