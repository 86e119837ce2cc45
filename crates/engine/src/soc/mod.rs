//! System-on-Chip (SoC) Components.
//!
//! The execution engine sees a single flat data memory; there is no bus,
//! MMIO or device model.

/// Byte-addressable data memory.
pub mod memory;

pub use memory::Memory;
