//! # Register File Tests
//!
//! Tests for the general-purpose registers, the program counter and the
//! `x0` policy.

use rv32i_engine::core::arch::gpr::Gpr;
use rv32i_engine::{RegisterError, RegisterFile, ZeroRegister};

#[test]
fn test_register_file_new_initializes_to_zero() {
    let regs = RegisterFile::default();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0);
    }
    assert_eq!(regs.read_pc(), 0);
    assert_eq!(regs.zero_policy(), ZeroRegister::Hardwired);
}

#[test]
fn test_hardwired_x0_ignores_writes() {
    let mut regs = RegisterFile::new(ZeroRegister::Hardwired);
    for value in [1u32, 0xFFFF_FFFF, 0x8000_0000] {
        regs.write(0, value);
        assert_eq!(regs.read(0), 0);
    }
}

#[test]
fn test_writable_x0_stores_values() {
    let mut regs = RegisterFile::new(ZeroRegister::Writable);
    regs.write(0, 4);
    assert_eq!(regs.read(0), 4);
}

#[test]
fn test_write_all_registers() {
    let mut regs = RegisterFile::default();
    for i in 1..32 {
        let value = (i as u32) << 16 | i as u32;
        regs.write(i, value);
        assert_eq!(regs.read(i), value);
    }
}

#[test]
fn test_multiple_writes_to_same_register() {
    let mut regs = RegisterFile::default();
    regs.write(5, 100);
    regs.write(5, 200);
    assert_eq!(regs.read(5), 200);
}

#[test]
fn test_pc_read_write() {
    let mut regs = RegisterFile::default();
    regs.write_pc(0x1000);
    assert_eq!(regs.read_pc(), 0x1000);
}

#[test]
fn test_checked_access_rejects_index_32() {
    let mut regs = RegisterFile::default();
    assert_eq!(regs.try_read(32), Err(RegisterError::InvalidIndex(32)));
    assert_eq!(regs.try_write(32, 1), Err(RegisterError::InvalidIndex(32)));
    assert_eq!(regs.try_write(31, 7), Ok(()));
    assert_eq!(regs.try_read(31), Ok(7));
}

#[test]
#[should_panic]
fn test_unchecked_read_out_of_range_panics() {
    let regs = RegisterFile::default();
    let _ = regs.read(32);
}

#[test]
fn test_dump_does_not_disturb_state() {
    crate::common::init_tracing();
    let mut regs = RegisterFile::default();
    regs.write(10, 0xDEAD_BEEF);
    regs.dump();
    assert_eq!(regs.read(10), 0xDEAD_BEEF);
}

#[test]
fn test_gpr_policy_is_reported() {
    let gpr = Gpr::new(ZeroRegister::Writable);
    assert_eq!(gpr.zero_policy(), ZeroRegister::Writable);
    assert_eq!(gpr.read(0), 0);
}
