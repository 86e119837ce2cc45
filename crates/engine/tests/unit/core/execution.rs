//! Instruction Execution Tests.
//!
//! Each test seeds registers/memory, executes one or more words through the
//! hart and checks the architectural effects, including the PC.

use std::io;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32i_engine::isa::abi::{REG_A0, REG_A1, REG_SP};
use rv32i_engine::{DecodeError, ExecError, Memory, MemoryError, RegisterFile, decode, execute};

use crate::common::{InstructionBuilder as B, TestContext};

// ─── ALU: immediate forms ────────────────────────────────────────────────────

#[test]
fn test_addi_reads_seeded_x0() {
    let mut ctx = TestContext::writable_x0();
    ctx.set_reg(0, 4);
    ctx.step(B::new().addi(1, 0, 2).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 6);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_addi_hardwired_x0_reads_zero() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 4);
    ctx.step(B::new().addi(1, 0, 2).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 2);
}

#[test]
fn test_write_to_hardwired_x0_is_discarded() {
    let mut ctx = TestContext::new();
    ctx.step(B::new().addi(0, 0, 5).build()).unwrap();
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_addi_negative_wraps() {
    let mut ctx = TestContext::new();
    ctx.step(B::new().addi(1, 0, -1).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 0xFFFF_FFFF);
    ctx.step(B::new().addi(1, 1, 1).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn test_slli_from_seeded_x0() {
    let mut ctx = TestContext::writable_x0();
    ctx.set_reg(0, 8);
    ctx.step(B::new().slli(1, 0, 2).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 32);
}

#[test]
fn test_srli_is_logical() {
    let mut ctx = TestContext::writable_x0();
    ctx.set_reg(0, 0xFFFF_FFE0);
    ctx.step(B::new().srli(1, 0, 2).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 1_073_741_816);
}

#[test]
fn test_srai_is_arithmetic() {
    let mut ctx = TestContext::writable_x0();
    ctx.set_reg(0, 0xFFFF_FFE0);
    ctx.step(B::new().srai(1, 0, 2).build()).unwrap();
    assert_eq!(ctx.get_reg(1) as i32, -8);
}

#[rstest]
#[case::slti_true(B::new().slti(3, 1, 5), 4, 1)]
#[case::slti_signed(B::new().slti(3, 1, 0), -1i32 as u32, 1)]
#[case::sltiu_unsigned(B::new().sltiu(3, 1, -1), 4, 1)]
#[case::sltiu_false(B::new().sltiu(3, 1, 1), 4, 0)]
#[case::xori_not(B::new().xori(3, 1, -1), 0x0F0F_0F0F, 0xF0F0_F0F0)]
#[case::ori(B::new().ori(3, 1, 0x0F0), 0x00F, 0x0FF)]
#[case::andi(B::new().andi(3, 1, 0x0FF), 0x1234, 0x34)]
fn test_alu_immediate(#[case] inst: B, #[case] rs1: u32, #[case] expected: u32) {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, rs1);
    ctx.step(inst.build()).unwrap();
    assert_eq!(ctx.get_reg(3), expected);
    assert_eq!(ctx.pc(), 4);
}

// ─── ALU: register forms ─────────────────────────────────────────────────────

#[rstest]
#[case::add(B::new().add(1, 2, 3), 2, 3, 5)]
#[case::sub(B::new().sub(1, 2, 3), 2, 3, 0xFFFF_FFFF)]
#[case::slt(B::new().slt(1, 2, 3), 4, 5, 1)]
#[case::slt_false(B::new().slt(1, 2, 3), 5, 4, 0)]
#[case::sltu(B::new().sltu(1, 2, 3), 4, -5i32 as u32, 1)]
#[case::and(B::new().and(1, 2, 3), 0b1100, 0b1010, 0b1000)]
#[case::or(B::new().or(1, 2, 3), 0b1100, 0b1010, 0b1110)]
#[case::xor(B::new().xor(1, 2, 3), 0b1100, 0b1010, 0b0110)]
#[case::sll(B::new().sll(1, 2, 3), 1, 4, 16)]
#[case::sll_masked(B::new().sll(1, 2, 3), 1, 36, 16)]
#[case::srl(B::new().srl(1, 2, 3), 0x8000_0000, 4, 0x0800_0000)]
#[case::sra(B::new().sra(1, 2, 3), 0x8000_0000, 4, 0xF800_0000)]
fn test_alu_register(#[case] inst: B, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, a);
    ctx.set_reg(3, b);
    ctx.step(inst.build()).unwrap();
    assert_eq!(ctx.get_reg(1), expected);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_rd_may_alias_sources() {
    let mut ctx = TestContext::new();
    ctx.set_reg(5, 21);
    ctx.step(B::new().add(5, 5, 5).build()).unwrap();
    assert_eq!(ctx.get_reg(5), 42);
}

// ─── Upper immediates ────────────────────────────────────────────────────────

#[test]
fn test_lui() {
    let mut ctx = TestContext::new();
    ctx.step(B::new().lui(1, 1).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 4096);
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_lui_sets_high_bits() {
    let mut ctx = TestContext::new();
    ctx.step(B::new().lui(1, 0xDEADB).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 0xDEAD_B000);
}

#[test]
fn test_auipc() {
    let mut ctx = TestContext::new();
    ctx.set_pc(4);
    ctx.step(B::new().auipc(1, 1).build()).unwrap();
    assert_eq!(ctx.get_reg(1), 4100);
    assert_eq!(ctx.pc(), 8);
}

#[test]
fn test_lui_addi_builds_constant() {
    let mut ctx = TestContext::new();
    ctx.run(&[
        B::new().lui(10, 0x12345).build(),
        B::new().addi(10, 10, 0x678).build(),
    ])
    .unwrap();
    assert_eq!(ctx.get_reg(10), 0x1234_5678);
    assert_eq!(ctx.pc(), 8);
}

// ─── Jumps ───────────────────────────────────────────────────────────────────

#[test]
fn test_jal() {
    let mut ctx = TestContext::new();
    ctx.set_pc(10);
    ctx.step(B::new().jal(1, 16).build()).unwrap();
    assert_eq!(ctx.pc(), 26);
    assert_eq!(ctx.get_reg(1), 14);
}

#[test]
fn test_jal_backwards() {
    let mut ctx = TestContext::new();
    ctx.set_pc(100);
    ctx.step(B::new().jal(1, -40).build()).unwrap();
    assert_eq!(ctx.pc(), 60);
    assert_eq!(ctx.get_reg(1), 104);
}

#[test]
fn test_jalr() {
    let mut ctx = TestContext::new();
    ctx.set_pc(5);
    ctx.set_reg(REG_A1, 15);
    ctx.step(B::new().jalr(REG_A0 as u32, REG_A1 as u32, 10).build())
        .unwrap();
    assert_eq!(ctx.pc(), 24);
    assert_eq!(ctx.get_reg(REG_A0), 9);
}

#[test]
fn test_jalr_clears_low_bit() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_A1, 0x101);
    ctx.step(B::new().jalr(0, REG_A1 as u32, 2).build())
        .unwrap();
    assert_eq!(ctx.pc(), 0x102);
}

#[test]
fn test_jalr_rd_equals_rs1() {
    let mut ctx = TestContext::new();
    ctx.set_pc(0x40);
    ctx.set_reg(1, 0x200);
    ctx.step(B::new().jalr(1, 1, 0).build()).unwrap();
    assert_eq!(ctx.pc(), 0x200);
    assert_eq!(ctx.get_reg(1), 0x44);
}

// ─── Branches ────────────────────────────────────────────────────────────────

#[test]
fn test_beq_not_taken_advances() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);
    ctx.set_pc(5);
    ctx.step(B::new().beq(1, 2, 10).build()).unwrap();
    assert_eq!(ctx.pc(), 9);
}

#[test]
fn test_beq_taken() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 1);
    ctx.set_reg(3, 1);
    ctx.set_pc(5);
    ctx.step(B::new().beq(1, 3, 10).build()).unwrap();
    assert_eq!(ctx.pc(), 15);
}

#[rstest]
#[case::bne_taken(B::new().bne(1, 2, 16), 1, 2, 0x110)]
#[case::bne_not_taken(B::new().bne(1, 2, 16), 2, 2, 0x104)]
#[case::blt_signed(B::new().blt(1, 2, -8), -1i32 as u32, 0, 0xF8)]
#[case::blt_not_taken(B::new().blt(1, 2, -8), 0, -1i32 as u32, 0x104)]
#[case::bge_equal(B::new().bge(1, 2, 8), 3, 3, 0x108)]
#[case::bltu_unsigned(B::new().bltu(1, 2, 8), -1i32 as u32, 0, 0x104)]
#[case::bgeu_unsigned(B::new().bgeu(1, 2, 8), -1i32 as u32, 0, 0x108)]
fn test_branches(#[case] inst: B, #[case] a: u32, #[case] b: u32, #[case] pc: u32) {
    let mut ctx = TestContext::new();
    ctx.set_pc(0x100);
    ctx.set_reg(1, a);
    ctx.set_reg(2, b);
    ctx.step(inst.build()).unwrap();
    assert_eq!(ctx.pc(), pc);
}

// ─── Loads and stores ────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(31)]
#[case(63)]
fn test_sw_lw_round_trip(#[case] offset: i32) {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_A0, 0x100);
    ctx.set_reg(REG_A1, 0xCAFE_BABE);
    ctx.run(&[
        B::new().sw(REG_A0 as u32, REG_A1 as u32, offset).build(),
        B::new().lw(REG_SP as u32, REG_A0 as u32, offset).build(),
    ])
    .unwrap();
    assert_eq!(ctx.get_reg(REG_SP), 0xCAFE_BABE);
    assert_eq!(
        ctx.hart.memory().load_word(0x100 + offset as u32),
        Ok(0xCAFE_BABE)
    );
    assert_eq!(ctx.pc(), 8);
}

#[test]
fn test_store_layout_is_little_endian() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 0x1122_3344);
    ctx.step(B::new().sw(0, 2, 16).build()).unwrap();
    assert_eq!(
        ctx.hart.memory().read_bytes(16, 4).unwrap(),
        &[0x44, 0x33, 0x22, 0x11]
    );
}

#[test]
fn test_narrow_loads() {
    let mut ctx = TestContext::new();
    ctx.hart
        .memory_mut()
        .write_bytes(0x20, &[0xF0, 0x80, 0x01, 0x02])
        .unwrap();
    ctx.set_reg(1, 0x20);
    ctx.run(&[
        B::new().lb(10, 1, 0).build(),
        B::new().lbu(11, 1, 0).build(),
        B::new().lh(12, 1, 0).build(),
        B::new().lhu(13, 1, 0).build(),
        B::new().lh(14, 1, 2).build(),
    ])
    .unwrap();
    assert_eq!(ctx.get_reg(10), 0xFFFF_FFF0);
    assert_eq!(ctx.get_reg(11), 0xF0);
    assert_eq!(ctx.get_reg(12), 0xFFFF_80F0);
    assert_eq!(ctx.get_reg(13), 0x80F0);
    assert_eq!(ctx.get_reg(14), 0x0201);
}

#[test]
fn test_narrow_stores() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x40);
    ctx.set_reg(2, 0xAABB_CCDD);
    ctx.step(B::new().sb(1, 2, 0).build()).unwrap();
    ctx.step(B::new().sh(1, 2, 2).build()).unwrap();
    assert_eq!(ctx.hart.memory().load_word(0x40), Ok(0xCCDD_00DD));
}

#[test]
fn test_negative_offset_and_misaligned_access() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x103);
    ctx.set_reg(2, 0x0102_0304);
    ctx.run(&[
        B::new().sw(1, 2, -2).build(),
        B::new().lw(3, 1, -2).build(),
    ])
    .unwrap();
    assert_eq!(ctx.get_reg(3), 0x0102_0304);
    assert_eq!(ctx.hart.memory().load_word(0x101), Ok(0x0102_0304));
}

// ─── Faults ──────────────────────────────────────────────────────────────────

#[test]
fn test_out_of_bounds_load_leaves_state_unchanged() {
    let mut ctx = TestContext::new();
    let capacity = ctx.hart.memory().capacity();
    ctx.set_pc(0x10);
    ctx.set_reg(1, capacity as u32 - 2);
    ctx.set_reg(5, 0x5555);
    let before = ctx.hart.clone();

    let err = ctx.step(B::new().lw(5, 1, 0).build()).unwrap_err();
    assert_eq!(
        err,
        ExecError::Memory(MemoryError::OutOfBounds {
            addr: capacity as u32 - 2,
            width: 4,
            capacity,
        })
    );
    assert_eq!(ctx.get_reg(5), 0x5555);
    assert_eq!(ctx.pc(), 0x10);
    assert_eq!(ctx.hart.memory(), before.memory());
}

#[test]
fn test_out_of_bounds_store_leaves_state_unchanged() {
    let mut ctx = TestContext::new();
    let capacity = ctx.hart.memory().capacity();
    ctx.set_reg(1, capacity as u32 - 1);
    ctx.set_reg(2, 0xFFFF_FFFF);
    let before = ctx.hart.memory().clone();

    let err = ctx.step(B::new().sh(1, 2, 0).build()).unwrap_err();
    assert_eq!(
        err,
        ExecError::Memory(MemoryError::OutOfBounds {
            addr: capacity as u32 - 1,
            width: 2,
            capacity,
        })
    );
    assert_eq!(ctx.hart.memory(), &before);
    assert_eq!(ctx.pc(), 0);
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_out_of_bounds_access_is_logged_once() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut ctx = TestContext::new();
    let capacity = ctx.hart.memory().capacity() as u32;
    ctx.set_reg(1, capacity);
    tracing::subscriber::with_default(subscriber, || {
        assert!(ctx.step(B::new().lw(2, 1, 0).build()).is_err());
        assert!(ctx.step(B::new().sw(1, 2, 0).build()).is_err());
    });

    let output = log.contents();
    assert_eq!(output.matches("out of bounds").count(), 2, "{output}");
    assert_eq!(output.lines().count(), 2, "{output}");
}

#[test]
fn test_effective_address_wraps() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0xFFFF_FFFF);
    ctx.step(B::new().lb(2, 1, 1).build()).unwrap();
    assert_eq!(ctx.get_reg(2), 0);
}

#[test]
fn test_decode_failures_surface_as_exec_errors() {
    let mut ctx = TestContext::new();
    assert_eq!(
        ctx.step(0x0000_4501),
        Err(ExecError::Decode(DecodeError::NotImplemented { word: 0x0000_4501 }))
    );
    assert_eq!(
        ctx.step(0x0000_007F),
        Err(ExecError::Decode(DecodeError::UnknownOpcode {
            word: 0x0000_007F,
            opcode: 0x7F,
        }))
    );
    assert_eq!(ctx.pc(), 0);
}

// ─── Free function ───────────────────────────────────────────────────────────

#[test]
fn test_execute_with_explicit_state() {
    crate::common::init_tracing();
    let mut regs = RegisterFile::default();
    let mut mem = Memory::new(32);
    regs.write(2, 7);

    let decoded = decode(B::new().sw(0, 2, 12).build()).unwrap();
    execute(&decoded, &mut regs, &mut mem).unwrap();
    let decoded = decode(B::new().lbu(3, 0, 12).build()).unwrap();
    execute(&decoded, &mut regs, &mut mem).unwrap();

    assert_eq!(regs.read(3), 7);
    assert_eq!(regs.read_pc(), 8);
}
