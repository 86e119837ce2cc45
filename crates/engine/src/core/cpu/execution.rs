//! Instruction Execution.
//!
//! This module applies one decoded instruction to the architectural state. It performs the following:
//! 1. **Dispatch:** A single match on the resolved [`Op`] selects the semantic function.
//! 2. **Functional Units:** ALU, branch and memory work is delegated to [`Alu`], [`Bru`] and [`Lsu`].
//! 3. **Commit:** The destination register and the PC are written only after every
//!    fallible step has succeeded, so a faulting instruction leaves no trace in the state.
//! 4. **Observability:** Each instruction is traced with its PC and disassembly.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::{DecodeError, ExecError};
use crate::common::reg::RegisterFile;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::{BType, IType, Instruction, JType, RType, SType, UType};
use crate::isa::op::{AluOp, BranchCond, Decoded, LoadOp, MemWidth, Op};
use crate::soc::memory::Memory;

/// Executes a decoded instruction against a register file and memory.
///
/// # Arguments
///
/// * `decoded` - Instruction produced by [`decode`](crate::isa::decode::decode)
/// * `regs`    - Register file, including the PC
/// * `mem`     - Data memory
///
/// # Errors
///
/// Returns [`ExecError::Memory`] if a load or store falls outside memory. In that
/// case no register, memory byte or the PC has been modified.
///
/// # Examples
///
/// ```
/// use rv32i_engine::{Memory, RegisterFile, decode, execute};
///
/// let mut regs = RegisterFile::default();
/// let mut mem = Memory::new(64);
/// execute(&decode(0x00A00513)?, &mut regs, &mut mem)?; // addi a0, zero, 10
/// assert_eq!(regs.read(10), 10);
/// assert_eq!(regs.read_pc(), 4);
/// # Ok::<(), rv32i_engine::ExecError>(())
/// ```
pub fn execute(
    decoded: &Decoded,
    regs: &mut RegisterFile,
    mem: &mut Memory,
) -> Result<(), ExecError> {
    let pc = regs.read_pc();
    trace!(pc = format_args!("{pc:#010x}"), "{decoded}");

    let next_pc = match (decoded.op(), decoded.inst()) {
        (Op::Alu(op), Instruction::R(r)) => exec_alu_reg(op, r, pc, regs),
        (Op::AluImm(op), Instruction::I(i)) => exec_alu_imm(op, i, pc, regs),
        (Op::Load(op), Instruction::I(i)) => exec_load(op, i, pc, regs, mem)?,
        (Op::Store(width), Instruction::S(s)) => exec_store(width, s, pc, regs, mem)?,
        (Op::Branch(cond), Instruction::B(b)) => exec_branch(cond, b, pc, regs),
        (Op::Jal, Instruction::J(j)) => exec_jal(j, pc, regs),
        (Op::Jalr, Instruction::I(i)) => exec_jalr(i, pc, regs),
        (Op::Lui, Instruction::U(u)) => exec_lui(u, pc, regs),
        (Op::Auipc, Instruction::U(u)) => exec_auipc(u, pc, regs),
        (op, inst) => {
            debug!(?op, format = %inst.format(), "operation does not match instruction format");
            return Err(DecodeError::Illegal {
                word: decoded.raw(),
            }
            .into());
        }
    };

    regs.write_pc(next_pc);
    Ok(())
}

const fn sequential(pc: u32) -> u32 {
    pc.wrapping_add(INSTRUCTION_WIDTH)
}

const fn offset(base: u32, imm: i32) -> u32 {
    base.wrapping_add_signed(imm)
}

fn exec_alu_reg(op: AluOp, r: &RType, pc: u32, regs: &mut RegisterFile) -> u32 {
    let result = Alu::execute(op, regs.read(r.rs1), regs.read(r.rs2));
    regs.write(r.rd, result);
    sequential(pc)
}

fn exec_alu_imm(op: AluOp, i: &IType, pc: u32, regs: &mut RegisterFile) -> u32 {
    let result = Alu::execute(op, regs.read(i.rs1), i.imm as u32);
    regs.write(i.rd, result);
    sequential(pc)
}

fn exec_load(
    op: LoadOp,
    i: &IType,
    pc: u32,
    regs: &mut RegisterFile,
    mem: &Memory,
) -> Result<u32, ExecError> {
    let addr = offset(regs.read(i.rs1), i.imm);
    let val = Lsu::load(op, mem, addr)?;
    regs.write(i.rd, val);
    Ok(sequential(pc))
}

fn exec_store(
    width: MemWidth,
    s: &SType,
    pc: u32,
    regs: &RegisterFile,
    mem: &mut Memory,
) -> Result<u32, ExecError> {
    let addr = offset(regs.read(s.rs1), s.imm());
    Lsu::store(width, mem, addr, regs.read(s.rs2))?;
    Ok(sequential(pc))
}

fn exec_branch(cond: BranchCond, b: &BType, pc: u32, regs: &RegisterFile) -> u32 {
    if Bru::taken(cond, regs.read(b.rs1), regs.read(b.rs2)) {
        offset(pc, b.imm())
    } else {
        sequential(pc)
    }
}

fn exec_jal(j: &JType, pc: u32, regs: &mut RegisterFile) -> u32 {
    regs.write(j.rd, sequential(pc));
    offset(pc, j.imm())
}

fn exec_jalr(i: &IType, pc: u32, regs: &mut RegisterFile) -> u32 {
    // rs1 is read before rd is written so `jalr ra, 0(ra)` works.
    let target = offset(regs.read(i.rs1), i.imm) & !1;
    regs.write(i.rd, sequential(pc));
    target
}

fn exec_lui(u: &UType, pc: u32, regs: &mut RegisterFile) -> u32 {
    regs.write(u.rd, u.imm as u32);
    sequential(pc)
}

fn exec_auipc(u: &UType, pc: u32, regs: &mut RegisterFile) -> u32 {
    regs.write(u.rd, offset(pc, u.imm));
    sequential(pc)
}
