//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit RV32I instruction words. It provides:
//! 1. **Format Decoders:** One pure function per encoding format (R, I, S, B, U, J),
//!    each built only from [`extract_bits`](crate::isa::bits::extract_bits).
//! 2. **Operation Resolution:** Selection of the concrete [`Op`] from opcode, funct3
//!    and funct7.
//! 3. **Fail-Fast Paths:** Compressed words and unassigned encodings are reported as
//!    a [`DecodeError`] instead of yielding a value the engine could misinterpret.

use crate::common::error::DecodeError;
use crate::isa::bits::{
    B_IMM_4_1, B_IMM_10_5, B_IMM_11, B_IMM_12, I_IMM, InstructionBits, J_IMM_10_1, J_IMM_11,
    J_IMM_19_12, J_IMM_20, S_IMM_4_0, S_IMM_11_5, U_IMM,
};
use crate::isa::immediate::{I_IMM_BITS, assemble_u_immediate, sign_extend};
use crate::isa::instruction::{BType, Format, IType, Instruction, JType, RType, SType, UType};
use crate::isa::op::{AluOp, BranchCond, Decoded, LoadOp, MemWidth, Op};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Decodes an R-type word.
pub fn decode_r(word: u32) -> RType {
    RType {
        funct7: word.funct7(),
        rs2: word.rs2(),
        rs1: word.rs1(),
        funct3: word.funct3(),
        rd: word.rd(),
        opcode: word.opcode(),
    }
}

/// Decodes an I-type word. The 12-bit immediate is sign-extended.
pub fn decode_i(word: u32) -> IType {
    IType {
        imm: sign_extend(I_IMM.extract(word), I_IMM_BITS),
        rs1: word.rs1(),
        funct3: word.funct3(),
        rd: word.rd(),
        opcode: word.opcode(),
    }
}

/// Decodes an S-type word, keeping both immediate fragments.
pub fn decode_s(word: u32) -> SType {
    SType {
        imm_11_5: S_IMM_11_5.extract(word),
        rs2: word.rs2(),
        rs1: word.rs1(),
        funct3: word.funct3(),
        imm_4_0: S_IMM_4_0.extract(word),
        opcode: word.opcode(),
    }
}

/// Decodes a B-type word, keeping all four immediate fragments.
pub fn decode_b(word: u32) -> BType {
    BType {
        imm_12: B_IMM_12.extract(word),
        imm_10_5: B_IMM_10_5.extract(word),
        rs2: word.rs2(),
        rs1: word.rs1(),
        funct3: word.funct3(),
        imm_4_1: B_IMM_4_1.extract(word),
        imm_11: B_IMM_11.extract(word),
        opcode: word.opcode(),
    }
}

/// Decodes a U-type word. The immediate is sign-extended from 20 bits and shifted into place.
pub fn decode_u(word: u32) -> UType {
    UType {
        imm: assemble_u_immediate(U_IMM.extract(word)),
        rd: word.rd(),
        opcode: word.opcode(),
    }
}

/// Decodes a J-type word, keeping all four immediate fragments.
pub fn decode_j(word: u32) -> JType {
    JType {
        imm_20: J_IMM_20.extract(word),
        imm_10_1: J_IMM_10_1.extract(word),
        imm_11: J_IMM_11.extract(word),
        imm_19_12: J_IMM_19_12.extract(word),
        rd: word.rd(),
        opcode: word.opcode(),
    }
}

/// Decodes a compressed (16-bit) instruction.
///
/// # Errors
///
/// Always returns [`DecodeError::NotImplemented`]: the compressed extension has no decoder.
pub const fn decode_compressed(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::NotImplemented { word })
}

/// Decodes a word into the shape of its format, without resolving the operation.
///
/// # Errors
///
/// [`DecodeError::NotImplemented`] for compressed words and
/// [`DecodeError::UnknownOpcode`] for opcodes outside the RV32I subset.
pub fn decode_format(word: u32) -> Result<Instruction, DecodeError> {
    let format = Format::of(word).ok_or_else(|| DecodeError::UnknownOpcode {
        word,
        opcode: word.opcode(),
    })?;
    match format {
        Format::R => Ok(Instruction::R(decode_r(word))),
        Format::I => Ok(Instruction::I(decode_i(word))),
        Format::S => Ok(Instruction::S(decode_s(word))),
        Format::B => Ok(Instruction::B(decode_b(word))),
        Format::U => Ok(Instruction::U(decode_u(word))),
        Format::J => Ok(Instruction::J(decode_j(word))),
        Format::Compressed => decode_compressed(word),
    }
}

/// Decodes a 32-bit instruction word into its operation and fields.
///
/// # Errors
///
/// * [`DecodeError::NotImplemented`] - the word is a compressed encoding.
/// * [`DecodeError::UnknownOpcode`] - the major opcode is not part of RV32I.
/// * [`DecodeError::Illegal`] - the funct3/funct7 combination is unassigned.
///
/// # Examples
///
/// ```
/// use rv32i_engine::isa::decode::decode;
/// use rv32i_engine::isa::op::{AluOp, Op};
///
/// let decoded = decode(0x00A00513)?; // addi a0, zero, 10
/// assert_eq!(decoded.op(), Op::AluImm(AluOp::Add));
/// assert_eq!(decoded.inst().imm(), Some(10));
/// # Ok::<(), rv32i_engine::DecodeError>(())
/// ```
pub fn decode(word: u32) -> Result<Decoded, DecodeError> {
    let inst = decode_format(word)?;
    let op = resolve(&inst).ok_or(DecodeError::Illegal { word })?;
    Ok(Decoded::new(word, op, inst))
}

/// Selects the concrete operation for an already format-decoded word.
fn resolve(inst: &Instruction) -> Option<Op> {
    match inst {
        Instruction::R(r) => resolve_reg(r).map(Op::Alu),
        Instruction::I(i) => match i.opcode {
            opcodes::OP_IMM => resolve_imm(i).map(Op::AluImm),
            opcodes::OP_LOAD => resolve_load(i.funct3).map(Op::Load),
            opcodes::OP_JALR => (i.funct3 == funct3::JALR).then_some(Op::Jalr),
            _ => None,
        },
        Instruction::S(s) => resolve_store(s.funct3).map(Op::Store),
        Instruction::B(b) => resolve_branch(b.funct3).map(Op::Branch),
        Instruction::U(u) => match u.opcode {
            opcodes::OP_LUI => Some(Op::Lui),
            opcodes::OP_AUIPC => Some(Op::Auipc),
            _ => None,
        },
        Instruction::J(_) => Some(Op::Jal),
    }
}

const fn resolve_reg(r: &RType) -> Option<AluOp> {
    let op = match (r.funct3, r.funct7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
        (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
        (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
        (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
        (funct3::SLTU, funct7::DEFAULT) => AluOp::Sltu,
        (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
        (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
        (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
        (funct3::OR, funct7::DEFAULT) => AluOp::Or,
        (funct3::AND, funct7::DEFAULT) => AluOp::And,
        _ => return None,
    };
    Some(op)
}

const fn resolve_imm(i: &IType) -> Option<AluOp> {
    let op = match i.funct3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        // RV32 shifts: imm[11:5] selects the variant and shamt[5] must be zero.
        funct3::SLL if i.funct7() == funct7::DEFAULT => AluOp::Sll,
        funct3::SRL_SRA if i.funct7() == funct7::DEFAULT => AluOp::Srl,
        funct3::SRL_SRA if i.funct7() == funct7::SRA => AluOp::Sra,
        _ => return None,
    };
    Some(op)
}

const fn resolve_load(f3: u32) -> Option<LoadOp> {
    let (width, signed) = match f3 {
        funct3::LB => (MemWidth::Byte, true),
        funct3::LH => (MemWidth::Half, true),
        funct3::LW => (MemWidth::Word, true),
        funct3::LBU => (MemWidth::Byte, false),
        funct3::LHU => (MemWidth::Half, false),
        _ => return None,
    };
    Some(LoadOp { width, signed })
}

const fn resolve_store(f3: u32) -> Option<MemWidth> {
    match f3 {
        funct3::SB => Some(MemWidth::Byte),
        funct3::SH => Some(MemWidth::Half),
        funct3::SW => Some(MemWidth::Word),
        _ => None,
    }
}

const fn resolve_branch(f3: u32) -> Option<BranchCond> {
    match f3 {
        funct3::BEQ => Some(BranchCond::Eq),
        funct3::BNE => Some(BranchCond::Ne),
        funct3::BLT => Some(BranchCond::Lt),
        funct3::BGE => Some(BranchCond::Ge),
        funct3::BLTU => Some(BranchCond::Ltu),
        funct3::BGEU => Some(BranchCond::Geu),
        _ => None,
    }
}

/// Returns `true` if `word` would be rejected as a compressed encoding.
pub fn is_compressed(word: u32) -> bool {
    Format::of(word) == Some(Format::Compressed)
}
