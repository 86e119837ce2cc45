//! Concrete operations.
//!
//! The decoder resolves every supported word to an [`Op`], which groups
//! instructions by the functional unit that implements them, and pairs it with
//! the format-specific [`Instruction`] in a [`Decoded`] value.

use std::fmt;

use crate::isa::disasm;
use crate::isa::instruction::Instruction;

/// ALU operation types shared by the register and immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    Add,
    /// Integer subtraction (register form only).
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// Comparison performed by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `rs1 == rs2`.
    Eq,
    /// `rs1 != rs2`.
    Ne,
    /// `rs1 < rs2`, signed.
    Lt,
    /// `rs1 >= rs2`, signed.
    Ge,
    /// `rs1 < rs2`, unsigned.
    Ltu,
    /// `rs1 >= rs2`, unsigned.
    Geu,
}

/// Width of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
}

impl MemWidth {
    /// Number of bytes transferred.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// A load: access width and whether the value is sign-extended to 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOp {
    /// Access width.
    pub width: MemWidth,
    /// `true` for LB/LH, `false` for LBU/LHU. LW ignores it.
    pub signed: bool,
}

/// A concrete RV32I operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Register-register ALU operation (`ADD`, `SUB`, `SLT`, ...).
    Alu(AluOp),
    /// Register-immediate ALU operation (`ADDI`, `SLTI`, `SRAI`, ...).
    AluImm(AluOp),
    /// Load (`LB`, `LH`, `LW`, `LBU`, `LHU`).
    Load(LoadOp),
    /// Store (`SB`, `SH`, `SW`).
    Store(MemWidth),
    /// Conditional branch (`BEQ`, `BNE`, ...).
    Branch(BranchCond),
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
}

impl Op {
    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Alu(op) => match op {
                AluOp::Add => "add",
                AluOp::Sub => "sub",
                AluOp::Sll => "sll",
                AluOp::Slt => "slt",
                AluOp::Sltu => "sltu",
                AluOp::Xor => "xor",
                AluOp::Srl => "srl",
                AluOp::Sra => "sra",
                AluOp::Or => "or",
                AluOp::And => "and",
            },
            Self::AluImm(op) => match op {
                AluOp::Add => "addi",
                // SUB has no immediate encoding; the decoder never pairs it with OP-IMM.
                AluOp::Sub => "sub",
                AluOp::Sll => "slli",
                AluOp::Slt => "slti",
                AluOp::Sltu => "sltiu",
                AluOp::Xor => "xori",
                AluOp::Srl => "srli",
                AluOp::Sra => "srai",
                AluOp::Or => "ori",
                AluOp::And => "andi",
            },
            Self::Load(LoadOp { width, signed }) => match (width, signed) {
                (MemWidth::Byte, true) => "lb",
                (MemWidth::Byte, false) => "lbu",
                (MemWidth::Half, true) => "lh",
                (MemWidth::Half, false) => "lhu",
                (MemWidth::Word, _) => "lw",
            },
            Self::Store(width) => match width {
                MemWidth::Byte => "sb",
                MemWidth::Half => "sh",
                MemWidth::Word => "sw",
            },
            Self::Branch(cond) => match cond {
                BranchCond::Eq => "beq",
                BranchCond::Ne => "bne",
                BranchCond::Lt => "blt",
                BranchCond::Ge => "bge",
                BranchCond::Ltu => "bltu",
                BranchCond::Geu => "bgeu",
            },
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
        }
    }
}

/// A fully decoded instruction: the raw word, its operation and its fields.
///
/// Only [`decode`](crate::isa::decode::decode) produces values of this type, so
/// the operation always agrees with the instruction format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    raw: u32,
    op: Op,
    inst: Instruction,
}

impl Decoded {
    pub(crate) const fn new(raw: u32, op: Op, inst: Instruction) -> Self {
        Self { raw, op, inst }
    }

    /// The original instruction word.
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// The resolved operation.
    pub const fn op(&self) -> Op {
        self.op
    }

    /// The format-specific fields.
    pub const fn inst(&self) -> &Instruction {
        &self.inst
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disasm::format_decoded(self))
    }
}
