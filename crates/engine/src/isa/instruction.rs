//! Format-specific instruction representations.
//!
//! A decoded word is one of six shapes, one per base encoding. The shapes keep
//! exactly the fields their format stores; S/B/J keep the raw immediate
//! fragments and assemble the logical immediate on demand.
//!
//! ```text
//!        31       25 24   20 19   15 14  12 11        7 6      0
//! R-Type | funct7   | rs2   | rs1   |funct3| rd        | opcode |
//! I-Type | imm[11:0]        | rs1   |funct3| rd        | opcode |
//! S-Type | imm[11:5]| rs2   | rs1   |funct3| imm[4:0]  | opcode |
//! B-Type |12|10:5   | rs2   | rs1   |funct3| 4:1 |11   | opcode |
//! U-Type | imm[31:12]                      | rd        | opcode |
//! J-Type |20|10:1          |11|19:12       | rd        | opcode |
//! ```

use std::fmt;

use crate::common::constants::{COMPRESSED_INSTRUCTION_MASK, UNCOMPRESSED_INSTRUCTION_VALUE};
use crate::isa::bits::InstructionBits;
use crate::isa::immediate::{assemble_b_immediate, assemble_j_immediate, assemble_s_immediate};
use crate::isa::rv32i::opcodes;

/// Register-register operation (`OP`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RType {
    /// Secondary function field (bits 25-31).
    pub funct7: u32,
    /// Second source register.
    pub rs2: usize,
    /// First source register.
    pub rs1: usize,
    /// Function field (bits 12-14).
    pub funct3: u32,
    /// Destination register.
    pub rd: usize,
    /// Major opcode.
    pub opcode: u32,
}

/// Register-immediate operation, load or `JALR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IType {
    /// `imm[11:0]`, sign-extended.
    pub imm: i32,
    /// Source register.
    pub rs1: usize,
    /// Function field (bits 12-14).
    pub funct3: u32,
    /// Destination register.
    pub rd: usize,
    /// Major opcode.
    pub opcode: u32,
}

impl IType {
    /// Shift amount of SLLI/SRLI/SRAI (`imm[4:0]`).
    pub const fn shamt(&self) -> u32 {
        (self.imm as u32) & 0x1F
    }

    /// Upper seven immediate bits, which act as `funct7` for the immediate shifts.
    pub const fn funct7(&self) -> u32 {
        ((self.imm as u32) >> 5) & 0x7F
    }
}

/// Store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SType {
    /// `imm[11:5]` (bits 25-31).
    pub imm_11_5: u32,
    /// Source register holding the stored value.
    pub rs2: usize,
    /// Base address register.
    pub rs1: usize,
    /// Function field (bits 12-14).
    pub funct3: u32,
    /// `imm[4:0]` (bits 7-11).
    pub imm_4_0: u32,
    /// Major opcode.
    pub opcode: u32,
}

impl SType {
    /// The 12-bit signed store offset.
    pub const fn imm(&self) -> i32 {
        assemble_s_immediate(self.imm_11_5, self.imm_4_0)
    }
}

/// Conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BType {
    /// `imm[12]` (bit 31).
    pub imm_12: u32,
    /// `imm[10:5]` (bits 25-30).
    pub imm_10_5: u32,
    /// Second compared register.
    pub rs2: usize,
    /// First compared register.
    pub rs1: usize,
    /// Function field (bits 12-14).
    pub funct3: u32,
    /// `imm[4:1]` (bits 8-11).
    pub imm_4_1: u32,
    /// `imm[11]` (bit 7).
    pub imm_11: u32,
    /// Major opcode.
    pub opcode: u32,
}

impl BType {
    /// The 13-bit signed, even branch offset.
    pub const fn imm(&self) -> i32 {
        assemble_b_immediate(self.imm_12, self.imm_11, self.imm_10_5, self.imm_4_1)
    }
}

/// Upper-immediate operation (`LUI`, `AUIPC`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UType {
    /// `imm[31:12]` in place, low 12 bits zero.
    pub imm: i32,
    /// Destination register.
    pub rd: usize,
    /// Major opcode.
    pub opcode: u32,
}

/// Unconditional jump (`JAL`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JType {
    /// `imm[20]` (bit 31).
    pub imm_20: u32,
    /// `imm[10:1]` (bits 21-30).
    pub imm_10_1: u32,
    /// `imm[11]` (bit 20).
    pub imm_11: u32,
    /// `imm[19:12]` (bits 12-19).
    pub imm_19_12: u32,
    /// Destination (link) register.
    pub rd: usize,
    /// Major opcode.
    pub opcode: u32,
}

impl JType {
    /// The 21-bit signed, even jump offset.
    pub const fn imm(&self) -> i32 {
        assemble_j_immediate(self.imm_20, self.imm_19_12, self.imm_11, self.imm_10_1)
    }
}

/// An instruction decoded into the shape of its encoding format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register format.
    R(RType),
    /// Immediate format.
    I(IType),
    /// Store format.
    S(SType),
    /// Branch format.
    B(BType),
    /// Upper-immediate format.
    U(UType),
    /// Jump format.
    J(JType),
}

impl Instruction {
    /// Returns the encoding format of this instruction.
    pub const fn format(&self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::S(_) => Format::S,
            Self::B(_) => Format::B,
            Self::U(_) => Format::U,
            Self::J(_) => Format::J,
        }
    }

    /// Returns the major opcode.
    pub const fn opcode(&self) -> u32 {
        match self {
            Self::R(r) => r.opcode,
            Self::I(i) => i.opcode,
            Self::S(s) => s.opcode,
            Self::B(b) => b.opcode,
            Self::U(u) => u.opcode,
            Self::J(j) => j.opcode,
        }
    }

    /// Returns the destination register, for formats that have one.
    pub const fn rd(&self) -> Option<usize> {
        match self {
            Self::R(RType { rd, .. })
            | Self::I(IType { rd, .. })
            | Self::U(UType { rd, .. })
            | Self::J(JType { rd, .. }) => Some(*rd),
            Self::S(_) | Self::B(_) => None,
        }
    }

    /// Returns the assembled immediate, for formats that have one.
    pub const fn imm(&self) -> Option<i32> {
        match self {
            Self::R(_) => None,
            Self::I(i) => Some(i.imm),
            Self::S(s) => Some(s.imm()),
            Self::B(b) => Some(b.imm()),
            Self::U(u) => Some(u.imm),
            Self::J(j) => Some(j.imm()),
        }
    }
}

/// The encoding format of an instruction word, selected by its opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate, loads and `JALR`.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// `LUI` and `AUIPC`.
    U,
    /// `JAL`.
    J,
    /// 16-bit compressed encoding. No decoder exists for this class.
    Compressed,
}

impl Format {
    /// Classifies a raw word by its low two bits and major opcode.
    ///
    /// Returns `None` for a 32-bit encoding whose opcode is outside the RV32I subset.
    pub fn of(word: u32) -> Option<Self> {
        if word & COMPRESSED_INSTRUCTION_MASK != UNCOMPRESSED_INSTRUCTION_VALUE {
            return Some(Self::Compressed);
        }
        match word.opcode() {
            opcodes::OP_REG => Some(Self::R),
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Some(Self::I),
            opcodes::OP_STORE => Some(Self::S),
            opcodes::OP_BRANCH => Some(Self::B),
            opcodes::OP_LUI | opcodes::OP_AUIPC => Some(Self::U),
            opcodes::OP_JAL => Some(Self::J),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R => "R-type",
            Self::I => "I-type",
            Self::S => "S-type",
            Self::B => "B-type",
            Self::U => "U-type",
            Self::J => "J-type",
            Self::Compressed => "compressed",
        };
        f.write_str(name)
    }
}
