//! Instruction Disassembler for RV32I.
//!
//! Converts decoded instructions into human-readable assembly for trace
//! logging and test diagnostics. Registers are printed by ABI name and
//! branch/jump offsets are printed relative to the instruction.
//!
//! # Usage
//!
//! ```
//! use rv32i_engine::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x00A00513), "addi a0, zero, 10");
//! assert_eq!(disassemble(0x0001), "unknown");
//! ```

use crate::isa::abi::name;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::op::{AluOp, Decoded, Op};

/// Disassembles a raw instruction word, or returns `"unknown"` if it does not decode.
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |d| format_decoded(&d))
}

/// Renders a decoded instruction in assembler syntax.
pub fn format_decoded(decoded: &Decoded) -> String {
    let mn = decoded.op().mnemonic();
    match (decoded.op(), decoded.inst()) {
        (_, Instruction::R(r)) => {
            format!("{mn} {}, {}, {}", name(r.rd), name(r.rs1), name(r.rs2))
        }
        (Op::Load(_) | Op::Jalr, Instruction::I(i)) => {
            format!("{mn} {}, {}({})", name(i.rd), i.imm, name(i.rs1))
        }
        (Op::AluImm(AluOp::Sll | AluOp::Srl | AluOp::Sra), Instruction::I(i)) => {
            format!("{mn} {}, {}, {}", name(i.rd), name(i.rs1), i.shamt())
        }
        (_, Instruction::I(i)) => {
            format!("{mn} {}, {}, {}", name(i.rd), name(i.rs1), i.imm)
        }
        (_, Instruction::S(s)) => {
            format!("{mn} {}, {}({})", name(s.rs2), s.imm(), name(s.rs1))
        }
        (_, Instruction::B(b)) => {
            format!("{mn} {}, {}, {}", name(b.rs1), name(b.rs2), b.imm())
        }
        (_, Instruction::U(u)) => {
            format!("{mn} {}, {:#x}", name(u.rd), (u.imm as u32) >> 12)
        }
        (_, Instruction::J(j)) => format!("{mn} {}, {}", name(j.rd), j.imm()),
    }
}
