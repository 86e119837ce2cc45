//! Immediate assembly.
//!
//! RISC-V keeps register specifiers and the opcode at fixed positions in every
//! format, so immediates are split into fragments wherever space remains:
//!
//! ```text
//! S-Type: imm[11:5] | rs2 | rs1 | funct3 | imm[4:0]          | opcode
//! B-Type: imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11]    | opcode
//! J-Type: imm[20|10:1|11|19:12]                     | rd     | opcode
//! ```
//!
//! B and J immediates encode even byte offsets: bit 0 is never stored and is
//! always assembled as zero. The assemblers below mask every fragment to its
//! width, so they are total over all inputs.

use crate::isa::bits::INSTRUCTION_BITS;

/// Number of bits in an I-type and S-type immediate.
pub const I_IMM_BITS: u32 = 12;

/// Number of bits in an S-type immediate.
pub const S_IMM_BITS: u32 = 12;

/// Number of bits in a B-type immediate, including the implicit zero bit 0.
pub const B_IMM_BITS: u32 = 13;

/// Number of bits in the raw U-type immediate field, before the shift.
pub const U_IMM_BITS: u32 = 20;

/// Left shift applied to U-type immediates (they fill bits 31:12).
pub const U_IMM_SHIFT: u32 = 12;

/// Number of bits in a J-type immediate, including the implicit zero bit 0.
pub const J_IMM_BITS: u32 = 21;

/// Sign-extends the low `width` bits of `raw` to a 32-bit signed value.
///
/// Bit `width - 1` is the sign bit; every higher bit of the result is a copy of
/// it. Bits of `raw` at or above `width` are ignored. `width` must be in `1..=32`.
///
/// # Examples
///
/// ```
/// use rv32i_engine::isa::immediate::sign_extend;
///
/// assert_eq!(sign_extend(0x800, 12), -2048);
/// assert_eq!(sign_extend(0x7FF, 12), 2047);
/// ```
#[inline(always)]
pub const fn sign_extend(raw: u32, width: u32) -> i32 {
    debug_assert!(width >= 1 && width <= INSTRUCTION_BITS);
    let shift = INSTRUCTION_BITS - width;
    ((raw << shift) as i32) >> shift
}

/// Assembles an S-type immediate from its two fragments.
///
/// `imm[4:0]` comes from bits 7-11 of the word and `imm[11:5]` from bits 25-31.
pub const fn assemble_s_immediate(imm_11_5: u32, imm_4_0: u32) -> i32 {
    let combined = ((imm_11_5 & 0x7F) << 5) | (imm_4_0 & 0x1F);
    sign_extend(combined, S_IMM_BITS)
}

/// Assembles a B-type immediate from its four fragments.
///
/// The logical immediate is 13 bits wide: `imm[12|11|10:5|4:1|0]` with `imm[0] = 0`.
pub const fn assemble_b_immediate(imm_12: u32, imm_11: u32, imm_10_5: u32, imm_4_1: u32) -> i32 {
    let combined = ((imm_12 & 0x1) << 12)
        | ((imm_11 & 0x1) << 11)
        | ((imm_10_5 & 0x3F) << 5)
        | ((imm_4_1 & 0xF) << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Assembles a J-type immediate from its four fragments.
///
/// The logical immediate is 21 bits wide: `imm[20|19:12|11|10:1|0]` with `imm[0] = 0`.
pub const fn assemble_j_immediate(imm_20: u32, imm_19_12: u32, imm_11: u32, imm_10_1: u32) -> i32 {
    let combined = ((imm_20 & 0x1) << 20)
        | ((imm_19_12 & 0xFF) << 12)
        | ((imm_11 & 0x1) << 11)
        | ((imm_10_1 & 0x3FF) << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Builds the U-type immediate value from the raw 20-bit field.
///
/// The field is sign-extended from 20 bits and then shifted into bits 31:12,
/// leaving the low 12 bits zero.
pub const fn assemble_u_immediate(imm_31_12: u32) -> i32 {
    sign_extend(imm_31_12, U_IMM_BITS).wrapping_shl(U_IMM_SHIFT)
}
