//! Bit-field extraction.
//!
//! Every decoder in [`crate::isa::decode`] reads instruction fields through
//! [`extract_bits`]. The [`Field`] constants name the fixed bit ranges shared by
//! the R/I/S/B/U/J formats, and [`InstructionBits`] exposes them on raw words.

/// Total width of a RISC-V instruction in bits.
pub const INSTRUCTION_BITS: u32 = 32;

/// Extracts the inclusive bit range `[low, high]` of `word`, right-justified.
///
/// Bit 0 is the least significant bit. The result is `high - low + 1` bits wide
/// and carries no sign interpretation.
///
/// The caller must guarantee `low <= high <= 31`; other arguments are a contract
/// violation and are only checked in debug builds.
///
/// # Examples
///
/// ```
/// use rv32i_engine::isa::bits::extract_bits;
///
/// assert_eq!(extract_bits(0b1011_0000, 4, 7), 0b1011);
/// assert_eq!(extract_bits(0xFFFF_FFFF, 0, 31), 0xFFFF_FFFF);
/// ```
#[inline(always)]
pub const fn extract_bits(word: u32, low: u32, high: u32) -> u32 {
    debug_assert!(low <= high && high < INSTRUCTION_BITS);
    let width = high - low + 1;
    let mask = if width == INSTRUCTION_BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    };
    (word >> low) & mask
}

/// An inclusive bit range inside a 32-bit instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Lowest bit of the field.
    pub low: u32,
    /// Highest bit of the field (inclusive).
    pub high: u32,
}

impl Field {
    /// Creates a field covering bits `low..=high`.
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Number of bits covered by the field.
    pub const fn width(self) -> u32 {
        self.high - self.low + 1
    }

    /// Extracts this field from `word`.
    #[inline(always)]
    pub const fn extract(self, word: u32) -> u32 {
        extract_bits(word, self.low, self.high)
    }
}

/// Major opcode (bits 0-6), present in every format.
pub const OPCODE: Field = Field::new(0, 6);
/// Destination register (bits 7-11) in formats R/I/U/J.
pub const RD: Field = Field::new(7, 11);
/// Minor opcode (bits 12-14) in formats R/I/S/B.
pub const FUNCT3: Field = Field::new(12, 14);
/// First source register (bits 15-19) in formats R/I/S/B.
pub const RS1: Field = Field::new(15, 19);
/// Second source register (bits 20-24) in formats R/S/B.
pub const RS2: Field = Field::new(20, 24);
/// Secondary function field (bits 25-31) in format R.
pub const FUNCT7: Field = Field::new(25, 31);

/// I-type `imm[11:0]` (bits 20-31).
pub const I_IMM: Field = Field::new(20, 31);

/// S-type `imm[4:0]` (bits 7-11).
pub const S_IMM_4_0: Field = Field::new(7, 11);
/// S-type `imm[11:5]` (bits 25-31).
pub const S_IMM_11_5: Field = Field::new(25, 31);

/// B-type `imm[11]` (bit 7).
pub const B_IMM_11: Field = Field::new(7, 7);
/// B-type `imm[4:1]` (bits 8-11).
pub const B_IMM_4_1: Field = Field::new(8, 11);
/// B-type `imm[10:5]` (bits 25-30).
pub const B_IMM_10_5: Field = Field::new(25, 30);
/// B-type `imm[12]` (bit 31).
pub const B_IMM_12: Field = Field::new(31, 31);

/// U-type `imm[31:12]` (bits 12-31).
pub const U_IMM: Field = Field::new(12, 31);

/// J-type `imm[19:12]` (bits 12-19).
pub const J_IMM_19_12: Field = Field::new(12, 19);
/// J-type `imm[11]` (bit 20).
pub const J_IMM_11: Field = Field::new(20, 20);
/// J-type `imm[10:1]` (bits 21-30).
pub const J_IMM_10_1: Field = Field::new(21, 30);
/// J-type `imm[20]` (bit 31).
pub const J_IMM_20: Field = Field::new(31, 31);

/// Trait for extracting the fixed-position fields of an encoded instruction.
///
/// Fields that only exist in some formats (e.g. `rd` for S/B) still extract
/// the corresponding bits; interpreting them is the decoder's job.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        OPCODE.extract(*self)
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        RD.extract(*self) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        RS1.extract(*self) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        RS2.extract(*self) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        FUNCT3.extract(*self)
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        FUNCT7.extract(*self)
    }
}
