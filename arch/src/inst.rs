use crate::{
    bits,
    error::Error,
    op::{OpKind, Shape},
    reg::Reg,
    word::{self, Word},
};

use color_print::cformat;

/// Decoded instruction. Register operands are in source order:
/// `regA regB destReg` for the triple shape, `regA regB` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    ADD(Reg, Reg, Reg),
    NAND(Reg, Reg, Reg),
    LW(Reg, Reg, i16),
    SW(Reg, Reg, i16),
    BEQ(Reg, Reg, i16),
    JALR(Reg, Reg),
    HALT(),
    NOOP(),
}

// ----------------------------------------------------------------------------
// Layout: opcode[24:22] regA[21:19] regB[18:16] low[15:0]

fn enc_format(opcode: u8, ra: Reg, rb: Reg, low: u32) -> Word {
    (((opcode as u32) << 22)
        | ((ra.idx() as u32) << 19)
        | ((rb.idx() as u32) << 16)
        | (low & 0xFFFF)) as Word
}

fn dec_format(bin: Word) -> (i32, Reg, Reg, u32) {
    let opcode = word::opcode(bin);
    let ra = Reg::from_bits(bits::field(bin, 19, 3));
    let rb = Reg::from_bits(bits::field(bin, 16, 3));
    let low = bits::field(bin, 0, 16);
    (opcode, ra, rb, low)
}

impl Inst {
    pub fn kind(&self) -> OpKind {
        match self {
            Inst::ADD(..) => OpKind::ADD,
            Inst::NAND(..) => OpKind::NAND,
            Inst::LW(..) => OpKind::LW,
            Inst::SW(..) => OpKind::SW,
            Inst::BEQ(..) => OpKind::BEQ,
            Inst::JALR(..) => OpKind::JALR,
            Inst::HALT() => OpKind::HALT,
            Inst::NOOP() => OpKind::NOOP,
        }
    }

    pub fn to_bin(&self) -> Word {
        let zero = Reg::from_bits(0);
        let op = self.kind().opcode();
        match *self {
            Inst::ADD(ra, rb, rd) | Inst::NAND(ra, rb, rd) => enc_format(op, ra, rb, rd.idx() as u32),
            Inst::LW(ra, rb, off) | Inst::SW(ra, rb, off) | Inst::BEQ(ra, rb, off) => {
                enc_format(op, ra, rb, bits::truncate(off as i32, 16))
            }
            Inst::JALR(ra, rb) => enc_format(op, ra, rb, 0),
            Inst::HALT() | Inst::NOOP() => enc_format(op, zero, zero, 0),
        }
    }

    /// Decode a word. Unused fields are ignored, so any word whose opcode is
    /// in `0..=7` decodes.
    pub fn from_bin(bin: Word) -> Result<Inst, Error> {
        let (opcode, ra, rb, low) = dec_format(bin);
        let kind = u8::try_from(opcode)
            .ok()
            .and_then(|op| OpKind::try_from(op).ok())
            .ok_or(Error::UnknownOpcode(bin))?;
        let off = bits::sign_extend(low, 16) as i16;
        let rd = Reg::from_bits(low);
        Ok(match kind {
            OpKind::ADD => Inst::ADD(ra, rb, rd),
            OpKind::NAND => Inst::NAND(ra, rb, rd),
            OpKind::LW => Inst::LW(ra, rb, off),
            OpKind::SW => Inst::SW(ra, rb, off),
            OpKind::BEQ => Inst::BEQ(ra, rb, off),
            OpKind::JALR => Inst::JALR(ra, rb),
            OpKind::HALT => Inst::HALT(),
            OpKind::NOOP => Inst::NOOP(),
        })
    }

    /// Bit fields of the encoded word, grouped by shape.
    pub fn fields(&self) -> String {
        let bin = self.to_bin();
        let (opcode, ra, rb, low) = dec_format(bin);
        let head = format!(
            "{} {} {}",
            bits::encode(opcode, 3),
            bits::encode(ra.idx() as i32, 3),
            bits::encode(rb.idx() as i32, 3)
        );
        match self.kind().shape() {
            Shape::RegTriple => format!(
                "{} {} {}",
                head,
                bits::encode((low >> 3) as i32, 13),
                bits::encode((low & 0b111) as i32, 3)
            ),
            _ => format!("{} {}", head, bits::encode(low as i32, 16)),
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! rrr {
            ($name:expr, $ra:expr, $rb:expr, $rd:expr) => {
                cformat!("<r>{:<6}</><b>{:<2} {:<2} {:<6}</>", $name, $ra, $rb, $rd)
            };
        }

        macro_rules! rri {
            ($name:expr, $ra:expr, $rb:expr, $imm:expr) => {
                cformat!(
                    "<r>{:<6}</><b>{:<2} {:<2} <y>{:<6}</></>",
                    $name,
                    $ra,
                    $rb,
                    $imm
                )
            };
        }

        let name = self.kind().to_string();
        match self {
            Inst::ADD(ra, rb, rd) | Inst::NAND(ra, rb, rd) => rrr!(name, ra, rb, rd),
            Inst::LW(ra, rb, off) | Inst::SW(ra, rb, off) | Inst::BEQ(ra, rb, off) => {
                rri!(name, ra, rb, off)
            }
            Inst::JALR(ra, rb) => rrr!(name, ra, rb, ""),
            Inst::HALT() | Inst::NOOP() => rrr!(name, "", "", ""),
        }
    }
}
