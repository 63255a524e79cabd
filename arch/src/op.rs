use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::Error;

/// Pseudo-op emitting a raw word. Not an opcode.
pub const FILL: &str = ".fill";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    ADD = 0,
    NAND = 1,
    LW = 2,
    SW = 3,
    BEQ = 4,
    JALR = 5,
    HALT = 6,
    NOOP = 7,
}

/// Operand layout of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `regA regB destReg`
    RegTriple,
    /// `regA regB offset`
    RegPairOffset,
    /// `regA regB`
    RegPair,
    NoOperand,
}

impl Shape {
    pub fn arg_count(&self) -> usize {
        match self {
            Shape::RegTriple | Shape::RegPairOffset => 3,
            Shape::RegPair => 2,
            Shape::NoOperand => 0,
        }
    }
}

impl OpKind {
    /// Exact, case-sensitive mnemonic lookup.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse::<Self>()
            .map_err(|_| Error::UnknownMnemonic(s.to_string()))
    }

    pub fn opcode(&self) -> u8 {
        (*self).into()
    }

    pub fn shape(&self) -> Shape {
        use OpKind::*;
        match self {
            ADD | NAND => Shape::RegTriple,
            LW | SW | BEQ => Shape::RegPairOffset,
            JALR => Shape::RegPair,
            HALT | NOOP => Shape::NoOperand,
        }
    }
}

pub fn is_opcode(s: &str) -> bool {
    OpKind::parse(s).is_ok()
}

pub fn lookup(s: &str) -> Result<(u8, Shape), Error> {
    let op = OpKind::parse(s)?;
    Ok((op.opcode(), op.shape()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table() {
        assert_eq!(lookup("add"), Ok((0, Shape::RegTriple)));
        assert_eq!(lookup("nand"), Ok((1, Shape::RegTriple)));
        assert_eq!(lookup("lw"), Ok((2, Shape::RegPairOffset)));
        assert_eq!(lookup("sw"), Ok((3, Shape::RegPairOffset)));
        assert_eq!(lookup("beq"), Ok((4, Shape::RegPairOffset)));
        assert_eq!(lookup("jalr"), Ok((5, Shape::RegPair)));
        assert_eq!(lookup("halt"), Ok((6, Shape::NoOperand)));
        assert_eq!(lookup("noop"), Ok((7, Shape::NoOperand)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for op in OpKind::iter() {
            assert_eq!(OpKind::parse(&op.to_string()), Ok(op));
            assert_eq!(OpKind::try_from(op.opcode()).ok(), Some(op));
        }
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_opcode("halt"));
        assert!(!is_opcode("HALT"));
        assert!(!is_opcode("Add"));
        assert!(!is_opcode(FILL));
        assert!(!is_opcode("loop"));
        assert!(!is_opcode(""));
        assert_eq!(
            lookup(".fill"),
            Err(Error::UnknownMnemonic(".fill".to_string()))
        );
    }

    #[test]
    fn arg_count_per_shape() {
        let counts: Vec<_> = OpKind::iter().map(|op| op.shape().arg_count()).collect();
        assert_eq!(counts, vec![3, 3, 3, 3, 3, 2, 0, 0]);
    }

    #[test]
    fn opcode_out_of_range() {
        assert!(OpKind::try_from(8_u8).is_err());
    }
}
