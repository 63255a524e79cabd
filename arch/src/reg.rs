use serde::{Deserialize, Serialize};
use std::fmt;

/// Register index. All eight registers are general purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Reg(u8);

impl Reg {
    pub const COUNT: usize = 8;

    pub fn new(idx: u8) -> Option<Self> {
        ((idx as usize) < Self::COUNT).then_some(Reg(idx))
    }

    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<u8>().ok().and_then(Reg::new)
    }

    /// Low three bits of a decoded field.
    pub(crate) fn from_bits(bits: u32) -> Self {
        Reg((bits & 0b111) as u8)
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Reg> {
        (0..Self::COUNT as u8).map(Reg)
    }
}

impl TryFrom<u8> for Reg {
    type Error = String;
    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Reg::new(idx).ok_or_else(|| format!("Unknown register: {idx}"))
    }
}

impl From<Reg> for u8 {
    fn from(reg: Reg) -> u8 {
        reg.0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[test]
fn test() {
    assert_eq!(Reg::parse("0"), Reg::new(0));
    assert_eq!(Reg::parse("7").map(Reg::idx), Some(7));
    assert_eq!(Reg::parse("8"), None);
    assert_eq!(Reg::parse("-1"), None);
    assert_eq!(Reg::parse("r1"), None);
    assert_eq!(Reg::all().count(), Reg::COUNT);
    assert_eq!(format!("{:<2}", Reg::new(3).unwrap()), "3 ");
}
