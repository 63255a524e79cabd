//! Fixed-width two's-complement fields.
//!
//! The integer forms ([`truncate`], [`sign_extend`], [`field`]) are what the
//! encoder and decoder use. The string forms ([`encode`], [`decode`]) carry
//! the same semantics and are used for listings.

use std::ops::RangeInclusive;

use crate::error::Error;

/// Field widths accepted here. The integer and `encode` forms panic outside
/// this range; `decode` reports it as [`Error::BadBits`].
pub const WIDTHS: RangeInclusive<u32> = 1..=32;

fn mask(width: u32) -> u32 {
    assert!(WIDTHS.contains(&width), "width out of range: {width}");
    u32::MAX >> (32 - width)
}

/// Low `width` bits of `value` in two's complement.
pub fn truncate(value: i32, width: u32) -> u32 {
    (value as u32) & mask(width)
}

/// Interpret the low `width` bits of `bits` as a signed value.
pub fn sign_extend(bits: u32, width: u32) -> i32 {
    let bits = bits & mask(width);
    let shift = 32 - width;
    ((bits << shift) as i32) >> shift
}

/// Extract `width` bits starting at bit `lo`.
pub fn field(word: i32, lo: u32, width: u32) -> u32 {
    ((word as u32) >> lo) & mask(width)
}

/// Smallest and largest value representable in `width` signed bits.
pub fn range(width: u32) -> (i64, i64) {
    assert!(WIDTHS.contains(&width), "width out of range: {width}");
    let half = 1_i64 << (width - 1);
    (-half, half - 1)
}

pub fn encode(value: i32, width: u32) -> String {
    format!("{:0>w$b}", truncate(value, width), w = width as usize)
}

pub fn decode(bits: &str, width: u32) -> Result<i32, Error> {
    let bad = || Error::BadBits(bits.to_string(), width);
    if !WIDTHS.contains(&width)
        || bits.len() != width as usize
        || !bits.chars().all(|c| c == '0' || c == '1')
    {
        return Err(bad());
    }
    let raw = u32::from_str_radix(bits, 2).map_err(|_| bad())?;
    Ok(sign_extend(raw, width))
}
