//! Conversions between `Word64` and native integer representations
//!
//! All conversions are lossless: a `Word64` holds exactly 64 bits, so it
//! maps one-to-one onto `u64` and onto a four-limb array.

use crate::primitives::Word64;

/// Converts a `u64` into four little-endian 16-bit limbs.
impl From<u64> for Word64 {
    fn from(value: u64) -> Self {
        let mut out = [0u16; 4];

        for (i, limb) in out.iter_mut().enumerate() {
            *limb = (value >> (16 * i)) as u16;
        }

        Word64(out)
    }
}

/// Reassembles the 64-bit value from its limbs.
impl From<Word64> for u64 {
    fn from(value: Word64) -> Self {
        value
            .0
            .iter()
            .rev()
            .fold(0u64, |acc, &limb| (acc << 16) | limb as u64)
    }
}

/// Places a `u32` in the two low limbs, zeroing the high limbs.
impl From<u32> for Word64 {
    fn from(value: u32) -> Self {
        Word64([value as u16, (value >> 16) as u16, 0, 0])
    }
}

/// Limbs are taken least significant first.
impl From<[u16; 4]> for Word64 {
    fn from(value: [u16; 4]) -> Self {
        Word64(value)
    }
}

impl From<Word64> for [u16; 4] {
    fn from(value: Word64) -> Self {
        value.0
    }
}
