//! Arithmetic operations for `Word64`
//!
//! This module implements the three operations the generator needs:
//! - truncating multiplication (schoolbook, 16-bit limbs)
//! - addition of a small non-negative integer
//! - logical right shift
//!
//! All operations are implemented explicitly on the limb array, never
//! mutate their operands, and truncate their result modulo 2⁶⁴.

use std::ops::{Add, Mul, Shr};

use crate::primitives::word64::{Word64, Word64Error};

impl Word64 {
    /// Adds a small non-negative integer, propagating the carry across all
    /// four limbs and discarding any carry out of the top limb.
    pub fn add_small(self, n: u32) -> Word64 {
        let mut out = [0u16; 4];
        let mut carry = n as u64;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            let sum = limb as u64 + carry;
            *o = sum as u16;
            carry = sum >> Self::LIMB_BITS;
        }

        Word64(out)
    }

    /// Logical right shift by `n` bits.
    ///
    /// Bits shifted out of the low end are discarded and zeros are shifted
    /// in from the top.
    ///
    /// # Errors
    /// Returns [`Word64Error::ShiftOutOfRange`] when `n >= 64`.
    pub fn shift_right(self, n: u32) -> Result<Word64, Word64Error> {
        if n >= Self::BITS {
            return Err(Word64Error::ShiftOutOfRange { shift: n });
        }

        Ok(self.shr_in_range(n))
    }

    /// Shift with `n` already known to be below 64.
    ///
    /// Whole limbs are moved first, then the remaining `n % 16` bits are
    /// carried down from each limb into the one below it.
    pub(crate) fn shr_in_range(self, n: u32) -> Word64 {
        let limb_shift = (n / Self::LIMB_BITS) as usize;
        let bit_shift = n % Self::LIMB_BITS;

        let mut tmp = [0u16; 4];
        tmp[..(4 - limb_shift)].copy_from_slice(&self.0[limb_shift..]);

        if bit_shift == 0 {
            return Word64(tmp);
        }

        let mut out = [0u16; 4];
        let mut carry = 0u16;

        for i in (0..4).rev() {
            let limb = tmp[i];

            out[i] = (limb >> bit_shift) | carry;
            carry = limb << (Self::LIMB_BITS - bit_shift);
        }

        Word64(out)
    }
}

/// Truncating 64 × 64 → 64 bit multiplication.
///
/// The full 8-limb product is accumulated with 16-bit carries and only the
/// low four limbs are kept.
impl Mul<Word64> for Word64 {
    type Output = Word64;

    fn mul(self, rhs: Word64) -> Self::Output {
        let mut acc = [0u16; 8];

        for (j, &b) in rhs.0.iter().enumerate() {
            let mut carry = 0u32;

            for (i, &a) in self.0.iter().enumerate() {
                // 0xffff * 0xffff + 0xffff + 0xffff still fits in 32 bits
                let t = a as u32 * b as u32 + acc[i + j] as u32 + carry;
                acc[i + j] = t as u16;
                carry = t >> Word64::LIMB_BITS;
            }

            acc[j + 4] = carry as u16;
        }

        let mut out = [0u16; 4];
        out.copy_from_slice(&acc[..4]);

        Word64(out)
    }
}

/// Wrapping addition of a small integer.
impl Add<u32> for Word64 {
    type Output = Word64;

    fn add(self, rhs: u32) -> Self::Output {
        self.add_small(rhs)
    }
}

/// Logical right shift (`>>`).
///
/// Shifts greater than or equal to 64 bits yield zero. Use
/// [`Word64::shift_right`] to have them rejected instead.
impl Shr<u32> for Word64 {
    type Output = Word64;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs).unwrap_or(Word64::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_by_zero_is_identity() {
        let w = Word64([0x1234, 0x5678, 0x9abc, 0xdef0]);
        assert_eq!(w.shr_in_range(0), w);
    }

    #[test]
    fn shift_carries_bits_across_limbs() {
        let w = Word64([0x1234, 0x5678, 0x9abc, 0xdef0]);
        assert_eq!(w.shr_in_range(4), Word64([0x8123, 0xc567, 0x09ab, 0x0def]));
        assert_eq!(w.shr_in_range(33), Word64([0x4d5e, 0x6f78, 0, 0]));
        assert_eq!(w.shr_in_range(63), Word64([1, 0, 0, 0]));
    }

    #[test]
    fn multiply_keeps_low_limbs_only() {
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1 ≡ 1 (mod 2^64)
        assert_eq!(Word64::MAX * Word64::MAX, Word64::ONE);
    }

    #[test]
    fn add_wraps_past_max() {
        assert_eq!(Word64::MAX.add_small(1), Word64::ZERO);
        assert_eq!(Word64::MAX.add_small(3), Word64([2, 0, 0, 0]));
    }
}
