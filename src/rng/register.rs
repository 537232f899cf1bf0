//! Generator register backends
//!
//! The recurrence only needs three things from its state: seeding from a
//! 32-bit integer, one LCG step, and extraction of the output bits. Those
//! are captured by the [`Register`] trait.
//!
//! Two backends are provided:
//! - `u64`, using native wrapping arithmetic (the default)
//! - [`Word64`], using explicit 16-bit limb arithmetic
//!
//! Both backends must produce identical outputs for identical seeds. The
//! limb backend is the reference; the native backend is the fast path.

use std::fmt::Debug;

use crate::primitives::Word64;

/// LCG multiplier.
pub const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

/// LCG multiplier as little-endian 16-bit limbs.
pub const MULTIPLIER_LIMBS: Word64 = Word64::from_limbs([0x7f2d, 0x4c95, 0xf42d, 0x5851]);

/// LCG increment.
///
/// This is the literal `1`, not the MMIX increment.
pub const INCREMENT: u32 = 1;

/// Number of low state bits discarded when producing an output.
pub const OUTPUT_SHIFT: u32 = 33;

/// A 64-bit generator register.
pub trait Register: Copy + Debug + Default + PartialEq {
    /// Builds the register for seed `n`: `(n − 1) mod 2³²` in the low 32
    /// bits, high 32 bits zero.
    fn from_seed(n: i32) -> Self;

    /// Performs one step `S · MULTIPLIER + INCREMENT (mod 2⁶⁴)`.
    fn advance(self) -> Self;

    /// Extracts the 32-bit output from the high bits of the state.
    ///
    /// The result always lies in `0..2³¹`.
    fn output(self) -> i32;

    /// Returns the raw 64-bit state.
    fn to_u64(self) -> u64;
}

impl Register for u64 {
    fn from_seed(n: i32) -> Self {
        n.wrapping_sub(1) as u32 as u64
    }

    #[inline]
    fn advance(self) -> Self {
        self.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT as u64)
    }

    #[inline]
    fn output(self) -> i32 {
        (self >> OUTPUT_SHIFT) as u32 as i32
    }

    fn to_u64(self) -> u64 {
        self
    }
}

impl Register for Word64 {
    fn from_seed(n: i32) -> Self {
        Word64::from(n.wrapping_sub(1) as u32)
    }

    fn advance(self) -> Self {
        (self * MULTIPLIER_LIMBS).add_small(INCREMENT)
    }

    fn output(self) -> i32 {
        self.shr_in_range(OUTPUT_SHIFT).low_u32() as i32
    }

    fn to_u64(self) -> u64 {
        self.into()
    }
}
