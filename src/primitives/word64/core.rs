use std::fmt::{Display, Formatter, Result};

use thiserror::Error;

/// Fixed-width 64-bit unsigned integer made of four 16-bit limbs.
///
/// Limbs are stored least significant first. The semantic value is
/// `Σ limb[i] · 65536^i`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word64(pub(crate) [u16; 4]);

/// Errors raised by `Word64` operations whose input lies outside the
/// documented domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Word64Error {
    /// A logical shift must move fewer than 64 bits.
    #[error("shift amount {shift} is out of range for a 64-bit word")]
    ShiftOutOfRange { shift: u32 },
}

impl Word64 {
    /// Width of the value in bits.
    pub const BITS: u32 = 64;

    /// Width of a single limb in bits.
    pub const LIMB_BITS: u32 = 16;

    /// The value zero.
    pub const ZERO: Self = Self([0; 4]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (2⁶⁴ − 1).
    pub const MAX: Self = Self([0xffff; 4]);

    /// Builds a word from limbs ordered least significant first.
    pub const fn from_limbs(limbs: [u16; 4]) -> Self {
        Self(limbs)
    }

    /// Returns the limbs, least significant first.
    pub const fn limbs(&self) -> [u16; 4] {
        self.0
    }

    /// Returns the low 32 bits, assembled from the two lowest limbs.
    pub const fn low_u32(&self) -> u32 {
        ((self.0[1] as u32) << 16) | self.0[0] as u32
    }
}

impl Display for Word64 {
    /// Formats the value as colon-separated hexadecimal limbs, most
    /// significant limb first.
    ///
    /// Example:
    /// `5851:f42d:4c95:7f2d`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, limb) in self.0.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:04x}", limb)?;
        }

        Ok(())
    }
}
