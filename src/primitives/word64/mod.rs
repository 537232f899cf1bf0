//! 64-bit limb integer primitive
//!
//! This module defines `Word64`, a fixed-width 64-bit unsigned integer
//! stored as four 16-bit limbs in **little-endian** limb order (least
//! significant limb first).
//!
//! `Word64` is the bit-exact reference for the generator arithmetic. Every
//! operation truncates its result modulo 2⁶⁴; overflow is the defined
//! behavior, not an accident. The native `u64` register used by default
//! must agree with this type on every input.

mod conv;
mod core;
mod ops;

pub use self::core::{Word64, Word64Error};
