//! Primitive types
//!
//! This module defines the low-level numeric building blocks used by the
//! generator.
//!
//! Primitives are simple, fixed-size, dependency-free types with
//! well-defined wrap-around semantics. They do not attempt to replicate a
//! full big-integer library.
//!
//! Current primitives include:
//! - `Word64`: a 64-bit unsigned integer made of four 16-bit limbs
//! - `int32`: coercion of arbitrary numbers into 32-bit signed integers

pub mod int32;
mod word64;

/// Fixed-width 64-bit limb integer and its error type.
pub use word64::{Word64, Word64Error};
