//! Deterministic pseudo-random numbers and string-derived colors
//!
//! This crate provides a small linear-congruential generator whose output
//! is reproducible bit-for-bit across implementations, together with the
//! helpers that turn its output into stable display colors.
//!
//! The focus is on **exact reproducibility**, not on statistical quality
//! or unpredictability. Nothing in this crate is suitable for keys,
//! nonces, or any other security-sensitive use.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width integer building blocks. `Word64` is a 64-bit unsigned
//!   integer stored as four 16-bit limbs with truncating multiply, add and
//!   shift. The `int32` helpers coerce arbitrary numbers into 32-bit
//!   signed integers using wrap-around semantics.
//!
//! - `rng`
//!   The generator itself. `Generator` is an explicit, owned handle that
//!   can be seeded, stepped and sampled. The `shared` submodule keeps one
//!   register per thread for callers that want a single implicit stream.
//!
//! - `hash`
//!   String hashing used to turn arbitrary keys into seeds. The default
//!   collaborator is SuperFastHash; any type implementing `StringHash`
//!   can be substituted.
//!
//! - `color`
//!   RGB values, hex parsing and formatting, and the derivation of colors
//!   from a seeded generator (`derive_color`, graph color sequences).
//!
//! # Design goals
//!
//! - Identical output for identical input, on every platform
//! - No heap allocations in the numeric core
//! - Coerce numeric input instead of rejecting it
//! - Explicit state: no hidden sharing between independent sequences

pub mod color;
pub mod hash;
pub mod primitives;
pub mod rng;

pub use color::{Rgb, derive_color};
pub use rng::Generator;
