//! Random number generation module
//!
//! This module provides a deterministic linear-congruential generator
//! (LCG) whose output is reproducible bit-for-bit.
//!
//! The generator advances a 64-bit register with
//! `S ← S · 0x5851f42d4c957f2d + 1 (mod 2⁶⁴)` and returns bits 33..64 of
//! the new state. High bits are used because the low bits of an LCG have
//! short periods.
//!
//! This generator is **not** cryptographically secure. It exists to
//! produce the same sequence from the same seed everywhere.

/// Design goals:
/// - Exact reproducibility across platforms and backends
/// - Explicit, owned state (no implicit sharing between sequences)
/// - No heap allocation
/// - Minimal and explicit API surface
mod lcg;
mod register;
pub mod shared;

/// Deterministic generator handle.
pub use lcg::Generator;

/// Register backends and the constants of the recurrence.
pub use register::{INCREMENT, MULTIPLIER, MULTIPLIER_LIMBS, OUTPUT_SHIFT, Register};
