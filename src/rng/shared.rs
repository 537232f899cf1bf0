//! Per-thread shared generator
//!
//! Some callers want a single implicit stream instead of carrying a
//! [`Generator`] around. This module keeps one native register per thread
//! and exposes free functions over it.
//!
//! Every function here reads and mutates the same register. Two unrelated
//! callers drawing from it between a `seed` and its dependent samples will
//! see each other's draws. `derive_color` is immune because it always
//! re-seeds before sampling.

use std::cell::Cell;

use crate::color::{self, ToneParams};
use crate::hash::SuperFastHash;
use crate::rng::Generator;

thread_local! {
    static SHARED: Cell<Generator> = Cell::new(Generator::default());
}

fn with_shared<T>(f: impl FnOnce(&mut Generator) -> T) -> T {
    SHARED.with(|cell| {
        let mut generator = cell.get();
        let out = f(&mut generator);
        cell.set(generator);

        out
    })
}

/// Re-seeds the shared register. See [`Generator::seed`].
pub fn seed(n: i32) {
    with_shared(|g| g.seed(n));
}

/// Steps the shared register. See [`Generator::next32`].
pub fn next32() -> i32 {
    with_shared(Generator::next32)
}

/// Float in `[0, 1)` from the shared register.
pub fn sample() -> f64 {
    with_shared(Generator::sample)
}

/// Integer in `[1, upper]` from the shared register.
pub fn sample_upto(upper: i32) -> i32 {
    with_shared(|g| g.sample_upto(upper))
}

/// Integer in `[lower, upper]` from the shared register.
pub fn sample_range(lower: i32, upper: i32) -> i32 {
    with_shared(|g| g.sample_range(lower, upper))
}

/// Derives a badge color, leaving the shared register in the state the
/// derivation ended in.
pub fn derive_color(input: &str) -> String {
    with_shared(|g| color::derive_on(g, &SuperFastHash, &ToneParams::BADGE, input)).to_hex()
}

/// Returns the current shared register value.
pub fn state() -> u64 {
    with_shared(|g| g.state())
}
