//! Color derivation from string keys.

use tracing::debug;

use crate::color::{Rgb, ToneParams, ToneParamsError};
use crate::hash::{StringHash, SuperFastHash};
use crate::rng::{Generator, Register};

impl<R: Register> Generator<R> {
    /// Draws one color of the given family from the current state.
    ///
    /// Three values are consumed: two bounded channels, then one float for
    /// the constrained third channel.
    pub fn tone(&mut self, params: &ToneParams) -> Rgb {
        // widened so unvalidated params cannot overflow
        let r = self.sample_upto(params.channel_max) as i64;
        let g = self.sample_upto(params.channel_max) as i64;
        let sum_min = params.sum_min as i64;

        let (min, max) = if r + g < sum_min {
            (sum_min - r - g, params.channel_max as i64)
        } else {
            (0, params.sum_max as i64 - r - g)
        };

        // r = g = 128 leaves max one below min for the badge family
        let max = max.max(min);
        let b = min + (self.sample() * (max - min) as f64).floor() as i64;

        let rgb = Rgb::from([r, g, b].map(|c| c.clamp(0, 255) as u8));

        if params.invert { rgb.inverted() } else { rgb }
    }

    /// Seeds from a string digest.
    ///
    /// A missing digest (empty key) leaves the register at zero, the same
    /// state `seed(1)` produces.
    fn seed_digest(&mut self, digest: Option<u32>) {
        self.seed(digest.map_or(1, |d| d as i32));
    }
}

pub(crate) fn derive_on<R: Register, H: StringHash>(
    generator: &mut Generator<R>,
    hasher: &H,
    params: &ToneParams,
    input: &str,
) -> Rgb {
    generator.seed_digest(hasher.hash32(input));
    let color = generator.tone(params);

    debug!(key = input, %color, "derived color");

    color
}

/// Derives a stable `#rrggbb` badge color from `input`.
///
/// The same input always yields the same color. A fresh generator is used,
/// so no other generator is affected.
pub fn derive_color(input: &str) -> String {
    let mut generator: Generator = Generator::default();

    derive_on(&mut generator, &SuperFastHash, &ToneParams::BADGE, input).to_hex()
}

/// Derives a color with a custom hash and color family.
///
/// # Errors
/// Returns the validation error when `params` is not usable.
pub fn derive_color_with<H: StringHash>(
    hasher: &H,
    params: &ToneParams,
    input: &str,
) -> Result<Rgb, ToneParamsError> {
    params.validate()?;

    let mut generator: Generator = Generator::default();
    Ok(derive_on(&mut generator, hasher, params, input))
}

/// Endless sequence of colors seeded once from a key.
///
/// Each call to `next` draws one more color, so the n-th series of a graph
/// keyed by the same string always gets the same color.
#[derive(Clone, Debug)]
pub struct ColorSequence {
    generator: Generator,
    params: ToneParams,
}

impl ColorSequence {
    /// Seeds a sequence from `key` using SuperFastHash.
    ///
    /// # Errors
    /// Returns the validation error when `params` is not usable.
    pub fn new(key: &str, params: ToneParams) -> Result<Self, ToneParamsError> {
        Self::with_hasher(&SuperFastHash, key, params)
    }

    /// Seeds a sequence from `key` using a custom hash.
    pub fn with_hasher<H: StringHash>(
        hasher: &H,
        key: &str,
        params: ToneParams,
    ) -> Result<Self, ToneParamsError> {
        params.validate()?;

        Ok(Self::seeded(hasher, key, params))
    }

    fn seeded<H: StringHash>(hasher: &H, key: &str, params: ToneParams) -> Self {
        let mut generator: Generator = Generator::default();
        generator.seed_digest(hasher.hash32(key));

        debug!(key = key, ?params, "color sequence seeded");

        Self { generator, params }
    }
}

impl Iterator for ColorSequence {
    type Item = Rgb;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.tone(&self.params))
    }
}

/// Returns the first `n` graph-line colors for `key`.
pub fn graph_colors(key: &str, n: usize) -> Vec<Rgb> {
    ColorSequence::seeded(&SuperFastHash, key, ToneParams::GRAPH)
        .take(n)
        .collect()
}
