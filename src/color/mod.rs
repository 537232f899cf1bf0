//! Deterministic colors
//!
//! This module turns generator output into display colors.
//!
//! A color family is described by [`ToneParams`]: two channels are drawn
//! from `[1, channel_max]` and the third is constrained so the channel sum
//! stays inside a band. Keeping the sum banded avoids colors that are too
//! dark or too saturated to read.
//!
//! Two families are predefined:
//! - [`ToneParams::BADGE`]: light, inverted colors for labels and badges,
//!   produced by [`derive_color`]
//! - [`ToneParams::GRAPH`]: saturated colors for graph lines, produced by
//!   [`ColorSequence`] and [`graph_colors`]
//!
//! Every derivation seeds from a hash of its key first, so the same key
//! always yields the same color regardless of what ran before.

mod derive;
mod rgb;
mod tone;

pub use derive::{ColorSequence, derive_color, derive_color_with, graph_colors};
pub use rgb::{ColorError, Rgb};
pub use tone::{ToneParams, ToneParamsError};

pub(crate) use derive::derive_on;
