//! Color family parameters.
//!
//! A tone describes how three channels are drawn from the generator and
//! validates that the description is usable.

use thiserror::Error;

/// Parameters of a derived color family.
///
/// Two channels are drawn from `[1, channel_max]`. If their sum is below
/// `sum_min`, the third channel is drawn from `[sum_min − r − g, channel_max)`;
/// otherwise from `[0, sum_max − r − g)`. With `invert`, every channel is
/// replaced by `255 − c` before the color is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneParams {
    /// Upper bound (inclusive) of the first two channels.
    pub channel_max: i32,
    /// Minimum channel sum targeted by the third channel.
    pub sum_min: i32,
    /// Exclusive ceiling on the channel sum once `sum_min` is reached.
    pub sum_max: i32,
    /// Whether channels are inverted before being returned.
    pub invert: bool,
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToneParamsError {
    /// `channel_max` must lie in `1..=255`.
    #[error("channel_max {0} must lie in 1..=255")]
    ChannelMaxOutOfRange(i32),
    /// `sum_min` must not exceed `sum_max`.
    #[error("sum_min {sum_min} exceeds sum_max {sum_max}")]
    InvertedSumBand { sum_min: i32, sum_max: i32 },
    /// `sum_min` must be reachable by the two drawn channels.
    #[error("sum_min {0} is unreachable with the configured channel_max")]
    SumMinUnreachable(i32),
    /// `sum_max` must not exceed three full channels.
    #[error("sum_max {0} exceeds 765")]
    SumMaxTooLarge(i32),
}

impl ToneParams {
    /// Light, inverted colors for labels and badges.
    pub const BADGE: Self = Self {
        channel_max: 128,
        sum_min: 128,
        sum_max: 255,
        invert: true,
    };

    /// Saturated colors for graph lines.
    pub const GRAPH: Self = Self {
        channel_max: 255,
        sum_min: 255,
        sum_max: 511,
        invert: false,
    };

    pub fn validate(&self) -> Result<(), ToneParamsError> {
        if !(1..=255).contains(&self.channel_max) {
            return Err(ToneParamsError::ChannelMaxOutOfRange(self.channel_max));
        }

        if self.sum_min > self.sum_max {
            return Err(ToneParamsError::InvertedSumBand {
                sum_min: self.sum_min,
                sum_max: self.sum_max,
            });
        }

        if self.sum_min < 0 || self.sum_min > 2 * self.channel_max {
            return Err(ToneParamsError::SumMinUnreachable(self.sum_min));
        }

        if self.sum_max > 3 * 255 {
            return Err(ToneParamsError::SumMaxTooLarge(self.sum_max));
        }

        Ok(())
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::BADGE
    }
}
