//! Settings that control how much a glyph is roughened.

use crate::error::ConfigError;

/// Parameters for the stochastic resampling pass.
///
/// Probabilities are thresholds: a uniform draw must *exceed* the value for
/// the segment to be rewritten, so `1.0` leaves all segments alone and `0.0`
/// rewrites (nearly) all of them.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomizationParameters {
    /// Threshold for inserting a wobbly midpoint between two consecutive
    /// line segments.
    pub truncate_line_probability: f32,
    /// Threshold for splitting a quadratic curve that follows an on-curve
    /// anchor. Curves that are not split are dropped unless
    /// [`keep_unsplit_curves`](Self::keep_unsplit_curves) is set.
    pub truncate_curve_probability: f32,
    /// Lower bound for the random split position.
    pub truncate_curve_position_min: f32,
    /// Upper bound for the random split position.
    pub truncate_curve_position_max: f32,
    /// Append the final command of the outline, which the resampling pass
    /// never visits.
    pub keep_final_command: bool,
    /// Emit curves that lose the split draw unchanged instead of dropping
    /// them.
    pub keep_unsplit_curves: bool,
}

impl Default for RandomizationParameters {
    fn default() -> Self {
        Self {
            truncate_line_probability: 0.5,
            truncate_curve_probability: 0.5,
            truncate_curve_position_min: 0.3,
            truncate_curve_position_max: 0.7,
            keep_final_command: false,
            keep_unsplit_curves: false,
        }
    }
}

impl RandomizationParameters {
    pub fn new(
        truncate_line_probability: f32,
        truncate_curve_probability: f32,
        truncate_curve_position_min: f32,
        truncate_curve_position_max: f32,
    ) -> Self {
        Self {
            truncate_line_probability,
            truncate_curve_probability,
            truncate_curve_position_min,
            truncate_curve_position_max,
            ..Default::default()
        }
    }

    pub fn with_line_probability(mut self, probability: f32) -> Self {
        self.truncate_line_probability = probability;
        self
    }

    pub fn with_curve_probability(mut self, probability: f32) -> Self {
        self.truncate_curve_probability = probability;
        self
    }

    pub fn with_curve_position_range(mut self, min: f32, max: f32) -> Self {
        self.truncate_curve_position_min = min;
        self.truncate_curve_position_max = max;
        self
    }

    pub fn with_keep_final_command(mut self, keep: bool) -> Self {
        self.keep_final_command = keep;
        self
    }

    pub fn with_keep_unsplit_curves(mut self, keep: bool) -> Self {
        self.keep_unsplit_curves = keep;
        self
    }

    /// Checks the probability and position bounds.
    ///
    /// NaN is rejected everywhere.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("truncate_line_probability", self.truncate_line_probability),
            ("truncate_curve_probability", self.truncate_curve_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("truncate_curve_position_min", self.truncate_curve_position_min),
            ("truncate_curve_position_max", self.truncate_curve_position_max),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::PositionOutOfRange { name, value });
            }
        }
        let (min, max) = (
            self.truncate_curve_position_min,
            self.truncate_curve_position_max,
        );
        if min > max {
            return Err(ConfigError::InvertedPositionRange { min, max });
        }
        Ok(())
    }
}
