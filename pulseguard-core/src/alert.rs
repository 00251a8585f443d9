//! Alert decision
//!
//! The alarm sounds only when the wearer is both feverish and tachycardic.
//! The state is recomputed from scratch every cycle; there is no latching
//! or debouncing.

use crate::constants::{DEFAULT_HEART_RATE_THRESHOLD_BPM, DEFAULT_TEMPERATURE_THRESHOLD_C};
use crate::sample::BeatRate;

/// Levels both inputs must exceed for the alert to fire
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertThresholds {
    /// Temperature threshold (°C)
    pub temperature_c: f32,
    /// Heart-rate threshold (BPM)
    pub heart_rate_bpm: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature_c: DEFAULT_TEMPERATURE_THRESHOLD_C,
            heart_rate_bpm: DEFAULT_HEART_RATE_THRESHOLD_BPM,
        }
    }
}

impl AlertThresholds {
    /// Custom thresholds
    pub const fn new(temperature_c: f32, heart_rate_bpm: u32) -> Self {
        Self { temperature_c, heart_rate_bpm }
    }

    /// `true` when temperature and heart rate are both strictly above
    /// their thresholds
    pub fn evaluate(&self, temperature_c: f32, rate: BeatRate) -> bool {
        temperature_c > self.temperature_c && rate.bpm() > self.heart_rate_bpm
    }
}
