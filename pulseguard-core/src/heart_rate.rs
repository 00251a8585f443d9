//! Heart-Rate Estimation from a Pulse Waveform
//!
//! ## Overview
//!
//! The pulse sensor produces a noisy waveform whose absolute level drifts
//! with skin contact, ambient light and finger pressure. Rather than a fixed
//! trigger level, the estimator derives one from the window itself: each
//! window is compared against its own mean.
//!
//! ## Algorithm: adaptive mean-crossing peak counter
//!
//! ```text
//!  value
//!    │      ╭─╮          ╭─╮
//!    │ ─ ─ ─│─│─ ─ ─ ─ ─ │─│─ ─  trigger = mean × 1.02   (count a beat)
//!    │ ─────│─│───────── │─│───  re-arm  = mean          (ready again)
//!    │ ╭─╮  │ │  ╭──╮    │ │
//!    │─╯ ╰──╯ ╰──╯  ╰────╯ ╰──
//!    └──────────────────────────── time
//! ```
//!
//! 1. Mean of the whole window
//! 2. Walk the samples in acquisition order. A sample above the trigger
//!    level while armed counts one beat and disarms the detector. A sample
//!    strictly below the mean re-arms it. Anything in between leaves the
//!    detector as it is.
//! 3. `bpm = beats / (count × delay) × 60`, truncated toward zero
//!
//! The gap between trigger and re-arm levels is the hysteresis that stops a
//! single noisy peak from being counted twice.
//!
//! ## Arithmetic
//!
//! Mean and trigger level are computed in `f64` so the comparison matches a
//! double-precision reference exactly for every `u16` window. The rate is
//! computed in integer nanoseconds: `75` beats over `150 × 10 ms` yields
//! exactly `3000`, where a float division could land on `2999.9998` and
//! truncate to `2999`.
//!
//! ## Usage
//!
//! ```rust
//! use core::time::Duration;
//! use pulseguard_core::HeartRateEstimator;
//!
//! let window: Vec<u16> = (0..150).map(|i| if i % 2 == 0 { 0 } else { 100 }).collect();
//! let estimator = HeartRateEstimator::new(150);
//!
//! let rate = estimator.estimate(&window, Duration::from_millis(10))?;
//! assert_eq!(rate.bpm(), 3000);
//! # Ok::<(), pulseguard_core::MonitorError>(())
//! ```

use core::time::Duration;

use crate::constants::time::NANOS_PER_MINUTE;
use crate::constants::{DEFAULT_SAMPLE_COUNT, TRIGGER_MARGIN};
use crate::errors::{MonitorError, MonitorResult};
use crate::sample::{BeatRate, Sample};

/// Estimates heart rate from fixed-length sample windows.
///
/// Stateless: every call depends only on its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateEstimator {
    window_len: usize,
}

impl Default for HeartRateEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

impl HeartRateEstimator {
    /// Estimator accepting windows of exactly `window_len` samples
    pub const fn new(window_len: usize) -> Self {
        Self { window_len }
    }

    /// Window length this estimator accepts
    pub const fn window_len(&self) -> usize {
        self.window_len
    }

    /// Estimate BPM for one window sampled every `delay`.
    ///
    /// # Errors
    ///
    /// - `InvalidWindow` if the window is empty or its length differs from
    ///   [`window_len`](Self::window_len)
    /// - `InvalidDelay` if `delay` is zero
    pub fn estimate(&self, window: &[Sample], delay: Duration) -> MonitorResult<BeatRate> {
        if window.is_empty() || window.len() != self.window_len {
            return Err(MonitorError::InvalidWindow {
                expected: self.window_len,
                actual: window.len(),
            });
        }

        let beats = count_beats(window);
        let rate = beats_per_minute(beats, window.len(), delay)?;

        log_debug!("{} beats in {} samples -> {} bpm", beats, window.len(), rate.bpm());
        Ok(rate)
    }
}

/// Arithmetic mean of a window, `None` when empty
pub fn window_mean(samples: &[Sample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    Some(sum as f64 / samples.len() as f64)
}

/// Count rising edges through `mean × TRIGGER_MARGIN`, re-arming below the mean.
///
/// An empty window has no beats.
pub fn count_beats(samples: &[Sample]) -> u32 {
    let Some(mean) = window_mean(samples) else {
        return 0;
    };

    let mut detector = EdgeDetector::new(mean);
    samples.iter().filter(|&&s| detector.step(s)).count() as u32
}

/// Convert a beat count over `count` samples spaced `delay` apart into BPM.
///
/// Truncates toward zero and saturates at `u32::MAX`.
///
/// # Errors
///
/// - `InvalidWindow` if `count` is zero
/// - `InvalidDelay` if `delay` is zero
pub fn beats_per_minute(beats: u32, count: usize, delay: Duration) -> MonitorResult<BeatRate> {
    if count == 0 {
        return Err(MonitorError::InvalidWindow { expected: 1, actual: 0 });
    }
    if delay.is_zero() {
        return Err(MonitorError::InvalidDelay);
    }

    let elapsed_ns = count as u128 * delay.as_nanos();
    let bpm = u128::from(beats) * u128::from(NANOS_PER_MINUTE) / elapsed_ns;

    Ok(BeatRate::from_bpm(u32::try_from(bpm).unwrap_or(u32::MAX)))
}

/// Two-level edge detector for one window
struct EdgeDetector {
    trigger: f64,
    rearm: f64,
    above: bool,
}

impl EdgeDetector {
    fn new(mean: f64) -> Self {
        Self {
            trigger: mean * TRIGGER_MARGIN,
            rearm: mean,
            above: false,
        }
    }

    /// Feed one sample; `true` when it starts a new beat
    fn step(&mut self, sample: Sample) -> bool {
        let value = f64::from(sample);
        if value > self.trigger && !self.above {
            self.above = true;
            true
        } else {
            if value < self.rearm {
                self.above = false;
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(10);

    fn square_wave(pairs: usize, low: u16, high: u16) -> heapless::Vec<u16, 512> {
        let mut window = heapless::Vec::new();
        for _ in 0..pairs {
            window.push(low).unwrap();
            window.push(high).unwrap();
        }
        window
    }

    #[test]
    fn alternating_window_counts_every_peak() {
        let window = square_wave(75, 0, 100);
        assert_eq!(window_mean(&window), Some(50.0));
        assert_eq!(count_beats(&window), 75);

        let rate = HeartRateEstimator::new(150).estimate(&window, DELAY).unwrap();
        assert_eq!(rate.bpm(), 3000);
    }

    #[test]
    fn uniform_window_has_no_beats() {
        let window = [42u16; 150];
        let rate = HeartRateEstimator::default().estimate(&window, DELAY).unwrap();
        assert_eq!(rate, BeatRate::from_bpm(0));
    }

    #[test]
    fn empty_window_is_rejected() {
        let result = HeartRateEstimator::new(150).estimate(&[], DELAY);
        assert_eq!(result, Err(MonitorError::InvalidWindow { expected: 150, actual: 0 }));
    }

    #[test]
    fn short_window_is_rejected() {
        let window = [10u16; 149];
        let result = HeartRateEstimator::new(150).estimate(&window, DELAY);
        assert_eq!(result, Err(MonitorError::InvalidWindow { expected: 150, actual: 149 }));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let window = square_wave(75, 0, 100);
        let result = HeartRateEstimator::new(150).estimate(&window, Duration::ZERO);
        assert_eq!(result, Err(MonitorError::InvalidDelay));
    }

    #[test]
    fn trigger_needs_two_percent_over_mean() {
        // mean = 100; 102 sits exactly on the trigger level and must not count
        let window = [98u16, 102, 98, 102];
        assert_eq!(window_mean(&window), Some(100.0));
        assert_eq!(count_beats(&window), 0);

        // 103 clears it
        let window = [97u16, 103, 97, 103];
        assert_eq!(count_beats(&window), 2);
    }

    #[test]
    fn hysteresis_band_does_not_rearm() {
        // mean = 100. After the first peak the signal only dips into
        // [100, 102]; it never falls below the mean, so the second peak
        // is the same beat.
        let window = [70u16, 130, 101, 130, 70, 99];
        assert_eq!(window_mean(&window), Some(100.0));
        assert_eq!(count_beats(&window), 1);
    }

    #[test]
    fn falling_below_mean_rearms() {
        // mean = 100; the 99 re-arms the detector before the second peak
        let window = [70u16, 130, 99, 130, 71, 100];
        assert_eq!(window_mean(&window), Some(100.0));
        assert_eq!(count_beats(&window), 2);
    }

    #[test]
    fn bpm_truncates_toward_zero() {
        // 1 beat in 0.7 s = 85.71 bpm
        let rate = beats_per_minute(1, 70, DELAY).unwrap();
        assert_eq!(rate.bpm(), 85);

        // 2 beats in 1.5 s = 80 bpm exactly
        let rate = beats_per_minute(2, 150, DELAY).unwrap();
        assert_eq!(rate.bpm(), 80);
    }

    #[test]
    fn bpm_is_exact_where_float_division_rounds_down() {
        // 49 beats in 1.5 s = 1960 bpm exactly. Evaluating
        // (49 / (150 * 0.01)) * 60 in f64 lands just below 1960 and
        // truncates to 1959; the integer form does not.
        let rate = beats_per_minute(49, 150, DELAY).unwrap();
        assert_eq!(rate.bpm(), 1960);

        // 75 beats in 1.5 s, the alternating-window case
        let rate = beats_per_minute(75, 150, DELAY).unwrap();
        assert_eq!(rate.bpm(), 3000);
    }

    #[test]
    fn bpm_saturates() {
        let rate = beats_per_minute(u32::MAX, 1, Duration::from_nanos(1)).unwrap();
        assert_eq!(rate.bpm(), u32::MAX);
    }

    #[test]
    fn peak_at_start_counts() {
        // Detector starts armed, so a window opening on a peak counts it.
        let window = [200u16, 0, 0, 0];
        assert_eq!(count_beats(&window), 1);
    }
}
