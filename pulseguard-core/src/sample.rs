//! Readings produced and consumed by the monitor
//!
//! - [`Sample`]: one raw ADC code from the pulse sensor
//! - [`SampleWindow`]: the samples of one acquisition, in order
//! - [`BeatRate`]: the estimator's output
//! - [`EnvironmentReading`]: temperature and humidity, passed through

use core::fmt;
use core::ops::Deref;

use heapless::Vec;

use crate::constants::MAX_WINDOW_LEN;
use crate::errors::{MonitorError, MonitorResult};

/// One raw pulse-sensor reading (ADC code)
pub type Sample = u16;

/// Ordered samples from one acquisition cycle.
///
/// Stored inline, up to [`MAX_WINDOW_LEN`] samples. A window is built by
/// the sampler (or from a slice), handed to the estimator and dropped;
/// nothing carries over between cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleWindow {
    samples: Vec<Sample, MAX_WINDOW_LEN>,
}

impl SampleWindow {
    /// Empty window
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Copy samples from a slice.
    ///
    /// Fails with `InvalidWindow` when the slice exceeds the inline capacity.
    pub fn from_slice(samples: &[Sample]) -> MonitorResult<Self> {
        let samples = Vec::from_slice(samples).map_err(|_| MonitorError::InvalidWindow {
            expected: MAX_WINDOW_LEN,
            actual: samples.len(),
        })?;
        Ok(Self { samples })
    }

    /// Append a sample; `Err` hands it back when the window is full
    pub(crate) fn push(&mut self, sample: Sample) -> Result<(), Sample> {
        self.samples.push(sample)
    }

    /// Samples in acquisition order
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

impl Deref for SampleWindow {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

impl AsRef<[Sample]> for SampleWindow {
    fn as_ref(&self) -> &[Sample] {
        &self.samples
    }
}

/// Heart rate in whole beats per minute.
///
/// Unsigned, so a rate can never be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatRate(u32);

impl BeatRate {
    /// Wrap a BPM value
    pub const fn from_bpm(bpm: u32) -> Self {
        Self(bpm)
    }

    /// Beats per minute
    pub const fn bpm(&self) -> u32 {
        self.0
    }
}

impl From<BeatRate> for u32 {
    fn from(rate: BeatRate) -> u32 {
        rate.0
    }
}

impl fmt::Display for BeatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BeatRate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.0)
    }
}

/// Temperature and relative humidity from the environment sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentReading {
    /// Temperature in °C
    pub temperature_c: f32,
    /// Relative humidity in %
    pub humidity_pct: f32,
}

impl EnvironmentReading {
    /// Pair a temperature with a humidity
    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self { temperature_c, humidity_pct }
    }
}
