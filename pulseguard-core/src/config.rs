//! Monitor configuration
//!
//! Startup constants for the loop. Defaults reproduce the reference
//! wiring: 150 samples at 10 ms, alert above 37.5 °C and 90 BPM, 2 s
//! between cycles. Values are fixed once the [`Monitor`](crate::Monitor)
//! is built.
//!
//! ```rust
//! use core::time::Duration;
//! use pulseguard_core::MonitorConfig;
//!
//! let config = MonitorConfig::default()
//!     .with_sample_count(200)
//!     .with_temperature_threshold(38.0);
//! assert!(config.validate().is_ok());
//!
//! let broken = MonitorConfig::default().with_sample_delay(Duration::ZERO);
//! assert!(broken.validate().is_err());
//! ```
//!
//! On hosted builds the same structure can be loaded from JSON; fields that
//! are left out keep their defaults:
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use pulseguard_core::MonitorConfig;
//!
//! let config = MonitorConfig::from_json(r#"{ "heart_rate_threshold_bpm": 100 }"#).unwrap();
//! assert_eq!(config.heart_rate_threshold_bpm, 100);
//! assert_eq!(config.sample_count, 150);
//! # }
//! ```

use core::time::Duration;

use crate::alert::AlertThresholds;
use crate::constants::{
    DEFAULT_CYCLE_IDLE_PERIOD, DEFAULT_HEART_RATE_THRESHOLD_BPM, DEFAULT_RETRY_ATTEMPTS,
    DEFAULT_RETRY_BACKOFF, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_DELAY,
    DEFAULT_TEMPERATURE_THRESHOLD_C, MAX_WINDOW_LEN,
};
use crate::errors::{MonitorError, MonitorResult};

/// How often to ask the environment sensor before skipping a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryPolicy {
    /// Reads attempted per cycle, including the first
    pub max_attempts: u32,
    /// Pause between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_ATTEMPTS,
            backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Custom policy
    pub const fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self { max_attempts, backoff }
    }

    /// Single attempt, no backoff
    pub const fn no_retry() -> Self {
        Self { max_attempts: 1, backoff: Duration::ZERO }
    }
}

/// Startup configuration of the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Samples per heart-rate window
    pub sample_count: usize,
    /// Pause after each pulse-sensor read
    pub sample_delay: Duration,
    /// Alert temperature (°C), exclusive
    pub temperature_threshold_c: f32,
    /// Alert heart rate (BPM), exclusive
    pub heart_rate_threshold_bpm: u32,
    /// Idle period between cycles
    pub cycle_idle_period: Duration,
    /// Environment sensor retry policy
    pub retry: RetryPolicy,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sample_delay: DEFAULT_SAMPLE_DELAY,
            temperature_threshold_c: DEFAULT_TEMPERATURE_THRESHOLD_C,
            heart_rate_threshold_bpm: DEFAULT_HEART_RATE_THRESHOLD_BPM,
            cycle_idle_period: DEFAULT_CYCLE_IDLE_PERIOD,
            retry: RetryPolicy::default(),
        }
    }
}

impl MonitorConfig {
    /// Set samples per window
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the inter-sample delay
    pub fn with_sample_delay(mut self, delay: Duration) -> Self {
        self.sample_delay = delay;
        self
    }

    /// Set the alert temperature
    pub fn with_temperature_threshold(mut self, celsius: f32) -> Self {
        self.temperature_threshold_c = celsius;
        self
    }

    /// Set the alert heart rate
    pub fn with_heart_rate_threshold(mut self, bpm: u32) -> Self {
        self.heart_rate_threshold_bpm = bpm;
        self
    }

    /// Set the idle period between cycles
    pub fn with_cycle_idle_period(mut self, idle: Duration) -> Self {
        self.cycle_idle_period = idle;
        self
    }

    /// Set the environment retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Alert thresholds as one value
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds::new(self.temperature_threshold_c, self.heart_rate_threshold_bpm)
    }

    /// Wall-clock cost of one acquisition window, `None` if it does not
    /// fit in a `Duration`
    pub fn window_duration(&self) -> Option<Duration> {
        let count = u32::try_from(self.sample_count).ok()?;
        self.sample_delay.checked_mul(count)
    }

    /// Check the configuration before the loop starts.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> MonitorResult<()> {
        if self.sample_count == 0 {
            return Err(MonitorError::InvalidConfig { reason: "sample_count must be at least 1" });
        }
        if self.sample_count > MAX_WINDOW_LEN {
            return Err(MonitorError::InvalidConfig { reason: "sample_count exceeds window capacity" });
        }
        if self.sample_delay.is_zero() {
            return Err(MonitorError::InvalidConfig { reason: "sample_delay must be greater than zero" });
        }
        if self.window_duration().is_none() {
            return Err(MonitorError::InvalidConfig { reason: "sample_count * sample_delay overflows" });
        }
        if !self.temperature_threshold_c.is_finite() {
            return Err(MonitorError::InvalidConfig { reason: "temperature_threshold_c must be finite" });
        }
        if self.retry.max_attempts == 0 {
            return Err(MonitorError::InvalidConfig { reason: "retry.max_attempts must be at least 1" });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration (requires std)
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> MonitorResult<Self> {
        let config: MonitorConfig = serde_json::from_str(json).map_err(|e| {
            log_error!("config parse error: {}", e);
            MonitorError::InvalidConfig { reason: "malformed JSON configuration" }
        })?;
        config.validate()?;
        Ok(config)
    }
}
