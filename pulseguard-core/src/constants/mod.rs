//! Constants for PulseGuard Core
//!
//! This module provides centralized, documented constants used throughout
//! the monitor. Every numeric value the loop depends on lives here so the
//! calibration of the estimator and the defaults of the configuration can be
//! read in one place.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensors**: ADC range and environment sensor limits
//! - **Time**: Sampling cadence, idle period and retry timing
//! - **Thresholds**: Alert levels and estimator calibration
//! - **Buffers**: Inline storage capacities
//! - **Display**: Text layout on the display
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the name
//! 3. Reference the datasheet where a value comes from hardware

/// Sensor specifications and operating limits.
pub mod sensors;

/// Sampling cadence, idle period and retry timing.
pub mod time;

/// Alert thresholds and estimator calibration.
pub mod thresholds;

/// Inline buffer capacities.
pub mod buffers;

/// Display geometry and line placement.
pub mod display;

// Re-export commonly used constants for convenience
pub use sensors::{
    ADC_MAX_SINGLE_ENDED,
    ENV_TEMP_SENSOR_MIN_C, ENV_TEMP_SENSOR_MAX_C,
    ENV_HUMIDITY_SENSOR_MIN_PCT, ENV_HUMIDITY_SENSOR_MAX_PCT,
};

pub use time::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_DELAY, DEFAULT_CYCLE_IDLE_PERIOD,
    DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_BACKOFF, SECONDS_PER_MINUTE,
};

pub use thresholds::{
    TRIGGER_MARGIN, DEFAULT_TEMPERATURE_THRESHOLD_C, DEFAULT_HEART_RATE_THRESHOLD_BPM,
};

pub use buffers::{MAX_WINDOW_LEN, MAX_FRAME_LINES, MAX_LINE_BYTES};
