//! Error Types for Monitoring Failures
//!
//! ## Design Philosophy
//!
//! The monitor runs on small boards next to the sensors it reads, so the
//! error type follows the same rules as the rest of the core:
//!
//! 1. **Small Size**: Variants carry a few scalars at most. Errors travel
//!    through the hot sampling path and are copied into cycle summaries.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`. Driver-specific
//!    error values are logged where they are mapped and never stored.
//!
//! 3. **Copy Semantics**: `MonitorError` is `Copy` so it can be returned,
//!    logged and counted without moves.
//!
//! ## Error Categories
//!
//! ### Transient (retried or skipped)
//! - `SensorUnavailable`: the environment sensor produced no reading
//! - `OutOfRange` / `InvalidValue`: the reading came back but is implausible
//! - `RetriesExhausted`: the retry policy gave up for this cycle
//!
//! ### Domain (fatal to one estimate)
//! - `InvalidWindow`: empty or length-mismatched sample window
//! - `InvalidDelay`: zero acquisition delay
//! - `InvalidConfig`: rejected at startup
//!
//! ### Hardware (fatal to the run)
//! - `DeviceFailure`: a driver reported a bus or device error
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use pulseguard_core::{MonitorError, HeartRateEstimator};
//! use core::time::Duration;
//!
//! let estimator = HeartRateEstimator::new(4);
//! let window = [0u16, 100, 0, 100];
//!
//! match estimator.estimate(&window, Duration::from_millis(10)) {
//!     Ok(rate) => {
//!         // show_on_display(rate);
//!         let _ = rate;
//!     }
//!     Err(MonitorError::InvalidWindow { expected, actual }) => {
//!         // sampler and estimator disagree on window length
//!         let _ = (expected, actual);
//!     }
//!     Err(e) if e.is_fatal() => {
//!         // undefined hardware state - stop the loop
//!     }
//!     Err(_) => {
//!         // skip this cycle
//!     }
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Hardware collaborators the monitor talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// Analog pulse sensor behind the ADC
    PulseSensor,
    /// Temperature/humidity sensor
    EnvironmentSensor,
    /// Text display
    Display,
    /// Buzzer or other audible alarm
    Alarm,
}

impl Device {
    /// Short lowercase name used in log lines
    pub const fn name(&self) -> &'static str {
        match self {
            Device::PulseSensor => "pulse sensor",
            Device::EnvironmentSensor => "environment sensor",
            Device::Display => "display",
            Device::Alarm => "alarm",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monitoring errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MonitorError {
    /// Environment sensor returned no reading
    #[error("Environment sensor has no reading available")]
    SensorUnavailable,

    /// Retry policy gave up on the environment sensor
    #[error("No environment reading after {attempts} attempts")]
    RetriesExhausted {
        /// Number of reads attempted before giving up
        attempts: u32,
    },

    /// Sample window is empty or has the wrong length
    #[error("Invalid sample window: expected {expected} samples, got {actual}")]
    InvalidWindow {
        /// Window length the estimator was configured for
        expected: usize,
        /// Window length actually supplied
        actual: usize,
    },

    /// Inter-sample delay is zero
    #[error("Invalid sample delay: must be greater than zero")]
    InvalidDelay,

    /// Configuration rejected at startup
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which field was rejected and why
        reason: &'static str,
    },

    /// Reading outside the plausible range for the sensor
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed the check
        value: f32,
        /// Lowest plausible value
        min: f32,
        /// Highest plausible value
        max: f32,
    },

    /// Reading is NaN or infinite
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Driver reported a hardware-level error
    #[error("Device failure: {device}")]
    DeviceFailure {
        /// Which collaborator failed
        device: Device,
    },
}

impl MonitorError {
    /// Whether the error leaves hardware in an undefined state.
    ///
    /// Only device failures stop the run loop; everything else costs at
    /// most the current cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MonitorError::DeviceFailure { .. })
    }
}

/// Map a driver error to `DeviceFailure`, logging the driver's own detail
pub(crate) fn device_failure<E: fmt::Debug>(device: Device, err: E) -> MonitorError {
    #[cfg(feature = "log")]
    log::error!("{} failure: {:?}", device, err);
    #[cfg(all(feature = "defmt", not(feature = "log")))]
    defmt::error!("{} failure: {}", device, defmt::Debug2Format(&err));
    #[cfg(not(any(feature = "log", feature = "defmt")))]
    let _ = err;

    MonitorError::DeviceFailure { device }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Device {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SensorUnavailable =>
                defmt::write!(fmt, "Environment sensor unavailable"),
            Self::RetriesExhausted { attempts } =>
                defmt::write!(fmt, "No reading after {} attempts", attempts),
            Self::InvalidWindow { expected, actual } =>
                defmt::write!(fmt, "Window: expected {}, got {}", expected, actual),
            Self::InvalidDelay =>
                defmt::write!(fmt, "Invalid sample delay"),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Config: {}", reason),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::DeviceFailure { device } =>
                defmt::write!(fmt, "Device failure: {}", device),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_device_failures_are_fatal() {
        assert!(MonitorError::DeviceFailure { device: Device::Alarm }.is_fatal());
        assert!(!MonitorError::SensorUnavailable.is_fatal());
        assert!(!MonitorError::InvalidDelay.is_fatal());
        assert!(!MonitorError::RetriesExhausted { attempts: 3 }.is_fatal());
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_problem() {
        let err = MonitorError::InvalidWindow { expected: 150, actual: 0 };
        assert_eq!(err.to_string(), "Invalid sample window: expected 150 samples, got 0");

        let err = MonitorError::DeviceFailure { device: Device::PulseSensor };
        assert_eq!(err.to_string(), "Device failure: pulse sensor");
    }
}
