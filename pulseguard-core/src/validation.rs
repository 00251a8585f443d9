//! Environment Reading Plausibility
//!
//! Single-wire humidity sensors occasionally hand back a frame that passes
//! the driver's checksum but decodes to nonsense: NaN, 3000 °C, 250 % RH.
//! Displaying it, or letting it drive the alarm, would be worse than
//! showing nothing, so the monitor treats an implausible reading exactly
//! like a missing one and retries.
//!
//! Only range and finiteness are checked. A plausible but wrong reading
//! passes; the sensor is not that kind of instrument.

use crate::constants::{
    ENV_HUMIDITY_SENSOR_MAX_PCT, ENV_HUMIDITY_SENSOR_MIN_PCT,
    ENV_TEMP_SENSOR_MAX_C, ENV_TEMP_SENSOR_MIN_C,
};
use crate::errors::{MonitorError, MonitorResult};
use crate::sample::EnvironmentReading;

/// Check if a value is finite and within `[min, max]`
pub fn check_range(value: f32, min: f32, max: f32) -> MonitorResult<()> {
    if !value.is_finite() {
        Err(MonitorError::InvalidValue)
    } else if value < min || value > max {
        Err(MonitorError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Range limits for environment readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentValidator {
    /// Minimum plausible temperature (°C)
    pub min_temperature_c: f32,
    /// Maximum plausible temperature (°C)
    pub max_temperature_c: f32,
    /// Minimum plausible relative humidity (%)
    pub min_humidity_pct: f32,
    /// Maximum plausible relative humidity (%)
    pub max_humidity_pct: f32,
}

impl Default for EnvironmentValidator {
    fn default() -> Self {
        Self {
            min_temperature_c: ENV_TEMP_SENSOR_MIN_C,
            max_temperature_c: ENV_TEMP_SENSOR_MAX_C,
            min_humidity_pct: ENV_HUMIDITY_SENSOR_MIN_PCT,
            max_humidity_pct: ENV_HUMIDITY_SENSOR_MAX_PCT,
        }
    }
}

impl EnvironmentValidator {
    /// Create validator with custom temperature limits.
    ///
    /// Swapped bounds are put back in order.
    pub fn with_temperature_limits(mut self, min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.min_temperature_c = min;
        self.max_temperature_c = max;
        self
    }

    /// Validate both halves of a reading, temperature first
    pub fn validate(&self, reading: &EnvironmentReading) -> MonitorResult<()> {
        check_range(reading.temperature_c, self.min_temperature_c, self.max_temperature_c)?;
        check_range(reading.humidity_pct, self.min_humidity_pct, self.max_humidity_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(-1.0, 0.0, 10.0).is_err());
        assert!(check_range(11.0, 0.0, 10.0).is_err());
        assert_eq!(check_range(f32::NAN, 0.0, 10.0), Err(MonitorError::InvalidValue));
        assert_eq!(check_range(f32::INFINITY, 0.0, 10.0), Err(MonitorError::InvalidValue));
    }

    #[test]
    fn body_temperature_reading_passes() {
        let validator = EnvironmentValidator::default();
        assert!(validator.validate(&EnvironmentReading::new(36.9, 48.0)).is_ok());
    }

    #[test]
    fn corrupt_frames_are_rejected() {
        let validator = EnvironmentValidator::default();

        let result = validator.validate(&EnvironmentReading::new(3000.0, 50.0));
        assert!(matches!(result, Err(MonitorError::OutOfRange { .. })));

        let result = validator.validate(&EnvironmentReading::new(25.0, 250.0));
        assert_eq!(result, Err(MonitorError::OutOfRange { value: 250.0, min: 0.0, max: 100.0 }));

        let result = validator.validate(&EnvironmentReading::new(f32::NAN, 50.0));
        assert_eq!(result, Err(MonitorError::InvalidValue));
    }

    #[test]
    fn swapped_limits_are_reordered() {
        let validator = EnvironmentValidator::default().with_temperature_limits(45.0, 30.0);
        assert_eq!(validator.min_temperature_c, 30.0);
        assert_eq!(validator.max_temperature_c, 45.0);
        assert!(validator.validate(&EnvironmentReading::new(25.0, 50.0)).is_err());
    }
}
