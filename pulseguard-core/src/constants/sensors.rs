//! Sensor Specifications and Limits
//!
//! Operating ranges for the two sensors the monitor reads: a pulse sensor
//! digitized by a 16-bit ADC, and a low-cost temperature/humidity sensor.

// ===== PULSE SENSOR (ADC) =====

/// Largest code a 16-bit ADC returns for a single-ended input.
///
/// Single-ended inputs only use the positive half of the signed range, so
/// readings sit in `0..=32767`. The sample type is wider and the estimator
/// accepts any `u16`.
///
/// Source: ADS1115 datasheet, section 9.3.3 (data format)
pub const ADC_MAX_SINGLE_ENDED: u16 = 32_767;

// ===== ENVIRONMENT SENSOR =====

/// Lowest plausible temperature from the environment sensor (°C).
///
/// Wide enough for DHT11 and DHT22 class parts. Anything colder on a body
/// monitor is a corrupt frame, not weather.
///
/// Source: DHT22 datasheet operating range
pub const ENV_TEMP_SENSOR_MIN_C: f32 = -40.0;

/// Highest plausible temperature from the environment sensor (°C).
///
/// Source: DHT22 datasheet operating range
pub const ENV_TEMP_SENSOR_MAX_C: f32 = 80.0;

/// Lowest relative humidity (%).
///
/// Physical lower limit (completely dry air).
pub const ENV_HUMIDITY_SENSOR_MIN_PCT: f32 = 0.0;

/// Highest relative humidity (%).
///
/// Physical upper limit (saturated air).
pub const ENV_HUMIDITY_SENSOR_MAX_PCT: f32 = 100.0;
