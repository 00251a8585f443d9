//! Time-Related Constants
//!
//! Sampling cadence of the pulse sensor, the idle period between monitor
//! cycles, and the retry timing for the environment sensor.

use core::time::Duration;

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Nanoseconds per minute, the numerator of every BPM computation.
pub const NANOS_PER_MINUTE: u64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE as u64;

// ===== PULSE SAMPLING =====

/// Samples collected for one heart-rate estimate.
///
/// At the default delay this is a 1.5 s window: long enough to see one or
/// two beats at resting heart rate.
pub const DEFAULT_SAMPLE_COUNT: usize = 150;

/// Pause after each pulse-sensor read.
///
/// 100 Hz sampling. Slow enough for an I2C ADC at its default data rate.
pub const DEFAULT_SAMPLE_DELAY: Duration = Duration::from_millis(10);

// ===== MONITOR LOOP =====

/// Idle period between full monitor cycles.
pub const DEFAULT_CYCLE_IDLE_PERIOD: Duration = Duration::from_secs(2);

/// Environment reads attempted per cycle before giving up.
///
/// Source: Adafruit DHT driver `read_retry` default (15 retries)
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 15;

/// Pause between environment read attempts.
///
/// DHT sensors need about 2 s between conversions.
///
/// Source: Adafruit DHT driver `read_retry` default (2 s)
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(2);
