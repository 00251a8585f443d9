//! Alert Thresholds and Estimator Calibration

/// Rising-edge trigger level of the beat detector, as a multiple of the
/// window mean.
///
/// A sample counts as the start of a beat only when it exceeds the mean by
/// 2 %. The detector re-arms when a sample drops strictly below the mean
/// itself, so trigger and re-arm levels differ (hysteresis). Changing
/// either level changes every BPM the monitor reports.
pub const TRIGGER_MARGIN: f64 = 1.02;

/// Body temperature above which the alert may fire (°C).
///
/// 37.5 °C is the usual lower bound for fever.
pub const DEFAULT_TEMPERATURE_THRESHOLD_C: f32 = 37.5;

/// Heart rate above which the alert may fire (BPM).
pub const DEFAULT_HEART_RATE_THRESHOLD_BPM: u32 = 90;
