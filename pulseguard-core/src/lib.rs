//! Core monitoring loop for PulseGuard
//!
//! Reads a pulse sensor and an ambient temperature/humidity sensor, turns
//! the pulse waveform into a heart rate, shows the result on a small
//! display and sounds an alarm when the wearer is both feverish and
//! tachycardic.
//!
//! Key constraints:
//! - Runs without std (feature `embedded`) as well as on a Raspberry Pi
//! - No heap allocation; windows and frames are stored inline
//! - Hardware is reached only through the traits in [`traits`]
//!
//! ```no_run
//! use core::time::Duration;
//! use pulseguard_core::{HeartRateEstimator, MonitorError};
//!
//! let estimator = HeartRateEstimator::default();
//! let window = [512u16; 150];
//!
//! match estimator.estimate(&window, Duration::from_millis(10)) {
//!     Ok(rate) => println!("{} BPM", rate),
//!     Err(MonitorError::InvalidWindow { .. }) => {}, // wrong window length
//!     Err(e) => println!("estimate failed: {}", e),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod alert;
pub mod config;
pub mod constants;
pub mod display;
pub mod errors;
pub mod heart_rate;
pub mod monitor;
pub mod sample;
pub mod sampler;
pub mod traits;
pub mod validation;

// Public API
pub use alert::AlertThresholds;
pub use config::{MonitorConfig, RetryPolicy};
pub use display::{Frame, TextLine};
pub use errors::{Device, MonitorError, MonitorResult};
pub use heart_rate::HeartRateEstimator;
pub use monitor::{CycleLimit, CycleOutcome, CycleReport, Monitor, RunSummary, StopSignal};
pub use sample::{BeatRate, EnvironmentReading, Sample, SampleWindow};
pub use sampler::Sampler;
pub use validation::EnvironmentValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
