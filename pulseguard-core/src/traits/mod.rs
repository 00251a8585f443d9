//! Device Traits and Abstractions for PulseGuard
//!
//! The monitor never touches a bus or a pin directly. Every collaborator is
//! reached through one of the traits below, so the same loop drives real
//! drivers on a board and scripted mocks in tests.
//!
//! ## Module Organization
//!
//! - [`device`] - Sensors, display and alarm
//! - [`time`] - Blocking delay used for sampling cadence and idle periods
//!
//! ## Design Philosophy
//!
//! - **Static Dispatch**: The monitor is generic over its devices
//! - **Driver Errors Stay Typed**: Each trait carries an associated `Error`;
//!   the monitor logs it and maps it to [`MonitorError::DeviceFailure`]
//! - **Lendable**: Every trait is implemented for `&mut T`, so a caller can
//!   keep ownership of a driver while the monitor uses it
//!
//! [`MonitorError::DeviceFailure`]: crate::MonitorError::DeviceFailure

pub mod device;
pub mod time;

pub use device::{AlarmActuator, AnalogSource, DisplaySink, EnvironmentSource};
pub use time::Delay;

#[cfg(feature = "std")]
pub use time::StdDelay;
