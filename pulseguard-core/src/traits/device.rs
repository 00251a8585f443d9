//! Device Traits
//!
//! Interfaces for the four pieces of hardware around the monitor. Reads are
//! shaped after the embedded-hal 0.2 conventions: one-shot ADC conversions
//! return `nb::Result` so a driver can report "conversion still running"
//! without blocking inside the driver.

use crate::sample::{EnvironmentReading, Sample};

/// Source of raw pulse-sensor readings.
///
/// Must tolerate being read at high frequency (100 Hz by default).
///
/// ## Example Implementation
///
/// ```rust
/// use pulseguard_core::traits::AnalogSource;
///
/// /// Stand-in for an ADC channel that always reads mid-scale.
/// struct MidScale;
///
/// impl AnalogSource for MidScale {
///     type Error = core::convert::Infallible;
///
///     fn read(&mut self) -> nb::Result<u16, Self::Error> {
///         Ok(16_384)
///     }
/// }
///
/// assert_eq!(MidScale.read(), Ok(16_384));
/// ```
///
/// ## Error Handling
///
/// - `nb::Error::WouldBlock` - Conversion not finished, ask again
/// - `nb::Error::Other(E)` - Bus or device error
pub trait AnalogSource {
    /// Driver error type
    type Error: core::fmt::Debug;

    /// Read the current pulse-sensor value
    fn read(&mut self) -> nb::Result<Sample, Self::Error>;
}

/// Source of ambient temperature and humidity.
///
/// Low-cost sensors regularly miss a frame. That case is `Ok(None)` and is
/// retried by the monitor; `Err` is reserved for hardware faults, which are
/// not retried.
pub trait EnvironmentSource {
    /// Driver error type
    type Error: core::fmt::Debug;

    /// Read temperature (°C) and relative humidity (%)
    ///
    /// Returns `Ok(None)` when the sensor has no reading available. Never
    /// return a stale or default reading in its place.
    fn read(&mut self) -> Result<Option<EnvironmentReading>, Self::Error>;
}

/// Small text display.
///
/// Drawing is buffered: nothing is visible until [`flush`](Self::flush).
pub trait DisplaySink {
    /// Driver error type
    type Error: core::fmt::Debug;

    /// Blank the back buffer
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw one line of text with its top-left corner at `(x, y)` pixels
    fn text(&mut self, line: &str, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Push the back buffer to the panel
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Audible alarm (buzzer on a GPIO).
pub trait AlarmActuator {
    /// Driver error type
    type Error: core::fmt::Debug;

    /// Start sounding
    fn on(&mut self) -> Result<(), Self::Error>;

    /// Stop sounding
    fn off(&mut self) -> Result<(), Self::Error>;

    /// Switch to the requested state
    fn set_active(&mut self, active: bool) -> Result<(), Self::Error> {
        if active { self.on() } else { self.off() }
    }
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> nb::Result<Sample, Self::Error> {
        T::read(self)
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<Option<EnvironmentReading>, Self::Error> {
        T::read(self)
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        T::clear(self)
    }

    fn text(&mut self, line: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        T::text(self, line, x, y)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}

impl<T: AlarmActuator + ?Sized> AlarmActuator for &mut T {
    type Error = T::Error;

    fn on(&mut self) -> Result<(), Self::Error> {
        T::on(self)
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        T::off(self)
    }
}
