//! Signal Sampler
//!
//! Pulls a fixed number of readings from the pulse sensor at a fixed
//! cadence. Sampling is synchronous: the calling thread is blocked for
//! roughly `count × delay` and the window is only handed back once it is
//! complete, so the estimator never sees a partial acquisition.

use core::time::Duration;

use crate::constants::MAX_WINDOW_LEN;
use crate::errors::{device_failure, Device, MonitorError, MonitorResult};
use crate::sample::SampleWindow;
use crate::traits::{AnalogSource, Delay};

/// Collects sample windows from an analog source.
///
/// Owns (or borrows, through the `&mut T` impls) the source and the delay
/// provider it paces reads with.
///
/// ```rust
/// use core::time::Duration;
/// use pulseguard_core::traits::{AnalogSource, Delay};
/// use pulseguard_core::Sampler;
///
/// struct Ramp(u16);
/// impl AnalogSource for Ramp {
///     type Error = ();
///     fn read(&mut self) -> nb::Result<u16, ()> {
///         self.0 += 1;
///         Ok(self.0)
///     }
/// }
///
/// struct NoWait;
/// impl Delay for NoWait {
///     fn delay(&mut self, _: Duration) {}
/// }
///
/// let mut sampler = Sampler::new(Ramp(0), NoWait);
/// let window = sampler.sample(3, Duration::from_millis(10))?;
/// assert_eq!(window.as_slice(), &[1, 2, 3]);
/// # Ok::<(), pulseguard_core::MonitorError>(())
/// ```
#[derive(Debug)]
pub struct Sampler<S, D> {
    source: S,
    delay: D,
}

impl<S, D> Sampler<S, D>
where
    S: AnalogSource,
    D: Delay,
{
    /// Pair a source with the delay that paces it
    pub fn new(source: S, delay: D) -> Self {
        Self { source, delay }
    }

    /// Collect exactly `count` readings, pausing `delay` after each one.
    ///
    /// # Errors
    ///
    /// - `InvalidWindow` if `count` is zero or above [`MAX_WINDOW_LEN`]
    /// - `InvalidDelay` if `delay` is zero
    /// - `DeviceFailure` if the source reports an error; no reading is
    ///   substituted and the partial window is dropped
    pub fn sample(&mut self, count: usize, delay: Duration) -> MonitorResult<SampleWindow> {
        if count == 0 || count > MAX_WINDOW_LEN {
            return Err(MonitorError::InvalidWindow { expected: MAX_WINDOW_LEN, actual: count });
        }
        if delay.is_zero() {
            return Err(MonitorError::InvalidDelay);
        }

        let mut window = SampleWindow::new();
        for _ in 0..count {
            let sample = nb::block!(self.source.read())
                .map_err(|e| device_failure(Device::PulseSensor, e))?;
            // count <= MAX_WINDOW_LEN, so the window cannot be full here
            let _ = window.push(sample);
            self.delay.delay(delay);
        }

        Ok(window)
    }

    /// Give back the source and delay
    pub fn release(self) -> (S, D) {
        (self.source, self.delay)
    }
}
