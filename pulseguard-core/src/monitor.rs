//! Monitor Run Loop
//!
//! ## Overview
//!
//! One cycle of the monitor:
//!
//! ```text
//! ┌──────────────┐   ┌─────────┐   ┌───────────┐   ┌───────┐   ┌─────────────┐
//! │ environment  │──►│ sampler │──►│ estimator │──►│ alert │──►│ alarm +     │
//! │ (retry)      │   │ 150×10ms│   │           │   │       │   │ display     │
//! └──────────────┘   └─────────┘   └───────────┘   └───────┘   └─────────────┘
//!        │ retries exhausted                                         │
//!        └──► "Sensor unavailable" frame, alarm off                  ▼
//!                                                               idle period
//! ```
//!
//! ## Failure Policy
//!
//! | error                               | effect                          |
//! |-------------------------------------|---------------------------------|
//! | no environment reading              | retried per [`RetryPolicy`]     |
//! | implausible environment reading     | treated as no reading           |
//! | retries exhausted                   | cycle skipped, nothing stale shown |
//! | `InvalidWindow` / `InvalidDelay`    | cycle failed, loop continues    |
//! | `DeviceFailure`                     | [`Monitor::run`] returns the error |
//!
//! ## Stopping
//!
//! [`Monitor::run`] checks a [`StopSignal`] before every cycle. On a board
//! that is an `AtomicBool` set from a signal handler; in tests it is a
//! [`CycleLimit`].
//!
//! [`RetryPolicy`]: crate::config::RetryPolicy

use core::sync::atomic::{AtomicBool, Ordering};

use crate::alert::AlertThresholds;
use crate::config::MonitorConfig;
use crate::display::Frame;
use crate::errors::{device_failure, Device, MonitorError, MonitorResult};
use crate::heart_rate::HeartRateEstimator;
use crate::sample::{BeatRate, EnvironmentReading};
use crate::sampler::Sampler;
use crate::traits::{AlarmActuator, AnalogSource, Delay, DisplaySink, EnvironmentSource};
use crate::validation::EnvironmentValidator;

/// Asked before every cycle whether the loop should end
pub trait StopSignal {
    /// `true` to stop before the next cycle
    fn should_stop(&mut self) -> bool;
}

impl StopSignal for &AtomicBool {
    fn should_stop(&mut self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

/// Stop after a fixed number of cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLimit {
    remaining: u32,
}

impl CycleLimit {
    /// Allow `cycles` more cycles
    pub const fn new(cycles: u32) -> Self {
        Self { remaining: cycles }
    }
}

impl StopSignal for CycleLimit {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// What a completed cycle measured and decided
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Environment reading used for the cycle
    pub reading: EnvironmentReading,
    /// Estimated heart rate
    pub rate: BeatRate,
    /// Whether the alarm was switched on
    pub alert: bool,
    /// Environment reads it took to get `reading`
    pub attempts: u32,
}

/// Result of one cycle that did not hit an error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Readings were shown and the alarm set
    Reported(CycleReport),
    /// No usable environment reading within the retry policy
    SensorUnavailable {
        /// Reads attempted
        attempts: u32,
    },
}

/// Counters for one call to [`Monitor::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Cycles that reported a heart rate
    pub cycles: u32,
    /// Cycles skipped for lack of an environment reading
    pub skipped: u32,
    /// Cycles ended by a non-fatal error
    pub failed: u32,
    /// Reported cycles with the alarm on
    pub alerts: u32,
}

/// The monitoring loop and the devices it drives.
///
/// Every device is a value owned by the monitor (or lent to it as `&mut`);
/// there is no global hardware state.
pub struct Monitor<P, E, D, A, W> {
    pulse: P,
    environment: E,
    display: D,
    alarm: A,
    delay: W,
    estimator: HeartRateEstimator,
    validator: EnvironmentValidator,
    thresholds: AlertThresholds,
    config: MonitorConfig,
}

impl<P, E, D, A, W> Monitor<P, E, D, A, W>
where
    P: AnalogSource,
    E: EnvironmentSource,
    D: DisplaySink,
    A: AlarmActuator,
    W: Delay,
{
    /// Build a monitor around its devices.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` does not validate.
    pub fn new(
        pulse: P,
        environment: E,
        display: D,
        alarm: A,
        delay: W,
        config: MonitorConfig,
    ) -> MonitorResult<Self> {
        config.validate()?;

        Ok(Self {
            pulse,
            environment,
            display,
            alarm,
            delay,
            estimator: HeartRateEstimator::new(config.sample_count),
            validator: EnvironmentValidator::default(),
            thresholds: config.thresholds(),
            config,
        })
    }

    /// Replace the default environment plausibility limits
    pub fn with_validator(mut self, validator: EnvironmentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Run cycles until `stop` says otherwise.
    ///
    /// Each cycle is followed by the configured idle period.
    ///
    /// # Errors
    ///
    /// The first `DeviceFailure`. The alarm and display are left as they
    /// were; their state is unknown after a hardware fault.
    pub fn run<S: StopSignal>(&mut self, mut stop: S) -> MonitorResult<RunSummary> {
        let mut summary = RunSummary::default();

        while !stop.should_stop() {
            match self.run_cycle() {
                Ok(CycleOutcome::Reported(report)) => {
                    summary.cycles += 1;
                    if report.alert {
                        summary.alerts += 1;
                    }
                }
                Ok(CycleOutcome::SensorUnavailable { .. }) => summary.skipped += 1,
                Err(e) if e.is_fatal() => {
                    log_error!("stopping monitor: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    log_warn!("cycle failed: {}", e);
                    summary.failed += 1;
                }
            }

            self.delay.delay(self.config.cycle_idle_period);
        }

        log_info!(
            "monitor stopped: {} cycles, {} skipped, {} failed",
            summary.cycles,
            summary.skipped,
            summary.failed
        );
        Ok(summary)
    }

    /// One cycle without the trailing idle period.
    ///
    /// # Errors
    ///
    /// `DeviceFailure` from any device, or a domain error from sampling or
    /// estimation. A missing environment reading is not an error; it is
    /// reported as [`CycleOutcome::SensorUnavailable`].
    pub fn run_cycle(&mut self) -> MonitorResult<CycleOutcome> {
        let (reading, attempts) = match self.acquire_environment() {
            Ok(acquired) => acquired,
            Err(MonitorError::RetriesExhausted { attempts }) => {
                self.set_alarm(false)?;
                Frame::sensor_unavailable().present(&mut self.display)?;
                return Ok(CycleOutcome::SensorUnavailable { attempts });
            }
            Err(e) => return Err(e),
        };

        let delay = self.config.sample_delay;
        let window = Sampler::new(&mut self.pulse, &mut self.delay)
            .sample(self.config.sample_count, delay)?;
        let rate = self.estimator.estimate(&window, delay)?;

        let alert = self.thresholds.evaluate(reading.temperature_c, rate);
        self.set_alarm(alert)?;
        Frame::render(&reading, rate, alert).present(&mut self.display)?;

        log_info!(
            "temp {} C, humidity {} %, heart {} bpm, alert {}",
            reading.temperature_c,
            reading.humidity_pct,
            rate.bpm(),
            alert
        );

        Ok(CycleOutcome::Reported(CycleReport { reading, rate, alert, attempts }))
    }

    /// Read the environment sensor under the retry policy.
    ///
    /// Returns the reading and the attempts it took, `RetriesExhausted`
    /// when the policy ran out, or `DeviceFailure` straight away.
    fn acquire_environment(&mut self) -> MonitorResult<(EnvironmentReading, u32)> {
        let policy = self.config.retry;

        for attempt in 1..=policy.max_attempts {
            match self.environment.read() {
                Ok(Some(reading)) => match self.validator.validate(&reading) {
                    Ok(()) => return Ok((reading, attempt)),
                    Err(e) => log_warn!("discarding environment reading (attempt {}): {}", attempt, e),
                },
                Ok(None) => log_warn!(
                    "{} (attempt {} of {})",
                    MonitorError::SensorUnavailable,
                    attempt,
                    policy.max_attempts
                ),
                Err(e) => return Err(device_failure(Device::EnvironmentSensor, e)),
            }

            if attempt < policy.max_attempts {
                self.delay.delay(policy.backoff);
            }
        }

        let exhausted = MonitorError::RetriesExhausted { attempts: policy.max_attempts };
        log_error!("{}", exhausted);
        Err(exhausted)
    }

    fn set_alarm(&mut self, active: bool) -> MonitorResult<()> {
        self.alarm
            .set_active(active)
            .map_err(|e| device_failure(Device::Alarm, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use core::time::Duration;

    struct Flat;

    impl AnalogSource for Flat {
        type Error = Infallible;

        fn read(&mut self) -> nb::Result<u16, Infallible> {
            Ok(500)
        }
    }

    struct Room;

    impl EnvironmentSource for Room {
        type Error = Infallible;

        fn read(&mut self) -> Result<Option<EnvironmentReading>, Infallible> {
            Ok(Some(EnvironmentReading::new(36.6, 40.0)))
        }
    }

    #[derive(Default)]
    struct Blank {
        flushes: u32,
    }

    impl DisplaySink for Blank {
        type Error = Infallible;

        fn clear(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn text(&mut self, _: &str, _: i32, _: i32) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct Silent;

    impl AlarmActuator for Silent {
        type Error = Infallible;

        fn on(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn off(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Pauses(u32);

    impl Delay for Pauses {
        fn delay(&mut self, _: Duration) {
            self.0 += 1;
        }
    }

    #[test]
    fn cycle_errors_are_counted_and_the_loop_continues() {
        let mut display = Blank::default();
        let mut delay = Pauses::default();
        let mut monitor = Monitor::new(Flat, Room, &mut display, Silent, &mut delay, MonitorConfig::default())
            .unwrap();
        // a window the estimator will refuse
        monitor.estimator = HeartRateEstimator::new(monitor.config.sample_count + 1);

        assert!(matches!(monitor.run_cycle(), Err(MonitorError::InvalidWindow { .. })));

        let summary = monitor.run(CycleLimit::new(2)).unwrap();
        assert_eq!(summary, RunSummary { cycles: 0, skipped: 0, failed: 2, alerts: 0 });
        drop(monitor);

        assert_eq!(display.flushes, 0);
        // 150 sample pauses per cycle plus one idle period after each run cycle
        assert_eq!(delay.0, 3 * 150 + 2);
    }

    #[test]
    fn cycle_limit_counts_down() {
        let mut limit = CycleLimit::new(2);
        assert!(!limit.should_stop());
        assert!(!limit.should_stop());
        assert!(limit.should_stop());
        assert!(limit.should_stop());
    }

    #[test]
    fn atomic_flag_stops() {
        let flag = AtomicBool::new(false);
        let mut signal = &flag;
        assert!(!signal.should_stop());

        flag.store(true, Ordering::SeqCst);
        assert!(signal.should_stop());
    }
}
