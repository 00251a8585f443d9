//! Common test utilities for integration tests
//!
//! This module provides:
//! - Scripted sensors that replay fixed responses
//! - Recording display, alarm and delay mocks
//! - A `Rig` bundling them so a test can build a monitor, run it and then
//!   inspect what every device saw

#![allow(dead_code)]

use std::string::String;
use std::time::Duration;
use std::vec::Vec;

use pulseguard_core::traits::{AlarmActuator, AnalogSource, Delay, DisplaySink, EnvironmentSource};
use pulseguard_core::{EnvironmentReading, Monitor, MonitorConfig};

pub mod generators;

/// Error returned by every mock when told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

/// Pulse sensor replaying a waveform, wrapping around at the end
pub struct ScriptedPulse {
    samples: Vec<u16>,
    pos: usize,
    fail_after: Option<usize>,
    pub reads: usize,
}

impl ScriptedPulse {
    pub fn new(samples: Vec<u16>) -> Self {
        assert!(!samples.is_empty(), "waveform needs at least one sample");
        Self { samples, pos: 0, fail_after: None, reads: 0 }
    }

    /// Fail every read after `reads` successful ones
    pub fn failing_after(mut self, reads: usize) -> Self {
        self.fail_after = Some(reads);
        self
    }
}

impl AnalogSource for ScriptedPulse {
    type Error = MockFault;

    fn read(&mut self) -> nb::Result<u16, MockFault> {
        if self.fail_after.is_some_and(|limit| self.reads >= limit) {
            return Err(nb::Error::Other(MockFault));
        }
        let value = self.samples[self.pos];
        self.pos = (self.pos + 1) % self.samples.len();
        self.reads += 1;
        Ok(value)
    }
}

/// One scripted answer from the environment sensor
#[derive(Debug, Clone, Copy)]
pub enum EnvStep {
    Reading(EnvironmentReading),
    Missing,
    Fault,
}

impl EnvStep {
    pub fn reading(temperature_c: f32, humidity_pct: f32) -> Self {
        EnvStep::Reading(EnvironmentReading::new(temperature_c, humidity_pct))
    }
}

/// Environment sensor replaying a script, repeating the last step forever
pub struct ScriptedEnvironment {
    steps: Vec<EnvStep>,
    pos: usize,
    pub reads: usize,
}

impl ScriptedEnvironment {
    pub fn new(steps: Vec<EnvStep>) -> Self {
        assert!(!steps.is_empty(), "script needs at least one step");
        Self { steps, pos: 0, reads: 0 }
    }

    /// Same reading every time
    pub fn steady(temperature_c: f32, humidity_pct: f32) -> Self {
        Self::new(vec![EnvStep::reading(temperature_c, humidity_pct)])
    }
}

impl EnvironmentSource for ScriptedEnvironment {
    type Error = MockFault;

    fn read(&mut self) -> Result<Option<EnvironmentReading>, MockFault> {
        let step = self.steps[self.pos];
        if self.pos + 1 < self.steps.len() {
            self.pos += 1;
        }
        self.reads += 1;

        match step {
            EnvStep::Reading(reading) => Ok(Some(reading)),
            EnvStep::Missing => Ok(None),
            EnvStep::Fault => Err(MockFault),
        }
    }
}

/// Text line as it reached the display
pub type DrawnLine = (String, i32, i32);

/// Display keeping every flushed frame
#[derive(Default)]
pub struct RecordingDisplay {
    pending: Vec<DrawnLine>,
    pub frames: Vec<Vec<DrawnLine>>,
    pub fail: bool,
}

impl RecordingDisplay {
    pub fn last_frame(&self) -> Option<&[DrawnLine]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Text of the last flushed frame, one entry per line
    pub fn last_texts(&self) -> Vec<&str> {
        self.last_frame()
            .map(|lines| lines.iter().map(|(text, _, _)| text.as_str()).collect())
            .unwrap_or_default()
    }
}

impl DisplaySink for RecordingDisplay {
    type Error = MockFault;

    fn clear(&mut self) -> Result<(), MockFault> {
        if self.fail {
            return Err(MockFault);
        }
        self.pending.clear();
        Ok(())
    }

    fn text(&mut self, line: &str, x: i32, y: i32) -> Result<(), MockFault> {
        self.pending.push((line.to_string(), x, y));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MockFault> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

/// Alarm recording every command, `true` for on
#[derive(Default)]
pub struct RecordingAlarm {
    pub commands: Vec<bool>,
    pub fail: bool,
}

impl AlarmActuator for RecordingAlarm {
    type Error = MockFault;

    fn on(&mut self) -> Result<(), MockFault> {
        if self.fail {
            return Err(MockFault);
        }
        self.commands.push(true);
        Ok(())
    }

    fn off(&mut self) -> Result<(), MockFault> {
        if self.fail {
            return Err(MockFault);
        }
        self.commands.push(false);
        Ok(())
    }
}

/// Delay that records requests instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub requests: Vec<Duration>,
}

impl RecordingDelay {
    pub fn total(&self) -> Duration {
        self.requests.iter().sum()
    }

    /// Number of requests of exactly `duration`
    pub fn count_of(&self, duration: Duration) -> usize {
        self.requests.iter().filter(|&&d| d == duration).count()
    }
}

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.requests.push(duration);
    }
}

/// Monitor type built by [`Rig::monitor`]
pub type RigMonitor<'a> = Monitor<
    &'a mut ScriptedPulse,
    &'a mut ScriptedEnvironment,
    &'a mut RecordingDisplay,
    &'a mut RecordingAlarm,
    &'a mut RecordingDelay,
>;

/// Every device a monitor needs, kept by the test
pub struct Rig {
    pub pulse: ScriptedPulse,
    pub environment: ScriptedEnvironment,
    pub display: RecordingDisplay,
    pub alarm: RecordingAlarm,
    pub delay: RecordingDelay,
}

impl Rig {
    pub fn new(pulse: ScriptedPulse, environment: ScriptedEnvironment) -> Self {
        Self {
            pulse,
            environment,
            display: RecordingDisplay::default(),
            alarm: RecordingAlarm::default(),
            delay: RecordingDelay::default(),
        }
    }

    /// Lend every device to a new monitor
    pub fn monitor(&mut self, config: MonitorConfig) -> RigMonitor<'_> {
        Monitor::new(
            &mut self.pulse,
            &mut self.environment,
            &mut self.display,
            &mut self.alarm,
            &mut self.delay,
            config,
        )
        .expect("test config should validate")
    }
}
