//! Simulated Monitor Example
//!
//! Runs the full monitor loop on a desktop with simulated hardware:
//! a synthetic pulse waveform, an environment sensor whose temperature
//! slowly climbs into fever range, a console "display" and a console
//! "buzzer".
//!
//! ## What You'll Learn
//!
//! - Implementing the device traits for your own hardware
//! - Configuring and building a `Monitor`
//! - Stopping the loop cleanly with Ctrl-C
//!
//! ## Running the Example
//!
//! ```bash
//! RUST_LOG=debug cargo run --example simulated_monitor
//! ```

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pulseguard_core::constants::ADC_MAX_SINGLE_ENDED;
use pulseguard_core::traits::{AlarmActuator, AnalogSource, DisplaySink, EnvironmentSource, StdDelay};
use pulseguard_core::{EnvironmentReading, Monitor, MonitorConfig, RetryPolicy};

/// Pulse sensor producing one short peak every `period` reads
struct SyntheticPulse {
    tick: u32,
    period: u32,
}

impl AnalogSource for SyntheticPulse {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u16, Infallible> {
        self.tick = self.tick.wrapping_add(1);
        let phase = self.tick % self.period;
        // small ripple on the baseline so the waveform is not flat
        let value = match phase {
            0 => ADC_MAX_SINGLE_ENDED / 4 * 3,
            1 => ADC_MAX_SINGLE_ENDED / 8 * 5,
            _ => 16_000 + (phase % 7) as u16 * 40,
        };
        Ok(value)
    }
}

/// Temperature sensor warming up by `step` per read, dropping every 5th read
struct WarmingRoom {
    temperature_c: f32,
    step: f32,
    reads: u32,
}

impl EnvironmentSource for WarmingRoom {
    type Error = Infallible;

    fn read(&mut self) -> Result<Option<EnvironmentReading>, Infallible> {
        self.reads += 1;
        if self.reads % 5 == 0 {
            return Ok(None);
        }
        self.temperature_c += self.step;
        Ok(Some(EnvironmentReading::new(self.temperature_c, 42.0)))
    }
}

/// Prints each frame to stdout
#[derive(Default)]
struct ConsoleDisplay {
    lines: Vec<String>,
}

impl DisplaySink for ConsoleDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.lines.clear();
        Ok(())
    }

    fn text(&mut self, line: &str, _x: i32, _y: i32) -> Result<(), Infallible> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        println!("┌──────────────────────┐");
        for line in &self.lines {
            println!("│ {:<20} │", line);
        }
        println!("└──────────────────────┘");
        Ok(())
    }
}

/// Prints buzzer state changes
#[derive(Default)]
struct ConsoleBuzzer {
    sounding: bool,
}

impl AlarmActuator for ConsoleBuzzer {
    type Error = Infallible;

    fn on(&mut self) -> Result<(), Infallible> {
        if !self.sounding {
            println!("*** BUZZER ON ***");
        }
        self.sounding = true;
        Ok(())
    }

    fn off(&mut self) -> Result<(), Infallible> {
        if self.sounding {
            println!("buzzer off");
        }
        self.sounding = false;
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("PulseGuard Simulated Monitor");
    println!("============================\n");

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    if let Err(e) = ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst)) {
        eprintln!("could not install Ctrl-C handler: {}", e);
        return;
    }

    // a peak every 40 reads at 10 ms is about 150 BPM, well above the alert level
    let pulse = SyntheticPulse { tick: 0, period: 40 };
    let environment = WarmingRoom { temperature_c: 36.8, step: 0.2, reads: 0 };

    let config = MonitorConfig::default()
        .with_cycle_idle_period(Duration::from_millis(500))
        .with_retry(RetryPolicy::new(3, Duration::from_millis(200)));

    let mut monitor = match Monitor::new(
        pulse,
        environment,
        ConsoleDisplay::default(),
        ConsoleBuzzer::default(),
        StdDelay,
        config,
    ) {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        }
    };

    println!("Press Ctrl-C to stop.\n");

    match monitor.run(&*stop) {
        Ok(summary) => {
            println!("\nStopped after {} cycles", summary.cycles);
            println!("  alerts:  {}", summary.alerts);
            println!("  skipped: {}", summary.skipped);
            println!("  failed:  {}", summary.failed);
        }
        Err(e) => eprintln!("monitor stopped on error: {}", e),
    }
}
