//! Display frames
//!
//! A [`Frame`] is the complete set of text lines for one cycle. It is built
//! in memory first and only then pushed to the [`DisplaySink`], so the
//! panel either shows a whole cycle or keeps showing the previous one.
//!
//! ```text
//! ┌────────────────────────┐  y
//! │Temp: 38.2C             │  0
//! │Hum:  41.0%             │  10
//! │Heart: 96 BPM           │  20
//! │                        │
//! │! ALERT !               │  40   (only while alerting)
//! └────────────────────────┘
//! ```

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::constants::display::{
    ALERT_LINE_Y, HEART_RATE_LINE_Y, HUMIDITY_LINE_Y, LINE_X, TEMPERATURE_LINE_Y,
};
use crate::constants::{MAX_FRAME_LINES, MAX_LINE_BYTES};
use crate::errors::{device_failure, Device, MonitorResult};
use crate::sample::{BeatRate, EnvironmentReading};
use crate::traits::DisplaySink;

/// Text shown while alerting. Plain ASCII: the stock 5×8 display font has
/// no warning glyph.
pub const ALERT_TEXT: &str = "! ALERT !";

/// Text shown when no environment reading could be obtained
pub const SENSOR_UNAVAILABLE_TEXT: &str = "Sensor unavailable";

/// One positioned line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    text: String<MAX_LINE_BYTES>,
    x: i32,
    y: i32,
}

impl TextLine {
    /// Format a line at `(x, y)`; pieces that would overflow
    /// [`MAX_LINE_BYTES`] are dropped
    pub fn new(args: fmt::Arguments<'_>, x: i32, y: i32) -> Self {
        let mut text = String::new();
        let _ = text.write_fmt(args);
        Self { text, x, y }
    }

    /// Line text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Left edge (px)
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Top edge (px)
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Everything drawn in one cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<TextLine, MAX_FRAME_LINES>,
}

impl Frame {
    /// Lay out a cycle's readings; the alert line is added only when `alert`
    pub fn render(reading: &EnvironmentReading, rate: BeatRate, alert: bool) -> Self {
        let mut frame = Frame::default();
        frame.add(TextLine::new(
            format_args!("Temp: {:.1}C", reading.temperature_c),
            LINE_X,
            TEMPERATURE_LINE_Y,
        ));
        frame.add(TextLine::new(
            format_args!("Hum:  {:.1}%", reading.humidity_pct),
            LINE_X,
            HUMIDITY_LINE_Y,
        ));
        frame.add(TextLine::new(
            format_args!("Heart: {} BPM", rate),
            LINE_X,
            HEART_RATE_LINE_Y,
        ));
        if alert {
            frame.add(TextLine::new(format_args!("{}", ALERT_TEXT), LINE_X, ALERT_LINE_Y));
        }
        frame
    }

    /// Frame replacing the readings when the environment sensor gave up,
    /// so values from an earlier cycle are not left on screen
    pub fn sensor_unavailable() -> Self {
        let mut frame = Frame::default();
        frame.add(TextLine::new(
            format_args!("{}", SENSOR_UNAVAILABLE_TEXT),
            LINE_X,
            TEMPERATURE_LINE_Y,
        ));
        frame
    }

    fn add(&mut self, line: TextLine) {
        // render() never builds more than MAX_FRAME_LINES lines
        let _ = self.lines.push(line);
    }

    /// Lines in drawing order
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Whether the alert line is present
    pub fn has_alert(&self) -> bool {
        self.lines.iter().any(|line| line.text() == ALERT_TEXT)
    }

    /// Clear the sink, draw every line, then flush
    pub fn present<D: DisplaySink>(&self, sink: &mut D) -> MonitorResult<()> {
        sink.clear().map_err(|e| device_failure(Device::Display, e))?;
        for line in &self.lines {
            sink.text(line.text(), line.x(), line.y())
                .map_err(|e| device_failure(Device::Display, e))?;
        }
        sink.flush().map_err(|e| device_failure(Device::Display, e))
    }
}
