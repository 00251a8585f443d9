//! Display Geometry
//!
//! Line placement for a 128×64 monochrome display with an 8 px font.
//! Coordinates are in pixels from the top-left corner.

/// Display width (px).
pub const DISPLAY_WIDTH_PX: u32 = 128;

/// Display height (px).
pub const DISPLAY_HEIGHT_PX: u32 = 64;

/// Left edge of every line.
pub const LINE_X: i32 = 0;

/// Row of the temperature line.
pub const TEMPERATURE_LINE_Y: i32 = 0;

/// Row of the humidity line.
pub const HUMIDITY_LINE_Y: i32 = 10;

/// Row of the heart-rate line.
pub const HEART_RATE_LINE_Y: i32 = 20;

/// Row of the alert line. Leaves a blank row above it.
pub const ALERT_LINE_Y: i32 = 40;
