//! Buffer Sizes and Memory Constraints
//!
//! All storage in the core is inline (`heapless`), so capacities are fixed
//! at compile time.

/// Maximum samples in one window.
///
/// 512 × 2 bytes = 1 KB of stack during sampling. Allows windows a little
/// over 5 s at the default 100 Hz.
pub const MAX_WINDOW_LEN: usize = 512;

/// Maximum text lines in one display frame.
///
/// Temperature, humidity, heart rate and the alert line.
pub const MAX_FRAME_LINES: usize = 4;

/// Maximum bytes in one display line.
///
/// A 128 px wide display with a 6 px font fits 21 characters; the extra
/// room covers multi-byte glyphs.
pub const MAX_LINE_BYTES: usize = 32;
