//! Pulse waveform generators
//!
//! Synthetic pulse-sensor traces with a known number of beats, so tests can
//! predict the estimator's output exactly.

/// `[low, high, low, high, ...]`, `pairs` times
pub fn square_wave(pairs: usize, low: u16, high: u16) -> Vec<u16> {
    (0..pairs).flat_map(|_| [low, high]).collect()
}

/// Flat baseline with a single-sample peak every `period` samples.
///
/// Peaks sit mid-period, so a `len`-sample window holds
/// `len / period` beats when `len` is a multiple of `period`.
pub fn pulse_train(len: usize, period: usize, baseline: u16, peak: u16) -> Vec<u16> {
    (0..len)
        .map(|i| if i % period == period / 2 { peak } else { baseline })
        .collect()
}

/// Three beats in a 150-sample window: 120 BPM at 10 ms per sample
pub fn fast_pulse() -> Vec<u16> {
    pulse_train(150, 50, 500, 900)
}

/// Two beats in a 150-sample window: 80 BPM at 10 ms per sample
pub fn resting_pulse() -> Vec<u16> {
    pulse_train(150, 75, 500, 900)
}
