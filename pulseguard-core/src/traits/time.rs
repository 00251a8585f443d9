//! Blocking Delay Abstraction
//!
//! The monitor is fully synchronous: sampling pauses between reads and the
//! loop idles between cycles by blocking the calling thread. `Delay` hides
//! where that pause comes from.
//!
//! ## Common Implementations
//!
//! - `StdDelay`: `std::thread::sleep` on hosted boards (Raspberry Pi)
//! - A HAL timer on bare metal
//! - A recording mock in tests, so a 2 s idle period costs nothing

use core::time::Duration;

/// Blocking delay provider
///
/// ## Implementation Requirements
///
/// - Must block for at least `duration`
/// - A zero duration returns immediately
///
/// ## Example Implementation
///
/// ```rust
/// use core::time::Duration;
/// use pulseguard_core::traits::Delay;
///
/// /// Accumulates requested time instead of sleeping.
/// #[derive(Default)]
/// struct Virtual {
///     elapsed: Duration,
/// }
///
/// impl Delay for Virtual {
///     fn delay(&mut self, duration: Duration) {
///         self.elapsed += duration;
///     }
/// }
///
/// let mut clock = Virtual::default();
/// clock.delay(Duration::from_millis(10));
/// clock.delay(Duration::from_millis(10));
/// assert_eq!(clock.elapsed, Duration::from_millis(20));
/// ```
pub trait Delay {
    /// Block the calling thread for `duration`
    fn delay(&mut self, duration: Duration);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay(&mut self, duration: Duration) {
        T::delay(self, duration)
    }
}

/// Thread-sleep delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
