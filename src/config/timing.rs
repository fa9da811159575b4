//! Animation and timer defaults.
//!
//! All durations are compile-time constants with ordering assertions, so a bad
//! edit (e.g. a default outside the allowed time-to-value window) fails the
//! build instead of producing a gauge that snaps or crawls.

use core::time::Duration;

// =============================================================================
// Time-to-Value Window
// =============================================================================

/// Shortest allowed time for the pointer/bar to travel to a new value.
pub const MIN_TIME_TO_VALUE: Duration = Duration::from_millis(250);

/// Longest allowed time for the pointer/bar to travel to a new value.
pub const MAX_TIME_TO_VALUE: Duration = Duration::from_millis(5000);

// =============================================================================
// Animation Defaults
// =============================================================================

/// Duration of a standard animated value change.
pub const STD_TIME_TO_VALUE: Duration = Duration::from_millis(800);

/// Duration of the rise phase in auto-return-to-zero mode.
pub const RTZ_TIME_TO_VALUE: Duration = Duration::from_millis(800);

/// Duration of the fall back to zero in auto-return-to-zero mode.
pub const RTZ_TIME_BACK_TO_ZERO: Duration = Duration::from_millis(1200);

/// Pause between the end of the rise and the start of the return.
/// Zero means the return starts on the same tick the rise completes.
pub const RTZ_RETURN_DELAY: Duration = Duration::ZERO;

/// How long the peak marker stays visible after a new peak is recorded.
pub const PEAK_HOLD: Duration = Duration::from_millis(1000);

/// Duration of an animated LCD value change.
pub const LCD_TIME_TO_VALUE: Duration = Duration::from_millis(2000);

// =============================================================================
// Blink Timers
// =============================================================================

/// Toggle interval for LCD text blinking and the threshold LED.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

// Compile-time validation: defaults must sit inside the allowed window
const _: () = assert!(MIN_TIME_TO_VALUE.as_millis() < MAX_TIME_TO_VALUE.as_millis());
const _: () = assert!(STD_TIME_TO_VALUE.as_millis() >= MIN_TIME_TO_VALUE.as_millis());
const _: () = assert!(STD_TIME_TO_VALUE.as_millis() <= MAX_TIME_TO_VALUE.as_millis());
const _: () = assert!(RTZ_TIME_TO_VALUE.as_millis() >= MIN_TIME_TO_VALUE.as_millis());
const _: () = assert!(RTZ_TIME_TO_VALUE.as_millis() <= MAX_TIME_TO_VALUE.as_millis());
const _: () = assert!(RTZ_TIME_BACK_TO_ZERO.as_millis() >= MIN_TIME_TO_VALUE.as_millis());
const _: () = assert!(RTZ_TIME_BACK_TO_ZERO.as_millis() <= MAX_TIME_TO_VALUE.as_millis());
const _: () = assert!(BLINK_INTERVAL.as_millis() > 0);

/// Clamp a requested time-to-value into `[MIN_TIME_TO_VALUE, MAX_TIME_TO_VALUE]`.
#[inline]
pub const fn clamp_time_to_value(requested: Duration) -> Duration {
    if requested.as_millis() < MIN_TIME_TO_VALUE.as_millis() {
        MIN_TIME_TO_VALUE
    } else if requested.as_millis() > MAX_TIME_TO_VALUE.as_millis() {
        MAX_TIME_TO_VALUE
    } else {
        requested
    }
}
