//! Threshold evaluation and the threshold LED.
//!
//! A gauge's threshold is exceeded when `value >= threshold`, or
//! `value <= threshold` when the behaviour is inverted. The same rule drives
//! the LCD threshold indicator.
//!
//! # LED Behaviour
//!
//! | Auto-return-to-zero | Exceeded | LED |
//! |---------------------|----------|-----|
//! | off | yes | Blinking |
//! | off | no | Off |
//! | on | any | Off |
//!
//! The LED is suppressed in auto-return-to-zero mode because every animated
//! value change sweeps through the threshold on its way back to zero.

use core::time::Duration;

use crate::blink::BlinkScheduler;
use crate::config::BLINK_INTERVAL;
use crate::state::GaugeState;

/// Check `value` against `threshold`.
#[inline]
pub fn is_beyond_threshold(
    value: f64,
    threshold: f64,
    inverted: bool,
) -> bool {
    if inverted { value <= threshold } else { value >= threshold }
}

/// Threshold state change reported by [`ThresholdMonitor::evaluate`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThresholdEvent {
    /// The value moved past the threshold; the LED started blinking.
    Crossed,
    /// The value moved back; the LED is off.
    Cleared,
}

/// Watches a gauge's threshold and drives its LED blinker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThresholdMonitor {
    led: BlinkScheduler,
    exceeded: bool,
}

impl ThresholdMonitor {
    pub const fn new(blink_interval: Duration) -> Self {
        Self {
            led: BlinkScheduler::new(blink_interval),
            exceeded: false,
        }
    }

    /// Re-evaluate after a value write. Each crossing is reported once.
    pub fn evaluate(
        &mut self,
        state: &GaugeState,
    ) -> Option<ThresholdEvent> {
        let active = !state.is_auto_reset_to_zero() && state.is_threshold_exceeded();

        match (active, self.exceeded) {
            (true, false) => {
                self.exceeded = true;
                self.led.start();
                Some(ThresholdEvent::Crossed)
            }
            (false, true) => {
                self.exceeded = false;
                self.led.stop();
                Some(ThresholdEvent::Cleared)
            }
            _ => None,
        }
    }

    /// Advance the LED blinker. Returns `true` if the LED changed.
    #[inline]
    pub fn tick(
        &mut self,
        delta: Duration,
    ) -> bool {
        self.led.tick(delta)
    }

    /// Whether the threshold is currently exceeded (LED active).
    #[inline]
    pub const fn is_exceeded(&self) -> bool { self.exceeded }

    /// Whether the LED is lit this frame.
    #[inline]
    pub const fn is_led_on(&self) -> bool { self.exceeded && self.led.is_visible() }
}

impl Default for ThresholdMonitor {
    fn default() -> Self { Self::new(BLINK_INTERVAL) }
}
