//! Periodic visibility toggle.
//!
//! Drives blinking LCD text and the threshold LED. The scheduler only flips a
//! flag; the renderer decides what visible/hidden means for its element.
//!
//! Time comes from `tick(delta)`. A delta that spans several intervals toggles
//! once per interval, so a slow frame lands on the same phase a fast one would.

use core::time::Duration;

use crate::config::BLINK_INTERVAL;

/// Visibility flag toggled every `interval` while running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlinkScheduler {
    interval: Duration,
    /// Time since the last toggle.
    elapsed: Duration,
    visible: bool,
    running: bool,
}

impl BlinkScheduler {
    /// Create a stopped scheduler. A zero interval never toggles.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            visible: true,
            running: false,
        }
    }

    /// Start toggling. Starting a running scheduler keeps its phase.
    pub const fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Stop toggling and make the element visible again.
    pub const fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
        self.visible = true;
    }

    /// Start or stop depending on `enabled`.
    pub const fn set_running(
        &mut self,
        enabled: bool,
    ) {
        if enabled {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Advance by `delta`. Returns `true` if visibility changed.
    pub fn tick(
        &mut self,
        delta: Duration,
    ) -> bool {
        if !self.running || self.interval.is_zero() {
            return false;
        }
        let interval_ns = self.interval.as_nanos();
        let total_ns = self.elapsed.as_nanos() + delta.as_nanos();
        let toggles = total_ns / interval_ns;
        self.elapsed = Duration::from_nanos((total_ns % interval_ns) as u64);

        let changed = toggles % 2 == 1;
        if changed {
            self.visible = !self.visible;
        }
        changed
    }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    #[inline]
    pub const fn is_running(&self) -> bool { self.running }

    #[inline]
    pub const fn interval(&self) -> Duration { self.interval }

    /// Change the toggle interval. The current phase restarts.
    pub const fn set_interval(
        &mut self,
        interval: Duration,
    ) {
        self.interval = interval;
        self.elapsed = Duration::ZERO;
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self { Self::new(BLINK_INTERVAL) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn test_stopped_scheduler_stays_visible() {
        let mut blink = BlinkScheduler::default();
        assert!(!blink.tick(ms(2000)));
        assert!(blink.is_visible());
        assert!(!blink.is_running());
    }

    #[test]
    fn test_toggles_once_per_interval() {
        let mut blink = BlinkScheduler::default();
        blink.start();
        assert!(!blink.tick(ms(499)));
        assert!(blink.is_visible());
        assert!(blink.tick(ms(1)));
        assert!(!blink.is_visible());
        assert!(blink.tick(ms(500)));
        assert!(blink.is_visible());
    }

    #[test]
    fn test_large_delta_toggles_per_elapsed_interval() {
        let mut blink = BlinkScheduler::default();
        blink.start();
        // Three intervals: hidden, visible, hidden
        assert!(blink.tick(ms(1500)));
        assert!(!blink.is_visible());
        // Two more intervals plus remainder: net unchanged
        assert!(!blink.tick(ms(1200)));
        assert!(!blink.is_visible());
        // Remainder of 200 ms carries over
        assert!(blink.tick(ms(300)));
        assert!(blink.is_visible());
    }

    #[test]
    fn test_stop_restores_visibility() {
        let mut blink = BlinkScheduler::default();
        blink.start();
        blink.tick(ms(500));
        assert!(!blink.is_visible());
        blink.stop();
        assert!(blink.is_visible());
        assert!(!blink.is_running());
    }

    #[test]
    fn test_restart_keeps_phase() {
        let mut blink = BlinkScheduler::default();
        blink.start();
        blink.tick(ms(400));
        blink.start();
        assert!(blink.tick(ms(100)));
    }

    #[test]
    fn test_zero_interval_never_toggles() {
        let mut blink = BlinkScheduler::new(Duration::ZERO);
        blink.start();
        assert!(!blink.tick(ms(1000)));
        assert!(blink.is_visible());
    }
}
