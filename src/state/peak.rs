//! Peak marker with a timed hold.
//!
//! A recorded peak stays visible for the hold duration, then the marker hides
//! itself. The value is kept so a host can still read the last peak.

use core::time::Duration;

use crate::config::PEAK_HOLD;

/// Peak value plus a countdown that controls marker visibility.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PeakHold {
    value: f64,
    visible: bool,
    hold: Duration,
    /// Time left before the marker hides. Zero means no countdown running.
    remaining: Duration,
}

impl PeakHold {
    pub const fn new(initial: f64) -> Self {
        Self {
            value: initial,
            visible: false,
            hold: PEAK_HOLD,
            remaining: Duration::ZERO,
        }
    }

    /// Change how long future peaks stay visible.
    pub const fn set_hold(
        &mut self,
        hold: Duration,
    ) {
        self.hold = hold;
    }

    /// Record a new peak, show the marker and restart the hold countdown.
    pub const fn record(
        &mut self,
        value: f64,
    ) {
        self.value = value;
        self.visible = true;
        self.remaining = self.hold;
    }

    /// Set the peak value without touching visibility or the countdown.
    #[inline]
    pub const fn set_value(
        &mut self,
        value: f64,
    ) {
        self.value = value;
    }

    /// Show or hide the marker. Hiding cancels a running countdown.
    pub const fn set_visible(
        &mut self,
        visible: bool,
    ) {
        self.visible = visible;
        if !visible {
            self.remaining = Duration::ZERO;
        }
    }

    /// Advance the hold countdown.
    ///
    /// Returns `true` if the marker was hidden by this tick.
    pub fn tick(
        &mut self,
        delta: Duration,
    ) -> bool {
        if self.remaining.is_zero() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    #[inline]
    pub const fn value(&self) -> f64 { self.value }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.visible }

    /// Whether a hold countdown is running.
    #[inline]
    pub const fn is_holding(&self) -> bool { !self.remaining.is_zero() }
}
