//! Numeric state of one gauge.
//!
//! Owns the current value, range, peak, measured extrema and threshold, and
//! keeps them consistent with each other:
//!
//! - The value always lies inside the (nice) range. Starting-from-zero only
//!   changes where a value bar begins, never which values are accepted.
//! - Threshold, peak and measured extrema are pulled back into range whenever
//!   the range changes.
//! - Auto-return-to-zero is only possible when the range contains zero.
//!
//! Range configuration is the only fallible operation. Out-of-range values are
//! clamped, never rejected.

use super::peak::PeakHold;
use super::scale::Scale;
use crate::config::GaugeConfig;
use crate::error::GaugeError;
use crate::mapping::{CoordinateMapper, Orientation, ScaleMode, ValueRange};
use crate::thresholds::is_beyond_threshold;

/// Outcome of a successful range change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RangeUpdate {
    /// Bounds applied as given.
    Applied,
    /// Bounds were inverted and have been swapped.
    Swapped,
}

/// Value, range and derived markers of a gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeState {
    range: ValueRange,
    scale: Scale,
    value: f64,
    old_value: f64,
    peak: PeakHold,
    min_measured: f64,
    max_measured: f64,
    /// Set by the first value write; extrema start from that value.
    measured_initialized: bool,
    threshold: f64,
    threshold_inverted: bool,
    scale_mode: ScaleMode,
    orientation: Orientation,
    starting_from_zero: bool,
    auto_reset_to_zero: bool,
    redraw_tolerance: f64,
}

/// Reject equal or non-finite bounds; swap inverted ones.
fn normalize_range(
    min: f64,
    max: f64,
) -> Result<(ValueRange, RangeUpdate), GaugeError> {
    if !min.is_finite() || !max.is_finite() || min == max {
        return Err(GaugeError::InvalidRange { min, max });
    }
    if min > max {
        Ok((ValueRange::new(max, min), RangeUpdate::Swapped))
    } else {
        Ok((ValueRange::new(min, max), RangeUpdate::Applied))
    }
}

impl GaugeState {
    /// Create a state over `[min, max]` (swapped if inverted).
    ///
    /// The value and peak start at the minimum, the threshold in the middle of
    /// the range.
    pub fn new(
        min: f64,
        max: f64,
    ) -> Result<Self, GaugeError> {
        let (range, _) = normalize_range(min, max)?;
        let mut scale = Scale::new(false, 10, 10);
        scale.calculate(range);

        Ok(Self {
            range,
            scale,
            value: range.min,
            old_value: range.min,
            peak: PeakHold::new(range.min),
            min_measured: range.min,
            max_measured: range.min,
            measured_initialized: false,
            threshold: range.min + range.extent() / 2.0,
            threshold_inverted: false,
            scale_mode: ScaleMode::Linear,
            orientation: Orientation::Radial,
            starting_from_zero: false,
            auto_reset_to_zero: false,
            redraw_tolerance: 0.0,
        })
    }

    /// Create a state from a gauge configuration.
    pub fn from_config(config: &GaugeConfig) -> Result<Self, GaugeError> {
        let mut state = Self::new(config.min, config.max)?;
        state.scale = Scale::new(config.nice_scale, config.max_major_ticks, config.max_minor_ticks);
        state.scale_mode = config.scale_mode;
        state.orientation = config.orientation;
        state.starting_from_zero = config.starting_from_zero;
        state.auto_reset_to_zero = config.auto_reset_to_zero;
        state.threshold_inverted = config.threshold_inverted;
        state.peak.set_hold(config.animation.peak_hold);
        state.set_redraw_tolerance(config.redraw_tolerance);
        state.validate();

        // Threshold defaults to the middle of the (possibly nice) range
        let display = state.display_range();
        let threshold = config.threshold.unwrap_or(display.min + display.extent() / 2.0);
        state.set_threshold(threshold);

        let initial = state.value;
        state.value = state.normalize(initial);
        state.old_value = state.value;
        state.peak.set_value(state.value);
        Ok(state)
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Store a new value and return what was stored.
    ///
    /// The value is clamped into the clamp range; on a log scale non-positive
    /// values are stored as `1.0` first. Measured extrema follow the stored
    /// value.
    pub fn set_value(
        &mut self,
        value: f64,
    ) -> f64 {
        let stored = self.normalize(value);
        self.old_value = self.value;
        self.value = stored;

        if self.measured_initialized {
            self.min_measured = self.min_measured.min(stored);
            self.max_measured = self.max_measured.max(stored);
        } else {
            self.min_measured = stored;
            self.max_measured = stored;
            self.measured_initialized = true;
        }
        stored
    }

    /// Clamp a value the way [`set_value`](Self::set_value) would, without
    /// storing it.
    pub fn normalize(
        &self,
        value: f64,
    ) -> f64 {
        let value = if self.scale_mode == ScaleMode::Logarithmic && value <= 0.0 { 1.0 } else { value };
        self.clamp_range().clamp(value)
    }

    #[inline]
    pub const fn value(&self) -> f64 { self.value }

    /// Value before the last write.
    #[inline]
    pub const fn old_value(&self) -> f64 { self.old_value }

    // =========================================================================
    // Range
    // =========================================================================

    /// Replace both bounds.
    ///
    /// Equal or non-finite bounds are rejected and leave the state untouched.
    /// Inverted bounds are swapped.
    pub fn set_range(
        &mut self,
        min: f64,
        max: f64,
    ) -> Result<RangeUpdate, GaugeError> {
        let (range, update) = normalize_range(min, max)?;
        self.range = range;
        self.validate();
        Ok(update)
    }

    /// Replace the minimum, keeping the current maximum.
    pub fn set_min_value(
        &mut self,
        min: f64,
    ) -> Result<RangeUpdate, GaugeError> {
        self.set_range(min, self.range.max)
    }

    /// Replace the maximum, keeping the current minimum.
    pub fn set_max_value(
        &mut self,
        max: f64,
    ) -> Result<RangeUpdate, GaugeError> {
        self.set_range(self.range.min, max)
    }

    /// Configured range.
    #[inline]
    pub const fn range(&self) -> ValueRange { self.range }

    #[inline]
    pub const fn min_value(&self) -> f64 { self.range.min }

    #[inline]
    pub const fn max_value(&self) -> f64 { self.range.max }

    /// Range shown on the scale: the configured range, rounded outward when
    /// nice scaling is on.
    #[inline]
    pub const fn display_range(&self) -> ValueRange { self.scale.range() }

    /// Range values are clamped to.
    #[inline]
    pub const fn clamp_range(&self) -> ValueRange { self.scale.range() }

    /// Mapper over the displayed range.
    #[inline]
    pub const fn mapper(&self) -> CoordinateMapper { CoordinateMapper::new(self.scale.range()) }

    #[inline]
    pub const fn scale(&self) -> &Scale { &self.scale }

    /// Bring every derived value back in line with the range.
    pub fn validate(&mut self) {
        self.scale.calculate(self.range);
        let display = self.scale.range();

        if self.auto_reset_to_zero && !display.contains(0.0) {
            self.auto_reset_to_zero = false;
        }
        if !display.contains(self.threshold) {
            self.threshold = display.max;
        }

        self.value = self.normalize(self.value);
        self.old_value = self.normalize(self.old_value);

        let clamp = self.clamp_range();
        if !clamp.contains(self.min_measured) {
            self.min_measured = self.value;
        }
        if !clamp.contains(self.max_measured) {
            self.max_measured = self.value;
        }
        if !clamp.contains(self.peak.value()) {
            self.peak.set_value(self.value);
        }
    }

    // =========================================================================
    // Peak and Measured Extrema
    // =========================================================================

    #[inline]
    pub const fn peak(&self) -> &PeakHold { &self.peak }

    #[inline]
    pub const fn peak_mut(&mut self) -> &mut PeakHold { &mut self.peak }

    #[inline]
    pub const fn peak_value(&self) -> f64 { self.peak.value() }

    #[inline]
    pub const fn is_peak_visible(&self) -> bool { self.peak.is_visible() }

    /// Set the peak value, clamped into range.
    pub fn set_peak_value(
        &mut self,
        value: f64,
    ) {
        let clamped = self.clamp_range().clamp(value);
        self.peak.set_value(clamped);
    }

    pub const fn set_peak_visible(
        &mut self,
        visible: bool,
    ) {
        self.peak.set_visible(visible);
    }

    /// Record the current value as a held peak.
    pub const fn record_peak(&mut self) { self.peak.record(self.value); }

    #[inline]
    pub const fn min_measured_value(&self) -> f64 { self.min_measured }

    #[inline]
    pub const fn max_measured_value(&self) -> f64 { self.max_measured }

    pub const fn reset_min_measured_value(&mut self) { self.min_measured = self.value; }

    pub const fn reset_max_measured_value(&mut self) { self.max_measured = self.value; }

    pub fn reset_min_measured_value_to(
        &mut self,
        value: f64,
    ) {
        self.min_measured = self.clamp_range().clamp(value);
    }

    pub fn reset_max_measured_value_to(
        &mut self,
        value: f64,
    ) {
        self.max_measured = self.clamp_range().clamp(value);
    }

    // =========================================================================
    // Threshold
    // =========================================================================

    #[inline]
    pub const fn threshold(&self) -> f64 { self.threshold }

    /// Set the threshold, clamped into the displayed range.
    pub fn set_threshold(
        &mut self,
        threshold: f64,
    ) {
        self.threshold = self.scale.range().clamp(threshold);
    }

    #[inline]
    pub const fn is_threshold_inverted(&self) -> bool { self.threshold_inverted }

    pub const fn set_threshold_inverted(
        &mut self,
        inverted: bool,
    ) {
        self.threshold_inverted = inverted;
    }

    /// `value >= threshold`, or `value <= threshold` when inverted.
    pub fn is_threshold_exceeded(&self) -> bool {
        is_beyond_threshold(self.value, self.threshold, self.threshold_inverted)
    }

    // =========================================================================
    // Modes
    // =========================================================================

    #[inline]
    pub const fn scale_mode(&self) -> ScaleMode { self.scale_mode }

    /// Switch scale mode. Switching to log lifts a non-positive value to `1.0`.
    pub fn set_scale_mode(
        &mut self,
        scale_mode: ScaleMode,
    ) {
        self.scale_mode = scale_mode;
        self.value = self.normalize(self.value);
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation { self.orientation }

    pub const fn set_orientation(
        &mut self,
        orientation: Orientation,
    ) {
        self.orientation = orientation;
    }

    #[inline]
    pub const fn is_starting_from_zero(&self) -> bool { self.starting_from_zero }

    pub fn set_starting_from_zero(
        &mut self,
        enabled: bool,
    ) {
        self.starting_from_zero = enabled;
        self.validate();
    }

    #[inline]
    pub const fn is_auto_reset_to_zero(&self) -> bool { self.auto_reset_to_zero }

    /// Enable or disable auto-return-to-zero.
    ///
    /// Enabling is refused when the range does not contain zero. Returns the
    /// resulting setting.
    pub fn set_auto_reset_to_zero(
        &mut self,
        enabled: bool,
    ) -> bool {
        self.auto_reset_to_zero = enabled && self.scale.range().contains(0.0);
        self.auto_reset_to_zero
    }

    #[inline]
    pub const fn is_nice_scale(&self) -> bool { self.scale.is_enabled() }

    pub fn set_nice_scale(
        &mut self,
        enabled: bool,
    ) {
        self.scale.set_enabled(enabled);
        self.validate();
    }

    // =========================================================================
    // Redraw Tolerance
    // =========================================================================

    #[inline]
    pub const fn redraw_tolerance(&self) -> f64 { self.redraw_tolerance }

    /// Set the redraw tolerance as a fraction of the range, clamped to `[0, 1]`.
    pub fn set_redraw_tolerance(
        &mut self,
        tolerance: f64,
    ) {
        self.redraw_tolerance = tolerance.max(0.0).min(1.0);
    }

    /// Smallest value movement that warrants a redraw.
    pub fn redraw_threshold(&self) -> f64 { self.redraw_tolerance * self.scale.range().extent() }
}
