//! Per-widget gauge facade.
//!
//! [`Gauge`] wires the engine parts together for one widget instance and is
//! the only type a host UI needs to talk to:
//!
//! - Input: [`set_value`](Gauge::set_value),
//!   [`set_value_animated`](Gauge::set_value_animated) and
//!   [`tick`](Gauge::tick) once per frame.
//! - Output: coordinates, LCD text, peak and LED flags, and a render request
//!   mask telling the host which parts to repaint.
//!
//! # Tick Order
//!
//! Fixed for every frame:
//!
//! 1. Value animation (writes the value, updates measured extrema)
//! 2. Peak hold countdown
//! 3. LCD value animation and LCD text blinker
//! 4. Threshold LED blinker
//!
//! # Paint Path
//!
//! Coordinate accessors take `&self` and never fail. A degenerate or
//! non-finite mapping is reported as the sentinel `0.0`; use
//! [`try_coordinate`](Gauge::try_coordinate) to see the error instead. Whether
//! the current value maps is checked whenever the value or the configuration
//! changes, and a failure is logged once as a warning at that point.

use core::time::Duration;

use embedded_graphics::geometry::Angle;

use crate::animations::{AnimationEngine, Easing, TickReport};
use crate::config::GaugeConfig;
use crate::error::GaugeError;
use crate::lcd::{LcdDisplayState, LcdText, NumberSystem};
use crate::log_buffer::{EventLog, LogLevel};
use crate::mapping::{Orientation, ScaleMode, Span, to_angle};
use crate::render::{RenderRegions, RenderState, region};
use crate::state::{GaugeState, RangeUpdate};
use crate::thresholds::{ThresholdEvent, ThresholdMonitor};

/// Coordinate reported when a value cannot be mapped.
pub const COORDINATE_SENTINEL: f64 = 0.0;

/// One gauge widget's engine.
#[derive(Clone, Debug)]
pub struct Gauge {
    config: GaugeConfig,
    state: GaugeState,
    engine: AnimationEngine,
    lcd: LcdDisplayState,
    threshold: ThresholdMonitor,
    render: RenderState,
    log: EventLog,
    /// Sum of all tick deltas; timestamps log entries.
    clock: Duration,
    /// The current value could not be mapped at the last check.
    mapping_fault: bool,
}

impl Gauge {
    /// Build a gauge from its configuration.
    ///
    /// Fails only when the configured range is invalid.
    pub fn new(config: GaugeConfig) -> Result<Self, GaugeError> {
        let state = GaugeState::from_config(&config)?;

        let mut lcd = LcdDisplayState::new(&config.lcd);
        lcd.set_log_scale(state.scale_mode() == ScaleMode::Logarithmic);
        if lcd.is_value_coupled() {
            lcd.set_value(state.value());
        }

        let mut log = EventLog::new();
        log.set_enabled(config.log_events);

        let mut gauge = Self {
            config,
            state,
            engine: AnimationEngine::new(config.animation),
            lcd,
            threshold: ThresholdMonitor::new(config.lcd.blink_interval),
            render: RenderState::new(state.value()),
            log,
            clock: Duration::ZERO,
            mapping_fault: false,
        };

        let (min, max) = (gauge.state.min_value(), gauge.state.max_value());
        gauge.record(LogLevel::Info, format_args!("gauge ready {min}..{max}"));
        gauge.evaluate_threshold();
        gauge.check_mapping();
        Ok(gauge)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Set the value immediately, cancelling any running animation.
    ///
    /// Returns the stored (clamped) value.
    pub fn set_value(
        &mut self,
        value: f64,
    ) -> f64 {
        self.engine.abort();
        let stored = self.state.set_value(value);
        self.after_value_write();
        stored
    }

    /// Animate to `target`.
    ///
    /// `None` picks the configured duration and easing. An explicit duration is
    /// used as given; only the configured defaults are clamped to the
    /// time-to-value limits. In auto-return-to-zero
    /// mode the value rises with the configured rise timing, records the peak
    /// and falls back to zero; `duration` and `easing` are ignored there.
    /// Returns the clamped target.
    pub fn set_value_animated(
        &mut self,
        target: f64,
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) -> f64 {
        if self.state.is_auto_reset_to_zero() {
            let target = self.engine.play_return_to_zero(&self.state, target);
            self.record(LogLevel::Trace, format_args!("rise to {target}, return to zero"));
            target
        } else {
            let target = self.engine.play(&self.state, target, duration, easing);
            self.record(LogLevel::Trace, format_args!("animate to {target}"));
            target
        }
    }

    /// Advance animations and blinkers by `delta`.
    pub fn tick(
        &mut self,
        delta: Duration,
    ) -> TickReport {
        self.clock = self.clock.saturating_add(delta);

        // 1-2. Value animation and peak hold
        let report = self.engine.tick(&mut self.state, delta);
        if report.value_changed {
            self.after_value_write();
        }
        if report.peak_recorded {
            let peak = self.state.peak_value();
            self.render.mark(region::PEAK);
            self.record(LogLevel::Debug, format_args!("peak {peak}"));
        }
        if report.peak_hidden {
            self.render.mark(region::PEAK);
        }

        // 3. LCD
        let lcd = self.lcd.tick(delta);
        if lcd.value_changed || lcd.visibility_changed {
            self.render.mark(region::LCD);
        }

        // 4. Threshold LED
        if self.threshold.tick(delta) {
            self.render.mark(region::LED);
        }

        report
    }

    /// Stop a running animation where it is.
    pub fn abort_animation(&mut self) { self.engine.abort(); }

    /// Play the running animation back toward its start.
    pub fn play_reverse(&mut self) -> bool { self.engine.play_reverse() }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.engine.is_animating() }

    fn after_value_write(&mut self) {
        let value = self.state.value();
        self.render.mark_value(value, self.state.redraw_threshold());

        if self.lcd.is_value_coupled() {
            if self.lcd.set_value(value) {
                self.record(LogLevel::Debug, format_args!("negative LCD value, DEC forced"));
            }
            self.render.mark(region::LCD);
        }

        self.evaluate_threshold();
        self.check_mapping();
    }

    /// Log a warning when the current value stops being mappable.
    fn check_mapping(&mut self) {
        let value = self.state.value();
        let fault = match self.try_coordinate(value, self.state.orientation(), 1.0) {
            Ok(coordinate) if coordinate.is_finite() => None,
            Ok(_) => Some(GaugeError::DegenerateRange),
            Err(err) => Some(err),
        };
        match fault {
            Some(err) if !self.mapping_fault => {
                self.mapping_fault = true;
                self.record(LogLevel::Warn, format_args!("{err}"));
            }
            Some(_) => {}
            None => self.mapping_fault = false,
        }
    }

    /// Whether the current value failed to map at the last check.
    #[inline]
    pub const fn has_mapping_fault(&self) -> bool { self.mapping_fault }

    fn evaluate_threshold(&mut self) {
        match self.threshold.evaluate(&self.state) {
            Some(ThresholdEvent::Crossed) => {
                let (value, threshold) = (self.state.value(), self.state.threshold());
                self.render.mark(region::LED);
                self.record(LogLevel::Info, format_args!("threshold {threshold} crossed at {value}"));
            }
            Some(ThresholdEvent::Cleared) => self.render.mark(region::LED),
            None => {}
        }
    }

    // =========================================================================
    // Value Queries
    // =========================================================================

    #[inline]
    pub const fn value(&self) -> f64 { self.state.value() }

    #[inline]
    pub const fn peak_value(&self) -> f64 { self.state.peak_value() }

    #[inline]
    pub const fn is_peak_visible(&self) -> bool { self.state.is_peak_visible() }

    #[inline]
    pub const fn min_measured_value(&self) -> f64 { self.state.min_measured_value() }

    #[inline]
    pub const fn max_measured_value(&self) -> f64 { self.state.max_measured_value() }

    /// Reset both measured extrema to the current value.
    pub fn reset_measured_values(&mut self) {
        self.state.reset_min_measured_value();
        self.state.reset_max_measured_value();
        self.render.mark(region::VALUE);
    }

    /// Whether the threshold LED is lit this frame.
    #[inline]
    pub const fn is_led_on(&self) -> bool { self.threshold.is_led_on() }

    #[inline]
    pub const fn state(&self) -> &GaugeState { &self.state }

    #[inline]
    pub const fn engine(&self) -> &AnimationEngine { &self.engine }

    #[inline]
    pub const fn config(&self) -> &GaugeConfig { &self.config }

    // =========================================================================
    // Coordinates
    // =========================================================================

    /// Map `value` for the given layout without recovering from errors.
    pub fn try_coordinate(
        &self,
        value: f64,
        orientation: Orientation,
        length: f64,
    ) -> Result<f64, GaugeError> {
        self.state
            .mapper()
            .map(value, length, orientation, self.state.scale_mode(), &self.config.radial)
    }

    /// Coordinate of the current value: pixel offset along a `length` pixel
    /// track, or dial angle in degrees for `Radial` (`length` unused).
    pub fn coordinate(
        &self,
        orientation: Orientation,
        length: f64,
    ) -> f64 {
        self.coordinate_for(self.state.value(), orientation, length)
    }

    /// Coordinate of an arbitrary value, e.g. a tick mark or the threshold.
    pub fn coordinate_for(
        &self,
        value: f64,
        orientation: Orientation,
        length: f64,
    ) -> f64 {
        match self.try_coordinate(value, orientation, length) {
            Ok(coordinate) if coordinate.is_finite() => coordinate,
            _ => COORDINATE_SENTINEL,
        }
    }

    /// Pointer angle of the current value.
    pub fn angle(&self) -> Angle { to_angle(self.coordinate(Orientation::Radial, 0.0)) }

    /// Pixel position of the current value inside a linear widget whose long
    /// axis is `axis_length` pixels, using the configured track layout.
    pub fn track_position(
        &self,
        orientation: Orientation,
        axis_length: f64,
    ) -> f64 {
        let track = self.config.track.resolve(axis_length);
        track.start + self.coordinate(orientation, track.length())
    }

    /// Span the value bar covers on a `length` pixel track.
    pub fn occupied_region(
        &self,
        orientation: Orientation,
        length: f64,
    ) -> Result<Span, GaugeError> {
        self.state.mapper().occupied_region(
            self.state.value(),
            length,
            orientation,
            self.state.is_starting_from_zero(),
        )
    }

    // =========================================================================
    // LCD
    // =========================================================================

    /// Whether the LCD text should be drawn this frame.
    #[inline]
    pub const fn is_lcd_text_visible(&self) -> bool { self.lcd.is_text_visible() }

    /// LCD text for the current LCD value.
    pub fn format_lcd_value(&self) -> LcdText { self.lcd.formatted() }

    #[inline]
    pub const fn lcd(&self) -> &LcdDisplayState { &self.lcd }

    /// Set the LCD value directly (for LCDs not coupled to the gauge value).
    pub fn set_lcd_value(
        &mut self,
        value: f64,
    ) {
        if self.lcd.set_value(value) {
            self.record(LogLevel::Debug, format_args!("negative LCD value, DEC forced"));
        }
        self.render.mark(region::LCD);
    }

    pub fn set_lcd_value_animated(
        &mut self,
        value: f64,
    ) {
        self.lcd.set_value_animated(value);
    }

    /// Select the LCD number system; returns the system actually applied.
    pub fn set_lcd_number_system(
        &mut self,
        number_system: NumberSystem,
    ) -> NumberSystem {
        let applied = self.lcd.set_number_system(number_system);
        if applied != number_system {
            self.record(LogLevel::Debug, format_args!("negative LCD value, DEC kept"));
        }
        self.render.mark(region::LCD);
        applied
    }

    pub fn set_lcd_decimals(
        &mut self,
        decimals: u8,
    ) {
        self.lcd.set_decimals(decimals);
        self.render.mark(region::LCD);
    }

    pub fn set_lcd_blinking(
        &mut self,
        blinking: bool,
    ) {
        self.lcd.set_blinking(blinking);
        self.render.mark(region::LCD);
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the range.
    ///
    /// Invalid bounds are logged and returned as an error, leaving the gauge
    /// unchanged.
    pub fn set_range(
        &mut self,
        min: f64,
        max: f64,
    ) -> Result<RangeUpdate, GaugeError> {
        match self.state.set_range(min, max) {
            Ok(update) => {
                let (lo, hi) = (self.state.min_value(), self.state.max_value());
                let level = if update == RangeUpdate::Swapped { LogLevel::Warn } else { LogLevel::Info };
                self.record(level, format_args!("range {lo}..{hi}"));
                self.after_reconfigure();
                Ok(update)
            }
            Err(err) => {
                self.record(LogLevel::Error, format_args!("{err}"));
                Err(err)
            }
        }
    }

    pub fn set_threshold(
        &mut self,
        threshold: f64,
    ) {
        self.state.set_threshold(threshold);
        self.after_reconfigure();
    }

    pub fn set_threshold_inverted(
        &mut self,
        inverted: bool,
    ) {
        self.state.set_threshold_inverted(inverted);
        self.after_reconfigure();
    }

    /// Enable or disable auto-return-to-zero; returns the resulting setting.
    pub fn set_auto_reset_to_zero(
        &mut self,
        enabled: bool,
    ) -> bool {
        let applied = self.state.set_auto_reset_to_zero(enabled);
        if enabled && !applied {
            self.record(LogLevel::Warn, format_args!("auto reset needs zero in range"));
        }
        self.after_reconfigure();
        applied
    }

    pub fn set_starting_from_zero(
        &mut self,
        enabled: bool,
    ) {
        self.state.set_starting_from_zero(enabled);
        self.after_reconfigure();
    }

    pub fn set_scale_mode(
        &mut self,
        scale_mode: ScaleMode,
    ) {
        self.state.set_scale_mode(scale_mode);
        self.lcd.set_log_scale(scale_mode == ScaleMode::Logarithmic);
        self.after_reconfigure();
    }

    pub fn set_nice_scale(
        &mut self,
        enabled: bool,
    ) {
        self.state.set_nice_scale(enabled);
        self.after_reconfigure();
    }

    pub fn set_redraw_tolerance(
        &mut self,
        tolerance: f64,
    ) {
        self.state.set_redraw_tolerance(tolerance);
    }

    fn after_reconfigure(&mut self) {
        self.render.mark(region::ALL);
        if self.lcd.is_value_coupled() {
            let value = self.state.value();
            self.lcd.set_value(value);
        }
        self.evaluate_threshold();
        self.check_mapping();
    }

    // =========================================================================
    // Render Requests and Log
    // =========================================================================

    /// Regions to repaint since the last call; clears the request.
    #[inline]
    pub const fn take_render_request(&mut self) -> RenderRegions { self.render.take() }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    #[inline]
    pub const fn log_mut(&mut self) -> &mut EventLog { &mut self.log }

    /// Gauge clock in milliseconds, wrapping at `u32::MAX`.
    #[inline]
    pub const fn now_ms(&self) -> u32 { self.clock.as_millis() as u32 }

    fn record(
        &mut self,
        level: LogLevel,
        args: core::fmt::Arguments<'_>,
    ) {
        let now = self.now_ms();
        self.log.push(level, now, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationConfig, LcdConfig};

    const EPS: f64 = 1e-9;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn gauge(config: GaugeConfig) -> Gauge { Gauge::new(config).unwrap() }

    #[test]
    fn test_invalid_range_rejected() {
        assert_eq!(
            Gauge::new(GaugeConfig::radial(3.0, 3.0)).err(),
            Some(GaugeError::InvalidRange { min: 3.0, max: 3.0 })
        );
    }

    #[test]
    fn test_set_value_clamps() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        assert!((g.set_value(150.0) - 100.0).abs() < EPS);
        assert!((g.value() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_radial_coordinate() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.set_value(50.0);
        assert!((g.coordinate(Orientation::Radial, 0.0) - 270.0).abs() < EPS);
        assert!((g.angle().to_degrees() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_linear_coordinates() {
        let mut g = gauge(GaugeConfig::linear(0.0, 100.0, Orientation::Vertical));
        g.set_value(25.0);
        assert!((g.coordinate(Orientation::Vertical, 200.0) - 150.0).abs() < EPS);
        assert!((g.coordinate_for(100.0, Orientation::Horizontal, 200.0) - 200.0).abs() < EPS);
        // Track of a 412 px tall widget runs from 53 to 353
        assert!((g.track_position(Orientation::Vertical, 412.0) - 278.0).abs() < 1e-6);
    }

    #[test]
    fn test_starting_from_zero_region() {
        let mut g = gauge(GaugeConfig::linear(-50.0, 50.0, Orientation::Horizontal).with_starting_from_zero(true));
        g.set_value(-30.0);
        let span = g.occupied_region(Orientation::Horizontal, 100.0).unwrap();
        assert!((span.start - 50.0).abs() < EPS);
        assert!((span.end - 20.0).abs() < EPS);
    }

    #[test]
    fn test_unmappable_value_uses_sentinel() {
        let g = gauge(GaugeConfig::radial(0.0, 1000.0).with_scale_mode(ScaleMode::Logarithmic));
        let before = g.log().len();
        assert!((g.coordinate_for(-5.0, Orientation::Horizontal, 100.0) - COORDINATE_SENTINEL).abs() < EPS);
        assert!(!g.has_mapping_fault());
        assert_eq!(g.log().len(), before);
    }

    #[test]
    fn test_degenerate_log_range_uses_sentinel_and_logs() {
        let g = gauge(GaugeConfig::radial(0.0, 1.0).with_scale_mode(ScaleMode::Logarithmic));
        assert_eq!(g.try_coordinate(0.5, Orientation::Radial, 0.0), Err(GaugeError::DegenerateRange));
        assert!((g.coordinate(Orientation::Radial, 0.0) - COORDINATE_SENTINEL).abs() < EPS);
        assert!(g.has_mapping_fault());

        let entry = g.log().last().unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert!(entry.message.starts_with("Degenerate range"));
    }

    #[test]
    fn test_mapping_fault_logged_once_and_cleared() {
        let mut g = gauge(GaugeConfig::radial(0.0, 1.0).with_scale_mode(ScaleMode::Logarithmic));
        let warnings = |g: &Gauge| g.log().iter().filter(|e| e.level == LogLevel::Warn).count();
        assert_eq!(warnings(&g), 1);
        g.set_value(0.7);
        g.set_value(0.9);
        assert_eq!(warnings(&g), 1);

        g.set_range(0.0, 100.0).unwrap();
        assert!(!g.has_mapping_fault());
        assert!(g.coordinate(Orientation::Radial, 0.0).is_finite());
    }

    #[test]
    fn test_coordinates_readable_through_shared_borrow() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.set_value(100.0);
        let view: &Gauge = &g;
        assert!((view.coordinate(Orientation::Radial, 0.0) - 420.0).abs() < EPS);
        assert!((view.angle().to_degrees() - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_starting_from_zero_never_leaves_range() {
        let mut g = gauge(GaugeConfig::linear(10.0, 100.0, Orientation::Horizontal).with_starting_from_zero(true));
        assert!((g.set_value(0.0) - 10.0).abs() < EPS);
        assert!(g.coordinate(Orientation::Horizontal, 100.0).abs() < EPS);
        let span = g.occupied_region(Orientation::Horizontal, 100.0).unwrap();
        assert!(span.start.abs() < EPS);
        assert!(span.end.abs() < EPS);
        assert!((g.set_value_animated(-20.0, None, None) - 10.0).abs() < EPS);
    }

    #[test]
    fn test_explicit_duration_used_as_given() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.set_value_animated(100.0, Some(ms(100)), Some(Easing::Linear));
        g.tick(ms(50));
        assert!((g.value() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_animated_linear_midpoint() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.set_value_animated(100.0, Some(ms(1000)), Some(Easing::Linear));
        g.tick(ms(500));
        assert!((g.value() - 50.0).abs() < EPS);
        let report = g.tick(ms(500));
        assert!(report.completed);
        assert!((g.value() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_auto_reset_to_zero_cycle() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0).with_auto_reset_to_zero(true));
        g.set_value_animated(80.0, None, None);

        let mut max_seen: f64 = 0.0;
        let mut peak_recorded = false;
        for _ in 0..200 {
            let report = g.tick(ms(16));
            max_seen = max_seen.max(g.value());
            peak_recorded |= report.peak_recorded;
            if report.completed {
                break;
            }
        }
        assert!(peak_recorded);
        assert!(g.value().abs() < EPS);
        assert!((g.peak_value() - max_seen).abs() < EPS);
        assert!((g.peak_value() - 80.0).abs() < EPS);
        assert!((g.max_measured_value() - 80.0).abs() < EPS);
        // Threshold LED stays off in auto reset mode
        assert!(!g.is_led_on());
    }

    #[test]
    fn test_lcd_coupled_and_forced_dec() {
        let lcd = LcdConfig::new().with_number_system(NumberSystem::Hex).with_decimals(0);
        let mut g = gauge(GaugeConfig::radial(-10.0, 10.0).with_lcd(lcd));
        g.set_value(-5.0);
        assert_eq!(g.format_lcd_value().as_str(), "-5");
        assert_eq!(g.lcd().number_system(), NumberSystem::Dec);
    }

    #[test]
    fn test_lcd_default_format() {
        let mut g = gauge(GaugeConfig::radial(0.0, 10.0));
        g.set_value(3.14159);
        assert_eq!(g.format_lcd_value().as_str(), "3.14");
    }

    #[test]
    fn test_lcd_blink_visibility() {
        let mut g = gauge(GaugeConfig::radial(0.0, 10.0));
        g.set_lcd_blinking(true);
        assert!(g.is_lcd_text_visible());
        g.tick(ms(500));
        assert!(!g.is_lcd_text_visible());
        g.set_lcd_blinking(false);
        assert!(g.is_lcd_text_visible());
    }

    #[test]
    fn test_threshold_led() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0).with_threshold(70.0));
        g.set_value(75.0);
        assert!(g.is_led_on());
        g.tick(ms(500));
        assert!(!g.is_led_on());
        g.set_value(10.0);
        assert!(!g.is_led_on());
    }

    #[test]
    fn test_render_requests() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0).with_redraw_tolerance(0.05));
        assert_eq!(g.take_render_request(), region::ALL);
        g.set_value(2.0);
        assert_eq!(g.take_render_request() & region::VALUE, 0, "below 5% of range");
        g.set_value(6.0);
        assert_ne!(g.take_render_request() & region::VALUE, 0);
    }

    #[test]
    fn test_set_range_errors_are_logged() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        assert!(g.set_range(1.0, 1.0).is_err());
        assert_eq!(g.log().last().map(|e| e.level), Some(LogLevel::Error));
        assert_eq!(g.set_range(200.0, 0.0), Ok(RangeUpdate::Swapped));
        assert!((g.state().max_value() - 200.0).abs() < EPS);
    }

    #[test]
    fn test_direct_write_cancels_animation() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.set_value_animated(100.0, None, None);
        g.tick(ms(100));
        g.set_value(20.0);
        assert!(!g.is_animating());
        g.tick(ms(1000));
        assert!((g.value() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_custom_animation_config() {
        let animation = AnimationConfig::new().with_std_time_to_value(ms(400)).with_standard_easing(Easing::Linear);
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0).with_animation(animation));
        g.set_value_animated(100.0, None, None);
        g.tick(ms(100));
        assert!((g.value() - 25.0).abs() < EPS);
    }

    #[test]
    fn test_log_timestamps_follow_clock() {
        let mut g = gauge(GaugeConfig::radial(0.0, 100.0));
        g.tick(ms(1500));
        let _ = g.set_range(0.0, 50.0);
        assert_eq!(g.now_ms(), 1500);
        assert_eq!(g.log().last().map(|e| e.timestamp_ms), Some(1500));
    }
}
