//! Runtime configuration for a single gauge.
//!
//! Every struct has a `Default` built from the compile-time constants and
//! `const fn` builder methods, so a host can keep fully-built configs in
//! `static`s:
//!
//! ```ignore
//! static BOOST: GaugeConfig = GaugeConfig::radial(-1.0, 2.5)
//!     .with_threshold(1.8)
//!     .with_starting_from_zero(true);
//! ```
//!
//! Durations passed to [`AnimationConfig`] are clamped into
//! `[MIN_TIME_TO_VALUE, MAX_TIME_TO_VALUE]` as they are set.

use core::time::Duration;

use super::timing::{
    BLINK_INTERVAL,
    LCD_TIME_TO_VALUE,
    PEAK_HOLD,
    RTZ_RETURN_DELAY,
    RTZ_TIME_BACK_TO_ZERO,
    RTZ_TIME_TO_VALUE,
    STD_TIME_TO_VALUE,
    clamp_time_to_value,
};
use crate::animations::Easing;
use crate::lcd::NumberSystem;
use crate::mapping::{LinearTrack, Orientation, RadialGeometry, ScaleMode};

// =============================================================================
// Animation
// =============================================================================

/// Timings and curves used by the animation engine.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationConfig {
    /// Duration of a standard animated value change.
    pub std_time_to_value: Duration,
    /// Duration of the rise in auto-return-to-zero mode.
    pub rtz_time_to_value: Duration,
    /// Duration of the fall back to zero.
    pub rtz_time_back_to_zero: Duration,
    /// Pause between rise completion and the start of the fall.
    pub return_delay: Duration,
    /// How long a recorded peak stays visible.
    pub peak_hold: Duration,
    pub standard_easing: Easing,
    pub return_to_zero_easing: Easing,
}

impl AnimationConfig {
    pub const fn new() -> Self {
        Self {
            std_time_to_value: STD_TIME_TO_VALUE,
            rtz_time_to_value: RTZ_TIME_TO_VALUE,
            rtz_time_back_to_zero: RTZ_TIME_BACK_TO_ZERO,
            return_delay: RTZ_RETURN_DELAY,
            peak_hold: PEAK_HOLD,
            standard_easing: Easing::STANDARD,
            return_to_zero_easing: Easing::RETURN_TO_ZERO,
        }
    }

    pub const fn with_std_time_to_value(
        mut self,
        duration: Duration,
    ) -> Self {
        self.std_time_to_value = clamp_time_to_value(duration);
        self
    }

    pub const fn with_rtz_time_to_value(
        mut self,
        duration: Duration,
    ) -> Self {
        self.rtz_time_to_value = clamp_time_to_value(duration);
        self
    }

    pub const fn with_rtz_time_back_to_zero(
        mut self,
        duration: Duration,
    ) -> Self {
        self.rtz_time_back_to_zero = clamp_time_to_value(duration);
        self
    }

    pub const fn with_return_delay(
        mut self,
        delay: Duration,
    ) -> Self {
        self.return_delay = delay;
        self
    }

    pub const fn with_peak_hold(
        mut self,
        hold: Duration,
    ) -> Self {
        self.peak_hold = hold;
        self
    }

    pub const fn with_standard_easing(
        mut self,
        easing: Easing,
    ) -> Self {
        self.standard_easing = easing;
        self
    }

    pub const fn with_return_to_zero_easing(
        mut self,
        easing: Easing,
    ) -> Self {
        self.return_to_zero_easing = easing;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// LCD
// =============================================================================

/// Settings of the LCD readout attached to a gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LcdConfig {
    /// Fraction digits in DEC mode.
    pub decimals: u8,
    pub number_system: NumberSystem,
    /// Render DEC values as mantissa + `E` + exponent.
    pub scientific: bool,
    /// Mirror every gauge value onto the LCD.
    pub value_coupled: bool,
    /// Unit text shown next to the value.
    pub unit: &'static str,
    pub threshold: f64,
    /// Show the LCD threshold indicator when the value passes `threshold`.
    pub threshold_visible: bool,
    /// Indicate values at or below the threshold instead of above.
    pub threshold_inverted: bool,
    /// Duration of an animated LCD value change.
    pub time_to_value: Duration,
    /// Toggle interval when the LCD text blinks.
    pub blink_interval: Duration,
}

impl LcdConfig {
    pub const fn new() -> Self {
        Self {
            decimals: 2,
            number_system: NumberSystem::Dec,
            scientific: false,
            value_coupled: true,
            unit: "",
            threshold: 0.0,
            threshold_visible: false,
            threshold_inverted: false,
            time_to_value: LCD_TIME_TO_VALUE,
            blink_interval: BLINK_INTERVAL,
        }
    }

    pub const fn with_decimals(
        mut self,
        decimals: u8,
    ) -> Self {
        self.decimals = decimals;
        self
    }

    pub const fn with_number_system(
        mut self,
        number_system: NumberSystem,
    ) -> Self {
        self.number_system = number_system;
        self
    }

    pub const fn with_scientific(
        mut self,
        scientific: bool,
    ) -> Self {
        self.scientific = scientific;
        self
    }

    pub const fn with_value_coupled(
        mut self,
        coupled: bool,
    ) -> Self {
        self.value_coupled = coupled;
        self
    }

    pub const fn with_unit(
        mut self,
        unit: &'static str,
    ) -> Self {
        self.unit = unit;
        self
    }

    /// Enable the LCD threshold indicator at `threshold`.
    pub const fn with_threshold(
        mut self,
        threshold: f64,
        inverted: bool,
    ) -> Self {
        self.threshold = threshold;
        self.threshold_visible = true;
        self.threshold_inverted = inverted;
        self
    }

    pub const fn with_time_to_value(
        mut self,
        duration: Duration,
    ) -> Self {
        self.time_to_value = duration;
        self
    }

    pub const fn with_blink_interval(
        mut self,
        interval: Duration,
    ) -> Self {
        self.blink_interval = interval;
        self
    }
}

impl Default for LcdConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Gauge
// =============================================================================

/// Complete configuration of one gauge instance.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeConfig {
    pub min: f64,
    pub max: f64,
    pub orientation: Orientation,
    pub scale_mode: ScaleMode,
    /// Fill value bars from zero instead of from the range minimum.
    pub starting_from_zero: bool,
    /// Animated changes rise to the target, then fall back to zero.
    pub auto_reset_to_zero: bool,
    /// Round the range outward to nice tick spacing.
    pub nice_scale: bool,
    pub max_major_ticks: u8,
    pub max_minor_ticks: u8,
    /// Threshold value; `None` uses the middle of the range.
    pub threshold: Option<f64>,
    pub threshold_inverted: bool,
    /// Minimum movement, as a fraction of the range, that requests a redraw.
    pub redraw_tolerance: f64,
    pub radial: RadialGeometry,
    pub track: LinearTrack,
    pub animation: AnimationConfig,
    pub lcd: LcdConfig,
    /// Record engine events in the gauge's log.
    pub log_events: bool,
}

impl GaugeConfig {
    /// Radial dial over `[min, max]` with the full 300° sweep.
    pub const fn radial(
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            min,
            max,
            orientation: Orientation::Radial,
            scale_mode: ScaleMode::Linear,
            starting_from_zero: false,
            auto_reset_to_zero: false,
            nice_scale: false,
            max_major_ticks: 10,
            max_minor_ticks: 10,
            threshold: None,
            threshold_inverted: false,
            redraw_tolerance: 0.0,
            radial: RadialGeometry::FULL,
            track: LinearTrack::STANDARD,
            animation: AnimationConfig::new(),
            lcd: LcdConfig::new(),
            log_events: true,
        }
    }

    /// Linear bar over `[min, max]`.
    pub const fn linear(
        min: f64,
        max: f64,
        orientation: Orientation,
    ) -> Self {
        let mut config = Self::radial(min, max);
        config.orientation = orientation;
        config
    }

    pub const fn with_scale_mode(
        mut self,
        scale_mode: ScaleMode,
    ) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    pub const fn with_starting_from_zero(
        mut self,
        enabled: bool,
    ) -> Self {
        self.starting_from_zero = enabled;
        self
    }

    pub const fn with_auto_reset_to_zero(
        mut self,
        enabled: bool,
    ) -> Self {
        self.auto_reset_to_zero = enabled;
        self
    }

    pub const fn with_nice_scale(
        mut self,
        max_major_ticks: u8,
        max_minor_ticks: u8,
    ) -> Self {
        self.nice_scale = true;
        self.max_major_ticks = max_major_ticks;
        self.max_minor_ticks = max_minor_ticks;
        self
    }

    pub const fn with_threshold(
        mut self,
        threshold: f64,
    ) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub const fn with_threshold_inverted(
        mut self,
        inverted: bool,
    ) -> Self {
        self.threshold_inverted = inverted;
        self
    }

    pub const fn with_redraw_tolerance(
        mut self,
        tolerance: f64,
    ) -> Self {
        self.redraw_tolerance = tolerance;
        self
    }

    pub const fn with_radial_geometry(
        mut self,
        geometry: RadialGeometry,
    ) -> Self {
        self.radial = geometry;
        self
    }

    pub const fn with_track(
        mut self,
        track: LinearTrack,
    ) -> Self {
        self.track = track;
        self
    }

    pub const fn with_animation(
        mut self,
        animation: AnimationConfig,
    ) -> Self {
        self.animation = animation;
        self
    }

    pub const fn with_lcd(
        mut self,
        lcd: LcdConfig,
    ) -> Self {
        self.lcd = lcd;
        self
    }

    pub const fn with_event_log(
        mut self,
        enabled: bool,
    ) -> Self {
        self.log_events = enabled;
        self
    }
}

impl Default for GaugeConfig {
    fn default() -> Self { Self::radial(0.0, 100.0) }
}
