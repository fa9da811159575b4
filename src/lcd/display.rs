//! LCD display state.
//!
//! Holds the raw LCD value and the settings used to render it. Two rules are
//! enforced here rather than in the formatter:
//!
//! - A negative value always renders in DEC. Writing a negative value switches
//!   the number system to DEC; selecting HEX/OCT while negative is refused.
//! - On a log scale the LCD never shows values below `1`.
//!
//! The LCD value can be animated independently of the gauge value, and the
//! text can blink through an owned [`BlinkScheduler`].

use core::time::Duration;

use heapless::String;

use super::NumberSystem;
use super::format::{LcdText, MAX_LCD_DECIMALS, NumberFormatter};
use crate::animations::{Easing, Transition};
use crate::blink::BlinkScheduler;
use crate::config::LcdConfig;
use crate::thresholds::is_beyond_threshold;

/// Capacity of the unit text in bytes.
pub const LCD_UNIT_LEN: usize = 16;

/// Events produced by one [`LcdDisplayState::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LcdTick {
    /// The LCD value moved.
    pub value_changed: bool,
    /// The blinking text changed visibility.
    pub visibility_changed: bool,
}

/// Value and presentation of an LCD readout.
#[derive(Clone, PartialEq, Debug)]
pub struct LcdDisplayState {
    raw_value: f64,
    decimals: u8,
    number_system: NumberSystem,
    scientific: bool,
    log_scale: bool,
    value_coupled: bool,
    unit: String<LCD_UNIT_LEN>,
    threshold: f64,
    threshold_visible: bool,
    threshold_inverted: bool,
    time_to_value: Duration,
    animation: Option<Transition>,
    blink: BlinkScheduler,
}

impl LcdDisplayState {
    pub fn new(config: &LcdConfig) -> Self {
        let mut state = Self {
            raw_value: 0.0,
            decimals: config.decimals.min(MAX_LCD_DECIMALS),
            number_system: config.number_system,
            scientific: config.scientific,
            log_scale: false,
            value_coupled: config.value_coupled,
            unit: String::new(),
            threshold: config.threshold,
            threshold_visible: config.threshold_visible,
            threshold_inverted: config.threshold_inverted,
            time_to_value: config.time_to_value,
            animation: None,
            blink: BlinkScheduler::new(config.blink_interval),
        };
        state.set_unit(config.unit);
        state
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Set the LCD value, cancelling a running LCD animation.
    ///
    /// Returns `true` if the number system was forced to DEC.
    pub fn set_value(
        &mut self,
        value: f64,
    ) -> bool {
        self.animation = None;
        self.apply_value(value)
    }

    /// Animate the LCD value from its current value to `value`.
    pub fn set_value_animated(
        &mut self,
        value: f64,
    ) {
        let mut transition = Transition::new(self.raw_value, value, self.time_to_value, Easing::STANDARD);
        transition.play();
        self.animation = Some(transition);
    }

    fn apply_value(
        &mut self,
        value: f64,
    ) -> bool {
        let forced = value < 0.0 && self.number_system != NumberSystem::Dec;
        if forced {
            self.number_system = NumberSystem::Dec;
        }
        self.raw_value = if self.log_scale && value <= 1.0 { 1.0 } else { value };
        forced
    }

    #[inline]
    pub const fn value(&self) -> f64 { self.raw_value }

    /// Whether an LCD animation is running.
    #[inline]
    pub const fn is_animating(&self) -> bool { self.animation.is_some() }

    /// Advance the LCD animation and the text blinker.
    pub fn tick(
        &mut self,
        delta: Duration,
    ) -> LcdTick {
        let mut report = LcdTick::default();

        if let Some(mut transition) = self.animation.take() {
            let before = self.raw_value;
            transition.advance(delta);
            self.apply_value(transition.value());
            report.value_changed = self.raw_value != before;
            if transition.is_playing() {
                self.animation = Some(transition);
            }
        }

        report.visibility_changed = self.blink.tick(delta);
        report
    }

    /// Text to show, rendered with the current settings.
    pub fn formatted(&self) -> LcdText {
        NumberFormatter::format(self.raw_value, self.decimals, self.number_system, self.scientific)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[inline]
    pub const fn number_system(&self) -> NumberSystem { self.number_system }

    /// Select the number system. HEX/OCT are refused while the value is
    /// negative; the applied system is returned.
    pub fn set_number_system(
        &mut self,
        number_system: NumberSystem,
    ) -> NumberSystem {
        self.number_system = if self.raw_value < 0.0 { NumberSystem::Dec } else { number_system };
        self.number_system
    }

    #[inline]
    pub const fn decimals(&self) -> u8 { self.decimals }

    /// Set fraction digits, capped at [`MAX_LCD_DECIMALS`].
    pub fn set_decimals(
        &mut self,
        decimals: u8,
    ) {
        self.decimals = decimals.min(MAX_LCD_DECIMALS);
    }

    #[inline]
    pub const fn is_scientific(&self) -> bool { self.scientific }

    pub const fn set_scientific(
        &mut self,
        scientific: bool,
    ) {
        self.scientific = scientific;
    }

    /// Follow the gauge's scale mode. Switching to log lifts the value to `1`.
    pub fn set_log_scale(
        &mut self,
        log_scale: bool,
    ) {
        self.log_scale = log_scale;
        let value = self.raw_value;
        self.apply_value(value);
    }

    /// Whether the LCD mirrors the gauge value.
    #[inline]
    pub const fn is_value_coupled(&self) -> bool { self.value_coupled }

    pub const fn set_value_coupled(
        &mut self,
        coupled: bool,
    ) {
        self.value_coupled = coupled;
    }

    #[inline]
    pub fn unit(&self) -> &str { self.unit.as_str() }

    /// Set the unit text, truncated to [`LCD_UNIT_LEN`] bytes on a character
    /// boundary.
    pub fn set_unit(
        &mut self,
        unit: &str,
    ) {
        self.unit.clear();
        for c in unit.chars() {
            if self.unit.push(c).is_err() {
                break;
            }
        }
    }

    /// Label for the info area (`hex`, `oct`, or empty).
    #[inline]
    pub const fn info_text(&self) -> &'static str { self.number_system.info_text() }

    // =========================================================================
    // Threshold Indicator
    // =========================================================================

    #[inline]
    pub const fn threshold(&self) -> f64 { self.threshold }

    pub const fn set_threshold(
        &mut self,
        threshold: f64,
    ) {
        self.threshold = threshold;
    }

    pub const fn set_threshold_visible(
        &mut self,
        visible: bool,
    ) {
        self.threshold_visible = visible;
    }

    pub const fn set_threshold_inverted(
        &mut self,
        inverted: bool,
    ) {
        self.threshold_inverted = inverted;
    }

    /// Whether the LCD threshold indicator should be drawn.
    ///
    /// Only in DEC, only when enabled, and only when the value is at or above
    /// the threshold (at or below when inverted).
    pub fn is_threshold_indicated(&self) -> bool {
        self.number_system == NumberSystem::Dec
            && self.threshold_visible
            && is_beyond_threshold(self.raw_value, self.threshold, self.threshold_inverted)
    }

    // =========================================================================
    // Blink
    // =========================================================================

    /// Start or stop blinking the LCD text.
    pub const fn set_blinking(
        &mut self,
        blinking: bool,
    ) {
        self.blink.set_running(blinking);
    }

    #[inline]
    pub const fn is_blinking(&self) -> bool { self.blink.is_running() }

    /// Whether the LCD text should be drawn this frame.
    #[inline]
    pub const fn is_text_visible(&self) -> bool { self.blink.is_visible() }
}

impl Default for LcdDisplayState {
    fn default() -> Self { Self::new(&LcdConfig::new()) }
}
