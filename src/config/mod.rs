//! Engine configuration.
//!
//! - `timing`: Animation durations, blink interval and peak hold
//! - `geometry`: Linear track fractions and radial dial presets
//! - `runtime`: Per-gauge config structs injected at construction

pub mod geometry;
pub mod runtime;
pub mod timing;

pub use runtime::{AnimationConfig, GaugeConfig, LcdConfig};
// Re-export timing constants at config level for convenience
pub use timing::{
    BLINK_INTERVAL,
    LCD_TIME_TO_VALUE,
    MAX_TIME_TO_VALUE,
    MIN_TIME_TO_VALUE,
    PEAK_HOLD,
    RTZ_RETURN_DELAY,
    RTZ_TIME_BACK_TO_ZERO,
    RTZ_TIME_TO_VALUE,
    STD_TIME_TO_VALUE,
    clamp_time_to_value,
};
