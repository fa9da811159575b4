//! Widget geometry constants.
//!
//! Linear gauges draw their track inside the widget's long axis with a fixed
//! margin on both ends; radial gauges come in four dial presets. All values are
//! validated at compile time.

// =============================================================================
// Linear Track
// =============================================================================

/// Position of the range maximum along a vertical track, as a fraction of the
/// widget height measured from the top.
pub const LINEAR_TRACK_MAX_FRACTION: f64 = 0.128_640_776_699_029_12;

/// Position of the range minimum along a vertical track, as a fraction of the
/// widget height measured from the top.
pub const LINEAR_TRACK_MIN_FRACTION: f64 = 0.856_796_116_504_854_3;

const _: () = assert!(LINEAR_TRACK_MAX_FRACTION > 0.0);
const _: () = assert!(LINEAR_TRACK_MAX_FRACTION < LINEAR_TRACK_MIN_FRACTION);
const _: () = assert!(LINEAR_TRACK_MIN_FRACTION < 1.0);

// =============================================================================
// Radial Presets (degrees)
// =============================================================================
//
// | Preset        | Apex | Rotation | Origin | Free area |
// |---------------|------|----------|--------|-----------|
// | Quarter       |  90  |   270    |  180   |     0     |
// | Half          | 180  |   270    |  180   |     0     |
// | ThreeQuarter  | 270  |   180    |  270   |     0     |
// | Full          | 300  |   120    |  240   |    60     |

/// Quarter dial (90° sweep).
pub const QUARTER_APEX: f64 = 90.0;
pub const QUARTER_ROTATION: f64 = 270.0;
pub const QUARTER_ORIGIN: f64 = 180.0;

/// Half dial (180° sweep).
pub const HALF_APEX: f64 = 180.0;
pub const HALF_ROTATION: f64 = 270.0;
pub const HALF_ORIGIN: f64 = 180.0;

/// Three-quarter dial (270° sweep).
pub const THREE_QUARTER_APEX: f64 = 270.0;
pub const THREE_QUARTER_ROTATION: f64 = 180.0;
pub const THREE_QUARTER_ORIGIN: f64 = 270.0;

/// Full dial (300° sweep, 60° gap at the bottom).
pub const FULL_APEX: f64 = 300.0;
pub const FULL_ROTATION: f64 = 120.0;
pub const FULL_ORIGIN: f64 = 240.0;
pub const FULL_FREE_AREA: f64 = 60.0;

// Compile-time validation: sweeps grow and never exceed a full turn
const _: () = assert!(QUARTER_APEX < HALF_APEX);
const _: () = assert!(HALF_APEX < THREE_QUARTER_APEX);
const _: () = assert!(THREE_QUARTER_APEX < FULL_APEX);
const _: () = assert!(FULL_APEX + FULL_FREE_AREA == 360.0);

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_track_fractions_ordering() {
        assert!(LINEAR_TRACK_MAX_FRACTION < LINEAR_TRACK_MIN_FRACTION);
        assert!((LINEAR_TRACK_MIN_FRACTION - LINEAR_TRACK_MAX_FRACTION) > 0.5);
    }

    #[test]
    fn test_full_dial_closes_circle() {
        assert!((FULL_APEX + FULL_FREE_AREA - 360.0).abs() < f64::EPSILON);
    }
}
