//! Value to coordinate mapping.
//!
//! Converts a gauge value into the scalar the renderer needs: a pixel offset
//! along a linear track, or an angle in degrees on a radial dial. Both linear
//! and logarithmic scales are supported.
//!
//! # Conventions
//!
//! | Layout | Linear scale | Log scale |
//! |--------|--------------|-----------|
//! | Horizontal | `ratio * length` | `log10(v) / log10(max) * length` |
//! | Vertical | `length - ratio * length` | `length - log10(v) / log10(max) * length` |
//! | Radial | `rotation + ratio * apex` | `rotation + log10(v) / log10(max) * apex` |
//!
//! with `ratio = (value - min) / (max - min)`. Vertical tracks grow upward, so
//! the range minimum sits at the far end of the axis.
//!
//! The mapper never clamps. Callers that need an on-scale coordinate clamp the
//! value through [`GaugeState`](crate::state::GaugeState) first.

use embedded_graphics::geometry::{Angle, Size};

use crate::config::geometry::{
    FULL_APEX,
    FULL_FREE_AREA,
    FULL_ORIGIN,
    FULL_ROTATION,
    HALF_APEX,
    HALF_ORIGIN,
    HALF_ROTATION,
    LINEAR_TRACK_MAX_FRACTION,
    LINEAR_TRACK_MIN_FRACTION,
    QUARTER_APEX,
    QUARTER_ORIGIN,
    QUARTER_ROTATION,
    THREE_QUARTER_APEX,
    THREE_QUARTER_ORIGIN,
    THREE_QUARTER_ROTATION,
};
use crate::error::GaugeError;

// =============================================================================
// Layout Types
// =============================================================================

/// Direction in which a gauge displays its value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Bottom to top.
    Vertical,
    /// Clockwise around a dial.
    #[default]
    Radial,
}

impl Orientation {
    /// Pick the linear orientation for a widget of the given size.
    ///
    /// Taller than wide means vertical; everything else is horizontal.
    pub const fn from_size(size: Size) -> Self {
        if size.width < size.height { Self::Vertical } else { Self::Horizontal }
    }
}

/// Scale used to spread values along the track.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScaleMode {
    #[default]
    Linear,
    Logarithmic,
}

/// Closed numeric range `[min, max]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Create a range. Ordering is not checked here; see
    /// [`GaugeState::set_range`](crate::state::GaugeState::set_range).
    pub const fn new(
        min: f64,
        max: f64,
    ) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    #[inline]
    pub fn extent(&self) -> f64 { self.max - self.min }

    /// Check whether `value` lies inside the range (inclusive).
    #[inline]
    pub fn contains(
        &self,
        value: f64,
    ) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    #[inline]
    pub fn clamp(
        &self,
        value: f64,
    ) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Pixel span along one axis. `end` may be smaller than `start` when the span
/// grows toward the origin of the axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    /// Unsigned length of the span.
    #[inline]
    pub fn length(&self) -> f64 { libm::fabs(self.end - self.start) }
}

/// Where the value track sits inside a linear widget, as fractions of the
/// widget's long axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LinearTrack {
    /// Near end of the track (top, or left).
    pub start_fraction: f64,
    /// Far end of the track (bottom, or right).
    pub end_fraction: f64,
}

impl LinearTrack {
    /// Track layout shared by the linear gauge family.
    pub const STANDARD: Self = Self {
        start_fraction: LINEAR_TRACK_MAX_FRACTION,
        end_fraction: LINEAR_TRACK_MIN_FRACTION,
    };

    /// Resolve the track to pixels for a widget whose long axis is
    /// `axis_length` pixels.
    pub fn resolve(
        &self,
        axis_length: f64,
    ) -> Span {
        Span {
            start: axis_length * self.start_fraction,
            end: axis_length * self.end_fraction,
        }
    }
}

impl Default for LinearTrack {
    fn default() -> Self { Self::STANDARD }
}

/// Sweep parameters of a radial dial, in degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RadialGeometry {
    /// Total angle covered by the range.
    pub apex_angle: f64,
    /// Angle of the range minimum.
    pub rotation_offset: f64,
    /// Correction applied when drawing tickmark labels.
    pub origin_correction: f64,
    /// Unused gap between the range maximum and minimum.
    pub free_area_angle: f64,
}

impl RadialGeometry {
    pub const QUARTER: Self = Self {
        apex_angle: QUARTER_APEX,
        rotation_offset: QUARTER_ROTATION,
        origin_correction: QUARTER_ORIGIN,
        free_area_angle: 0.0,
    };

    pub const HALF: Self = Self {
        apex_angle: HALF_APEX,
        rotation_offset: HALF_ROTATION,
        origin_correction: HALF_ORIGIN,
        free_area_angle: 0.0,
    };

    pub const THREE_QUARTER: Self = Self {
        apex_angle: THREE_QUARTER_APEX,
        rotation_offset: THREE_QUARTER_ROTATION,
        origin_correction: THREE_QUARTER_ORIGIN,
        free_area_angle: 0.0,
    };

    pub const FULL: Self = Self {
        apex_angle: FULL_APEX,
        rotation_offset: FULL_ROTATION,
        origin_correction: FULL_ORIGIN,
        free_area_angle: FULL_FREE_AREA,
    };
}

impl Default for RadialGeometry {
    fn default() -> Self { Self::FULL }
}

/// Convert a dial angle in degrees to an `embedded-graphics` angle.
#[inline]
pub fn to_angle(degrees: f64) -> Angle { Angle::from_degrees(degrees as f32) }

// =============================================================================
// Coordinate Mapper
// =============================================================================

/// Pure value to coordinate conversions over one range.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    range: ValueRange,
}

impl CoordinateMapper {
    pub const fn new(range: ValueRange) -> Self { Self { range } }

    /// Range this mapper converts from.
    #[inline]
    pub const fn range(&self) -> ValueRange { self.range }

    /// Position of `value` inside the range, `0.0` at min and `1.0` at max.
    pub fn ratio(
        &self,
        value: f64,
    ) -> Result<f64, GaugeError> {
        let extent = self.range.extent();
        if extent == 0.0 || !extent.is_finite() {
            return Err(GaugeError::DegenerateRange);
        }
        Ok((value - self.range.min) / extent)
    }

    /// Pixel offset of `value` along a track `length` pixels long.
    ///
    /// Radial orientation is treated like horizontal; use
    /// [`map_radial`](Self::map_radial) for angles.
    pub fn map_linear(
        &self,
        value: f64,
        length: f64,
        orientation: Orientation,
    ) -> Result<f64, GaugeError> {
        let offset = self.ratio(value)? * length;
        Ok(match orientation {
            Orientation::Vertical => length - offset,
            Orientation::Horizontal | Orientation::Radial => offset,
        })
    }

    /// Span a value bar covers on a track `length` pixels long.
    ///
    /// The bar starts at the range minimum, or at zero (clamped into the
    /// range) when `starting_from_zero` is set, and ends at `value`.
    pub fn occupied_region(
        &self,
        value: f64,
        length: f64,
        orientation: Orientation,
        starting_from_zero: bool,
    ) -> Result<Span, GaugeError> {
        let origin = if starting_from_zero { self.range.clamp(0.0) } else { self.range.min };
        Ok(Span {
            start: self.map_linear(origin, length, orientation)?,
            end: self.map_linear(value, length, orientation)?,
        })
    }

    /// Dial angle of `value` in degrees.
    pub fn map_radial(
        &self,
        value: f64,
        geometry: &RadialGeometry,
    ) -> Result<f64, GaugeError> {
        Ok(geometry.rotation_offset + self.ratio(value)? * geometry.apex_angle)
    }

    /// Logarithmic position of `value` scaled to `extent`.
    ///
    /// Non-positive values give a non-finite result; keep them off a log
    /// scale before mapping.
    pub fn map_log(
        &self,
        value: f64,
        extent: f64,
    ) -> Result<f64, GaugeError> {
        let denominator = libm::log10(self.range.max);
        if self.range.extent() == 0.0 || denominator == 0.0 || !denominator.is_finite() {
            return Err(GaugeError::DegenerateRange);
        }
        Ok(libm::log10(value) / denominator * extent)
    }

    /// Map `value` for any layout and scale.
    pub fn map(
        &self,
        value: f64,
        length: f64,
        orientation: Orientation,
        scale: ScaleMode,
        geometry: &RadialGeometry,
    ) -> Result<f64, GaugeError> {
        match (orientation, scale) {
            (Orientation::Radial, ScaleMode::Linear) => self.map_radial(value, geometry),
            (Orientation::Radial, ScaleMode::Logarithmic) => {
                Ok(geometry.rotation_offset + self.map_log(value, geometry.apex_angle)?)
            }
            (_, ScaleMode::Linear) => self.map_linear(value, length, orientation),
            (Orientation::Vertical, ScaleMode::Logarithmic) => Ok(length - self.map_log(value, length)?),
            (Orientation::Horizontal, ScaleMode::Logarithmic) => self.map_log(value, length),
        }
    }

    /// Degrees per value unit.
    pub fn angle_step(
        &self,
        apex_angle: f64,
    ) -> Result<f64, GaugeError> {
        let extent = self.range.extent();
        if extent == 0.0 || !extent.is_finite() {
            return Err(GaugeError::DegenerateRange);
        }
        Ok(apex_angle / extent)
    }

    /// Degrees per decade of the range.
    pub fn log_angle_step(
        &self,
        apex_angle: f64,
    ) -> Result<f64, GaugeError> {
        let decades = libm::log10(self.range.extent());
        if decades == 0.0 || !decades.is_finite() {
            return Err(GaugeError::DegenerateRange);
        }
        Ok(apex_angle / decades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn mapper(
        min: f64,
        max: f64,
    ) -> CoordinateMapper {
        CoordinateMapper::new(ValueRange::new(min, max))
    }

    #[test]
    fn test_orientation_from_size() {
        assert_eq!(Orientation::from_size(Size::new(40, 200)), Orientation::Vertical);
        assert_eq!(Orientation::from_size(Size::new(200, 40)), Orientation::Horizontal);
        assert_eq!(Orientation::from_size(Size::new(100, 100)), Orientation::Horizontal);
    }

    #[test]
    fn test_map_linear_horizontal_endpoints() {
        let m = mapper(0.0, 100.0);
        assert!((m.map_linear(0.0, 200.0, Orientation::Horizontal).unwrap() - 0.0).abs() < EPS);
        assert!((m.map_linear(50.0, 200.0, Orientation::Horizontal).unwrap() - 100.0).abs() < EPS);
        assert!((m.map_linear(100.0, 200.0, Orientation::Horizontal).unwrap() - 200.0).abs() < EPS);
    }

    #[test]
    fn test_map_linear_vertical_is_inverted() {
        let m = mapper(0.0, 100.0);
        assert!((m.map_linear(0.0, 200.0, Orientation::Vertical).unwrap() - 200.0).abs() < EPS);
        assert!((m.map_linear(25.0, 200.0, Orientation::Vertical).unwrap() - 150.0).abs() < EPS);
        assert!((m.map_linear(100.0, 200.0, Orientation::Vertical).unwrap() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_map_linear_is_monotonic() {
        let m = mapper(-20.0, 80.0);
        let mut prev_h = f64::MIN;
        let mut prev_v = f64::MAX;
        for i in 0..=100 {
            let v = -20.0 + f64::from(i);
            let h = m.map_linear(v, 300.0, Orientation::Horizontal).unwrap();
            let vert = m.map_linear(v, 300.0, Orientation::Vertical).unwrap();
            assert!(h >= prev_h, "horizontal must not decrease");
            assert!(vert <= prev_v, "vertical must not increase");
            prev_h = h;
            prev_v = vert;
        }
    }

    #[test]
    fn test_degenerate_range_is_reported() {
        let m = mapper(5.0, 5.0);
        assert_eq!(m.map_linear(5.0, 100.0, Orientation::Horizontal), Err(GaugeError::DegenerateRange));
        assert_eq!(m.map_radial(5.0, &RadialGeometry::FULL), Err(GaugeError::DegenerateRange));
        assert_eq!(m.angle_step(300.0), Err(GaugeError::DegenerateRange));
    }

    #[test]
    fn test_map_radial_full_dial() {
        let m = mapper(0.0, 100.0);
        let g = RadialGeometry::FULL;
        assert!((m.map_radial(0.0, &g).unwrap() - 120.0).abs() < EPS);
        assert!((m.map_radial(50.0, &g).unwrap() - 270.0).abs() < EPS);
        assert!((m.map_radial(100.0, &g).unwrap() - 420.0).abs() < EPS);
    }

    #[test]
    fn test_map_log() {
        let m = mapper(1.0, 1000.0);
        assert!((m.map_log(10.0, 300.0).unwrap() - 100.0).abs() < 1e-6);
        assert!((m.map_log(1000.0, 300.0).unwrap() - 300.0).abs() < 1e-6);
        assert!(m.map_log(1.0, 300.0).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_map_log_non_positive_is_not_finite() {
        let m = mapper(1.0, 1000.0);
        assert!(!m.map_log(0.0, 300.0).unwrap().is_finite());
        assert!(!m.map_log(-5.0, 300.0).unwrap().is_finite());
    }

    #[test]
    fn test_map_log_max_of_one_is_degenerate() {
        let m = mapper(0.0, 1.0);
        assert_eq!(m.map_log(0.5, 100.0), Err(GaugeError::DegenerateRange));
    }

    #[test]
    fn test_occupied_region_from_min() {
        let m = mapper(0.0, 100.0);
        let span = m.occupied_region(40.0, 100.0, Orientation::Horizontal, false).unwrap();
        assert!((span.start - 0.0).abs() < EPS);
        assert!((span.end - 40.0).abs() < EPS);
    }

    #[test]
    fn test_occupied_region_starting_from_zero_negative() {
        // [-50, 50], value -30: the bar spans from zero down to -30
        let m = mapper(-50.0, 50.0);
        let span = m.occupied_region(-30.0, 100.0, Orientation::Horizontal, true).unwrap();
        assert!((span.start - 50.0).abs() < EPS);
        assert!((span.end - 20.0).abs() < EPS);
        assert!((span.length() - 30.0).abs() < EPS);
        assert!(span.end < span.start, "negative values grow toward the axis origin");
    }

    #[test]
    fn test_occupied_region_starting_from_zero_outside_range() {
        // Zero is below the range, so the bar starts at min
        let m = mapper(10.0, 110.0);
        let span = m.occupied_region(60.0, 100.0, Orientation::Horizontal, true).unwrap();
        assert!((span.start - 0.0).abs() < EPS);
        assert!((span.end - 50.0).abs() < EPS);
    }

    #[test]
    fn test_angle_steps() {
        let m = mapper(0.0, 100.0);
        assert!((m.angle_step(300.0).unwrap() - 3.0).abs() < EPS);
        assert!((m.log_angle_step(300.0).unwrap() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_linear_track_resolve() {
        let span = LinearTrack::STANDARD.resolve(412.0);
        assert!((span.start - 53.0).abs() < 1e-6);
        assert!((span.end - 353.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_dispatch_vertical_log() {
        let m = mapper(1.0, 100.0);
        let g = RadialGeometry::FULL;
        let y = m.map(10.0, 200.0, Orientation::Vertical, ScaleMode::Logarithmic, &g).unwrap();
        assert!((y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_value_range_clamp() {
        let r = ValueRange::new(0.0, 100.0);
        assert!((r.clamp(150.0) - 100.0).abs() < EPS);
        assert!((r.clamp(-1.0) - 0.0).abs() < EPS);
        assert!((r.clamp(f64::NAN) - 0.0).abs() < EPS);
    }
}
