//! Nice-number scale calculation.
//!
//! Rounds a range outward so major ticks land on 1, 2, 5 or 10 times a power of
//! ten. When nice scaling is off, the range is kept as given and only the tick
//! spacings are derived.

use crate::mapping::ValueRange;

/// Round `range` to a "nice" number (1, 2, 5 or 10 times a power of ten).
///
/// With `round` the closest nice number is picked; without it the smallest
/// nice number that is not below `range`.
pub fn calc_nice_number(
    range: f64,
    round: bool,
) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return range;
    }
    let exponent = libm::floor(libm::log10(range));
    let magnitude = libm::pow(10.0, exponent);
    let fraction = range / magnitude;

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * magnitude
}

/// Displayed range and tick spacing of a gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scale {
    enabled: bool,
    max_major_ticks: u8,
    max_minor_ticks: u8,
    nice_min: f64,
    nice_max: f64,
    major_tick_spacing: f64,
    minor_tick_spacing: f64,
}

impl Scale {
    /// Create a scale. Tick counts below 2 are raised to 2.
    pub const fn new(
        enabled: bool,
        max_major_ticks: u8,
        max_minor_ticks: u8,
    ) -> Self {
        Self {
            enabled,
            max_major_ticks: if max_major_ticks < 2 { 2 } else { max_major_ticks },
            max_minor_ticks: if max_minor_ticks < 2 { 2 } else { max_minor_ticks },
            nice_min: 0.0,
            nice_max: 0.0,
            major_tick_spacing: 0.0,
            minor_tick_spacing: 0.0,
        }
    }

    /// Recompute the displayed range and tick spacing for `range`.
    pub fn calculate(
        &mut self,
        range: ValueRange,
    ) {
        let nice_range = if self.enabled { calc_nice_number(range.extent(), false) } else { range.extent() };
        self.major_tick_spacing = calc_nice_number(nice_range / f64::from(self.max_major_ticks - 1), true);

        if self.enabled && self.major_tick_spacing > 0.0 {
            self.nice_min = libm::floor(range.min / self.major_tick_spacing) * self.major_tick_spacing;
            self.nice_max = libm::ceil(range.max / self.major_tick_spacing) * self.major_tick_spacing;
        } else {
            self.nice_min = range.min;
            self.nice_max = range.max;
        }

        self.minor_tick_spacing =
            calc_nice_number(self.major_tick_spacing / f64::from(self.max_minor_ticks - 1), true);
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    #[inline]
    pub const fn set_enabled(
        &mut self,
        enabled: bool,
    ) {
        self.enabled = enabled;
    }

    /// Range values are clamped to.
    #[inline]
    pub const fn range(&self) -> ValueRange { ValueRange::new(self.nice_min, self.nice_max) }

    #[inline]
    pub const fn major_tick_spacing(&self) -> f64 { self.major_tick_spacing }

    #[inline]
    pub const fn minor_tick_spacing(&self) -> f64 { self.minor_tick_spacing }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_nice_number_ceiling() {
        assert!((calc_nice_number(87.0, false) - 100.0).abs() < EPS);
        assert!((calc_nice_number(100.0, false) - 100.0).abs() < EPS);
        assert!((calc_nice_number(1.7, false) - 2.0).abs() < EPS);
        assert!((calc_nice_number(0.42, false) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_nice_number_rounded() {
        assert!((calc_nice_number(11.11, true) - 10.0).abs() < EPS);
        assert!((calc_nice_number(2.5, true) - 2.0).abs() < EPS);
        assert!((calc_nice_number(6.0, true) - 5.0).abs() < EPS);
        assert!((calc_nice_number(8.0, true) - 10.0).abs() < EPS);
    }

    #[test]
    fn test_nice_number_non_positive_passthrough() {
        assert!((calc_nice_number(0.0, true) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_nice_scale_rounds_outward() {
        let mut scale = Scale::new(true, 10, 10);
        scale.calculate(ValueRange::new(3.0, 97.0));
        assert!((scale.range().min - 0.0).abs() < EPS);
        assert!((scale.range().max - 100.0).abs() < EPS);
        assert!((scale.major_tick_spacing() - 10.0).abs() < EPS);
        assert!((scale.minor_tick_spacing() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_disabled_scale_keeps_range() {
        let mut scale = Scale::new(false, 10, 10);
        scale.calculate(ValueRange::new(3.0, 97.0));
        assert!((scale.range().min - 3.0).abs() < EPS);
        assert!((scale.range().max - 97.0).abs() < EPS);
        assert!(scale.major_tick_spacing() > 0.0);
    }

    #[test]
    fn test_tick_counts_have_floor() {
        let mut scale = Scale::new(true, 0, 1);
        scale.calculate(ValueRange::new(0.0, 10.0));
        assert!(scale.major_tick_spacing().is_finite());
        assert!(scale.minor_tick_spacing().is_finite());
    }
}
