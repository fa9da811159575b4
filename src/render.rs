//! Render request tracking for optimized gauge repaints.
//!
//! The engine never paints. Instead it marks which parts of the widget are
//! stale, and the host collects the mask once per frame with
//! [`RenderState::take`].
//!
//! # Update Strategy
//!
//! | Region | Marked when |
//! |--------|-------------|
//! | `VALUE` | Value moved more than the redraw tolerance since the last paint |
//! | `LCD` | LCD value, number system or blink visibility changed |
//! | `LED` | Threshold LED toggled or was switched off |
//! | `PEAK` | Peak recorded or its hold expired |
//! | `ALL` | Range or geometry changed (first frame included) |
//!
//! # Redraw Tolerance
//!
//! Tiny value changes are not worth a repaint on slow displays. A value change
//! only marks `VALUE` once it has moved at least `tolerance * range` away from
//! the value the host last painted. A zero tolerance repaints on every change.

/// Bitmask of widget regions that need repainting.
pub type RenderRegions = u8;

/// Region bits for [`RenderRegions`].
pub mod region {
    use super::RenderRegions;

    /// Pointer or bar.
    pub const VALUE: RenderRegions = 1 << 0;
    /// LCD text and its indicators.
    pub const LCD: RenderRegions = 1 << 1;
    /// Threshold LED.
    pub const LED: RenderRegions = 1 << 2;
    /// Peak marker.
    pub const PEAK: RenderRegions = 1 << 3;
    /// Everything, including static layers.
    pub const ALL: RenderRegions = VALUE | LCD | LED | PEAK | (1 << 7);
}

/// Tracks stale regions and the last painted value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderState {
    dirty: RenderRegions,
    /// Value the host last painted, for the redraw tolerance check.
    rendered_value: f64,
}

impl RenderState {
    /// Create a render state for the first frame (everything stale).
    pub const fn new(initial_value: f64) -> Self {
        Self {
            dirty: region::ALL,
            rendered_value: initial_value,
        }
    }

    /// Mark regions as stale.
    #[inline]
    pub const fn mark(
        &mut self,
        regions: RenderRegions,
    ) {
        self.dirty |= regions;
    }

    /// Mark `VALUE` if `value` moved past the redraw threshold.
    ///
    /// Returns `true` if the value region was marked.
    pub fn mark_value(
        &mut self,
        value: f64,
        redraw_threshold: f64,
    ) -> bool {
        let moved = libm::fabs(value - self.rendered_value);
        let stale = if redraw_threshold <= 0.0 { moved > 0.0 } else { moved >= redraw_threshold };
        if stale {
            self.rendered_value = value;
            self.dirty |= region::VALUE;
        }
        stale
    }

    /// Return the stale regions and clear them.
    #[inline]
    pub const fn take(&mut self) -> RenderRegions {
        let dirty = self.dirty;
        self.dirty = 0;
        dirty
    }

    /// Stale regions without clearing them.
    #[inline]
    pub const fn pending(&self) -> RenderRegions { self.dirty }

    #[inline]
    pub const fn is_dirty(
        &self,
        regions: RenderRegions,
    ) -> bool {
        self.dirty & regions != 0
    }

    /// Value used for the last `VALUE` repaint.
    #[inline]
    pub const fn rendered_value(&self) -> f64 { self.rendered_value }
}

impl Default for RenderState {
    fn default() -> Self { Self::new(0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_fully_dirty() {
        let mut state = RenderState::new(0.0);
        assert_eq!(state.take(), region::ALL);
        assert_eq!(state.take(), 0);
    }

    #[test]
    fn test_region_bits_are_distinct() {
        let bits = [region::VALUE, region::LCD, region::LED, region::PEAK];
        for (i, a) in bits.iter().enumerate() {
            assert_eq!(a.count_ones(), 1);
            for b in &bits[i + 1..] {
                assert_eq!(a & b, 0);
            }
            assert_eq!(region::ALL & a, *a);
        }
    }

    #[test]
    fn test_mark_accumulates() {
        let mut state = RenderState::new(0.0);
        state.take();
        state.mark(region::LCD);
        state.mark(region::LED);
        assert!(state.is_dirty(region::LCD));
        assert!(!state.is_dirty(region::PEAK));
        assert_eq!(state.take(), region::LCD | region::LED);
    }

    #[test]
    fn test_zero_tolerance_marks_any_change() {
        let mut state = RenderState::new(0.0);
        state.take();
        assert!(!state.mark_value(0.0, 0.0));
        assert!(state.mark_value(0.001, 0.0));
        assert_eq!(state.take(), region::VALUE);
    }

    #[test]
    fn test_tolerance_suppresses_small_moves() {
        let mut state = RenderState::new(50.0);
        state.take();
        // Threshold 1.0 (1% of a 100 wide range)
        assert!(!state.mark_value(50.4, 1.0));
        assert!(!state.mark_value(50.9, 1.0));
        assert_eq!(state.pending(), 0);
        assert!(state.mark_value(51.0, 1.0));
        assert!((state.rendered_value() - 51.0).abs() < f64::EPSILON);
        // Movement is measured from the last painted value
        assert!(!state.mark_value(51.5, 1.0));
    }
}
