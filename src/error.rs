//! Error types for gauge configuration and coordinate mapping.
//!
//! Only two conditions are errors. Everything else the engine meets on the
//! paint path (out-of-range values, negative numbers on a HEX display, text
//! that does not fit the LCD) is normalized silently to a safe default.

use thiserror::Error;

/// Errors reported by the gauge engine.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GaugeError {
    /// Range configuration with equal (or non-finite) bounds.
    #[error("Invalid range: min {min} and max {max} must be distinct finite values")]
    InvalidRange {
        /// Requested minimum
        min: f64,
        /// Requested maximum
        max: f64,
    },

    /// Coordinate mapping over a range with no extent.
    #[error("Degenerate range: cannot map a value onto a zero-width scale")]
    DegenerateRange,
}

#[cfg(feature = "defmt")]
impl defmt::Format for GaugeError {
    fn format(
        &self,
        f: defmt::Formatter,
    ) {
        match self {
            Self::InvalidRange { min, max } => defmt::write!(f, "InvalidRange({=f64}, {=f64})", min, max),
            Self::DegenerateRange => defmt::write!(f, "DegenerateRange"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_bounds() {
        let err = GaugeError::InvalidRange { min: 5.0, max: 5.0 };
        let msg = format!("{err}");
        assert!(msg.contains("min 5"));
        assert!(msg.contains("max 5"));
    }

    #[test]
    fn test_degenerate_range_message() {
        let msg = format!("{}", GaugeError::DegenerateRange);
        assert!(msg.starts_with("Degenerate range"));
    }
}
