//! LCD number formatting.
//!
//! | System | Output | Example |
//! |--------|--------|---------|
//! | DEC | `decimals` fraction digits, `.` separator | `3.14` |
//! | DEC + scientific | mantissa, `E`, exponent | `3.14E4` |
//! | HEX | 32-bit two's complement, uppercase | `FF`, `FFFFFFFB` |
//! | OCT | 32-bit two's complement | `17` |
//!
//! HEX and OCT truncate toward zero and saturate at the `i32` bounds; decimals
//! and scientific notation are ignored. The formatter renders negative values
//! in any system; keeping negatives in DEC is the job of
//! [`LcdDisplayState`](super::LcdDisplayState).

use core::fmt::Write;

use heapless::String;

use super::NumberSystem;

/// Capacity of formatted LCD text in bytes.
pub const LCD_TEXT_LEN: usize = 48;

/// Maximum number of fraction digits.
pub const MAX_LCD_DECIMALS: u8 = 16;

/// Formatted LCD text.
pub type LcdText = String<LCD_TEXT_LEN>;

const INFINITY_TEXT: &str = "∞";
const NEG_INFINITY_TEXT: &str = "-∞";
const NAN_TEXT: &str = "NaN";

/// Renders gauge values for a segmented LCD.
pub struct NumberFormatter;

impl NumberFormatter {
    /// Format `value` for the LCD.
    ///
    /// DEC output that does not fit [`LCD_TEXT_LEN`] falls back to scientific
    /// notation.
    pub fn format(
        value: f64,
        decimals: u8,
        number_system: NumberSystem,
        scientific: bool,
    ) -> LcdText {
        let mut text = LcdText::new();
        let result = match number_system {
            NumberSystem::Hex => write!(text, "{:X}", value as i32),
            NumberSystem::Oct => write!(text, "{:o}", value as i32),
            NumberSystem::Dec => {
                if value.is_nan() {
                    text.push_str(NAN_TEXT).map_err(|_| core::fmt::Error)
                } else if value.is_infinite() {
                    let symbol = if value > 0.0 { INFINITY_TEXT } else { NEG_INFINITY_TEXT };
                    text.push_str(symbol).map_err(|_| core::fmt::Error)
                } else {
                    let decimals = usize::from(decimals.min(MAX_LCD_DECIMALS));
                    if scientific {
                        write_scientific(&mut text, value, decimals)
                    } else {
                        let fixed = write!(text, "{value:.decimals$}");
                        if fixed.is_err() {
                            // Too wide for the LCD
                            text.clear();
                            write_scientific(&mut text, value, decimals)
                        } else {
                            fixed
                        }
                    }
                }
            }
        };

        if result.is_err() {
            text.clear();
        }
        text
    }
}

/// Mantissa with `decimals` fraction digits, `E`, exponent.
fn write_scientific(
    text: &mut LcdText,
    value: f64,
    decimals: usize,
) -> core::fmt::Result {
    let mut raw: String<LCD_TEXT_LEN> = String::new();
    write!(raw, "{value:.decimals$e}")?;
    for c in raw.chars() {
        text.push(if c == 'e' { 'E' } else { c }).map_err(|_| core::fmt::Error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(
        value: f64,
        decimals: u8,
    ) -> LcdText {
        NumberFormatter::format(value, decimals, NumberSystem::Dec, false)
    }

    #[test]
    fn test_dec_decimals() {
        assert_eq!(dec(3.14159, 2).as_str(), "3.14");
        assert_eq!(dec(3.14159, 0).as_str(), "3");
        assert_eq!(dec(-12.5, 1).as_str(), "-12.5");
        assert_eq!(dec(7.0, 3).as_str(), "7.000");
    }

    #[test]
    fn test_dec_scientific() {
        let text = NumberFormatter::format(31415.9, 2, NumberSystem::Dec, true);
        assert_eq!(text.as_str(), "3.14E4");
        let text = NumberFormatter::format(0.000_25, 1, NumberSystem::Dec, true);
        assert_eq!(text.as_str(), "2.5E-4");
    }

    #[test]
    fn test_hex_and_oct() {
        assert_eq!(NumberFormatter::format(255.9, 2, NumberSystem::Hex, false).as_str(), "FF");
        assert_eq!(NumberFormatter::format(15.0, 0, NumberSystem::Oct, false).as_str(), "17");
        assert_eq!(NumberFormatter::format(-5.0, 0, NumberSystem::Hex, false).as_str(), "FFFFFFFB");
    }

    #[test]
    fn test_hex_saturates() {
        assert_eq!(NumberFormatter::format(1e12, 0, NumberSystem::Hex, false).as_str(), "7FFFFFFF");
        assert_eq!(NumberFormatter::format(f64::NAN, 0, NumberSystem::Hex, false).as_str(), "0");
    }

    #[test]
    fn test_decimals_are_capped() {
        let text = dec(1.0, 200);
        assert_eq!(text.len(), 2 + usize::from(MAX_LCD_DECIMALS));
    }

    #[test]
    fn test_overflow_falls_back_to_scientific() {
        let text = dec(1e100, 2);
        assert_eq!(text.as_str(), "1.00E100");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(dec(f64::INFINITY, 2).as_str(), "∞");
        assert_eq!(dec(f64::NEG_INFINITY, 2).as_str(), "-∞");
        assert_eq!(dec(f64::NAN, 2).as_str(), "NaN");
    }
}
