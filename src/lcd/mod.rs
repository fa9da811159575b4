//! Segmented LCD readout.
//!
//! - `format`: DEC/HEX/OCT text rendering
//! - `display`: LCD value, number system rules, threshold indicator, blink

pub mod display;
pub mod format;

pub use display::{LcdDisplayState, LcdTick};
pub use format::{LCD_TEXT_LEN, LcdText, MAX_LCD_DECIMALS, NumberFormatter};

/// Base used to render the LCD value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NumberSystem {
    #[default]
    Dec,
    Hex,
    Oct,
}

impl NumberSystem {
    /// Short label shown in the LCD info area. Empty for DEC.
    pub const fn info_text(self) -> &'static str {
        match self {
            Self::Dec => "",
            Self::Hex => "hex",
            Self::Oct => "oct",
        }
    }
}
