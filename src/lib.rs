//! Gauge engine - value transitions and geometric mapping for instrument widgets.
//!
//! This library contains the logic every gauge widget shares, independent of how
//! the widget is painted:
//!
//! - [`state`]: Gauge value, range, peak, measured extrema and threshold
//! - [`mapping`]: Value to pixel offset / angle conversion (linear and log scales)
//! - [`animations`]: Easing curves, transitions and the per-gauge animation engine
//! - [`lcd`]: Segmented LCD number formatting and display state
//! - [`blink`]: Periodic visibility toggle for LCD text and threshold LEDs
//! - [`thresholds`]: Threshold evaluation driving the LED blinker
//! - [`render`]: Render request tracking with redraw tolerance
//! - [`log_buffer`]: Leveled ring buffer of engine events
//! - [`gauge`]: The per-widget facade a host UI talks to
//!
//! # Driving the engine
//!
//! The host owns the paint/animation loop. It forwards value changes to a
//! [`Gauge`], calls [`Gauge::tick`] once per frame with the elapsed time, and
//! reads coordinates and LCD text back when painting:
//!
//! ```ignore
//! let mut gauge = Gauge::new(GaugeConfig::radial(0.0, 100.0))?;
//! gauge.set_value_animated(75.0, None, None);
//!
//! loop {
//!     gauge.tick(Duration::from_millis(16));
//!     let angle = gauge.coordinate(Orientation::Radial, 0.0);
//!     let text = gauge.format_lcd_value();
//!     // paint...
//! }
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the library itself stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod blink;
pub mod config;
pub mod error;
pub mod gauge;
pub mod lcd;
pub mod log_buffer;
pub mod mapping;
pub mod render;
pub mod state;
pub mod thresholds;

// Re-export commonly used items
pub use animations::{AnimationEngine, Easing, TickReport, Transition, TransitionState};
pub use blink::BlinkScheduler;
pub use config::{AnimationConfig, GaugeConfig, LcdConfig};
pub use error::GaugeError;
pub use gauge::Gauge;
pub use lcd::{LcdDisplayState, LcdText, NumberSystem};
pub use log_buffer::{EventLog, LogEntry, LogLevel};
pub use mapping::{Orientation, ScaleMode, ValueRange};
pub use render::{RenderRegions, region};
pub use state::{GaugeState, RangeUpdate};
