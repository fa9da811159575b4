//! Gauge state.
//!
//! - `gauge_state`: Value, range, threshold and measured extrema
//! - `peak`: Peak marker with timed hold
//! - `scale`: Nice-number range and tick spacing

pub mod gauge_state;
pub mod peak;
pub mod scale;

pub use gauge_state::{GaugeState, RangeUpdate};
pub use peak::PeakHold;
pub use scale::{Scale, calc_nice_number};
