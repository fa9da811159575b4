//! Event log with levels and timestamps.
//!
//! Each gauge owns a small ring of log entries recording what the engine did:
//! range changes, threshold crossings, normalizations on the paint path. A
//! host can show the ring on a debug page or drain it into its own logger.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - per-tick detail
//! - `Debug`: Gray - normalizations (e.g. DEC forced for a negative LCD value)
//! - `Info`: Green - configuration changes
//! - `Warn`: Yellow - recovered errors on the paint path
//! - `Error`: Red - rejected configuration
//!
//! # defmt
//!
//! With the `defmt` feature every accepted entry is also emitted through
//! `defmt` at the matching level.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(LogLevel::Info, now_ms, format_args!("range {}..{}", min, max));
//! for entry in log.iter() {
//!     draw_line(entry.level.color(), entry.level.prefix(), &entry.message);
//! }
//! ```

use core::fmt::{Arguments, Write};

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use heapless::{Deque, String};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum bytes per log message.
pub const LOG_MSG_LEN: usize = 40;

const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);
const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// Per-tick detail (dark gray)
    Trace = 0,
    /// Normalizations (gray)
    Debug = 1,
    /// Configuration changes (green)
    #[default]
    Info = 2,
    /// Recovered errors (yellow)
    Warn = 3,
    /// Rejected configuration (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => DARK_GRAY,
            Self::Debug => GRAY,
            Self::Info => Rgb565::GREEN,
            Self::Warn => Rgb565::YELLOW,
            Self::Error => Rgb565::RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN` bytes.
    pub message: String<LOG_MSG_LEN>,
    /// Gauge clock in milliseconds (sum of all tick deltas).
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create an entry from preformatted text, truncating on a character
    /// boundary.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        let _ = Truncating(&mut msg).write_str(message);
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }

    /// Create an entry from format arguments. Output past the capacity is
    /// dropped.
    pub fn from_args(
        level: LogLevel,
        args: Arguments<'_>,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        let _ = Truncating(&mut msg).write_fmt(args);
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

/// Writer that keeps every character that fits and drops the rest.
///
/// `heapless::String` rejects a whole `write_str` chunk once it would
/// overflow, which would blank long single-argument messages.
struct Truncating<'a>(&'a mut String<LOG_MSG_LEN>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Ring of log entries; the oldest entry is dropped when full.
#[derive(Clone, Debug)]
pub struct EventLog {
    entries: Deque<LogEntry, LOG_ENTRIES>,
    min_level: LogLevel,
    enabled: bool,
}

impl EventLog {
    /// Create an empty log recording `Debug` and above.
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            min_level: LogLevel::Debug,
            enabled: true,
        }
    }

    /// Drop entries below `level`.
    pub const fn set_min_level(
        &mut self,
        level: LogLevel,
    ) {
        self.min_level = level;
    }

    /// Turn recording on or off. Existing entries are kept.
    pub const fn set_enabled(
        &mut self,
        enabled: bool,
    ) {
        self.enabled = enabled;
    }

    #[inline]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    /// Format and record a message.
    pub fn push(
        &mut self,
        level: LogLevel,
        timestamp_ms: u32,
        args: Arguments<'_>,
    ) {
        if !self.accepts(level) {
            return;
        }
        self.push_entry(LogEntry::from_args(level, args, timestamp_ms));
    }

    /// Record a prepared entry, subject to the level filter.
    pub fn push_entry(
        &mut self,
        entry: LogEntry,
    ) {
        if !self.accepts(entry.level) {
            return;
        }
        forward_to_defmt(&entry);
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        self.entries.push_back(entry).ok();
    }

    fn accepts(
        &self,
        level: LogLevel,
    ) -> bool {
        self.enabled && level >= self.min_level
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    /// Most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&LogEntry> { self.entries.back() }

    /// Remove all entries.
    pub fn clear(&mut self) { self.entries.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "defmt")]
fn forward_to_defmt(entry: &LogEntry) {
    let msg = entry.message.as_str();
    match entry.level {
        LogLevel::Trace => defmt::trace!("[{=u32}] {=str}", entry.timestamp_ms, msg),
        LogLevel::Debug => defmt::debug!("[{=u32}] {=str}", entry.timestamp_ms, msg),
        LogLevel::Info => defmt::info!("[{=u32}] {=str}", entry.timestamp_ms, msg),
        LogLevel::Warn => defmt::warn!("[{=u32}] {=str}", entry.timestamp_ms, msg),
        LogLevel::Error => defmt::error!("[{=u32}] {=str}", entry.timestamp_ms, msg),
    }
}

#[cfg(not(feature = "defmt"))]
#[inline]
const fn forward_to_defmt(_entry: &LogEntry) {}
