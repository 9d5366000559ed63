//! Timed lyric lines and the LRC reader.

pub mod parser;

use serde::{Deserialize, Serialize};

pub use parser::{parse_lrc, read_lrc_file};

/// A single timed lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Offset from the start of the song, in seconds.
    pub time_seconds: f64,
    /// Lyric text with surrounding whitespace removed.
    pub text: String,
}

impl LyricLine {
    /// Create a line at `time_seconds`.
    pub fn new(time_seconds: f64, text: impl Into<String>) -> Self {
        Self { time_seconds, text: text.into() }
    }

    /// Start of the line in whole milliseconds, rounded down.
    ///
    /// A small epsilon absorbs binary rounding so `0.57` s maps to 570 ms.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn start_ms(&self) -> u64 {
        (self.time_seconds.max(0.0) * 1000.0 + 1e-6).floor() as u64
    }
}
