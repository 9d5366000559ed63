//! Cue timings derived from lyric lines.

use crate::constants::timeline::{FIRST_CUE_ID, LAST_LINE_HOLD_MS, PHASE_PER_MINUTE, WATERMARK_TAIL_MS};
use crate::error::{Error, Result};
use crate::lyrics::LyricLine;

/// One on-screen lyric text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// Element id in the scene.
    pub id: u64,
    /// Appearance time in milliseconds.
    pub start_ms: u64,
    /// Disappearance time in milliseconds.
    pub end_ms: u64,
    /// Lyric text.
    pub text: String,
}

/// Timings for a whole song.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Start of the last line in milliseconds; the scene length.
    pub total_ms: u64,
    /// Start of the last line in seconds.
    pub total_seconds: f64,
    /// Final wave warp phase.
    pub phase_end: f64,
    /// One cue per lyric line, in input order.
    pub cues: Vec<Cue>,
}

impl Timeline {
    /// Derive cue timings. Each line lasts until the next one starts; the
    /// last one is held for a fixed time.
    pub fn from_lines(lines: &[LyricLine]) -> Result<Self> {
        let Some(last) = lines.last() else {
            return Err(Error::EmptyLyrics { file: None });
        };

        let cues = lines
            .iter()
            .enumerate()
            .zip(FIRST_CUE_ID..)
            .map(|((idx, line), id)| {
                let start_ms = line.start_ms();
                let end_ms = lines
                    .get(idx + 1)
                    .map_or(start_ms + LAST_LINE_HOLD_MS, LyricLine::start_ms);
                Cue { id, start_ms, end_ms, text: line.text.clone() }
            })
            .collect();

        Ok(Self {
            total_ms: last.start_ms(),
            total_seconds: last.time_seconds,
            phase_end: phase_for(last.time_seconds),
            cues,
        })
    }

    /// End of the watermark, a little past the last line's start.
    pub const fn watermark_end_ms(&self) -> u64 {
        self.total_ms + WATERMARK_TAIL_MS
    }
}

/// Wave warp phase reached after `total_seconds`.
pub fn phase_for(total_seconds: f64) -> f64 {
    PHASE_PER_MINUTE * (total_seconds / 60.0)
}
