//! Timed-lyric parser for synchronized lyric display
//!
//! Input is LRC-style timed text: each displayable line carries a
//! `[mm:ss.cc]` prefix. Lines without a timestamp (titles, credits, blanks)
//! are dropped rather than treated as errors.

use std::sync::LazyLock;

use regex::Regex;

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d{2}):(\d{2}\.\d{2})\](.*)").unwrap());

/// One synchronized lyric line.
#[derive(Clone, Debug, PartialEq)]
pub struct LyricCue {
    /// Offset from the start of the track, in seconds.
    pub time: f64,
    pub text: String,
}

/// Parse timed lyric text into cues sorted ascending by time.
///
/// Pure: the same input always yields the same cue list, so callers restart
/// a display simply by re-invoking.
pub fn parse_lyrics(lyrics_text: &str) -> Vec<LyricCue> {
    let mut cues: Vec<LyricCue> = lyrics_text
        .lines()
        .filter_map(|line| {
            let caps = TIMESTAMP.captures(line)?;
            let minutes: f64 = caps[1].parse().ok()?;
            let seconds: f64 = caps[2].parse().ok()?;
            Some(LyricCue {
                time: minutes * 60.0 + seconds,
                text: caps[3].trim().to_string(),
            })
        })
        .collect();
    cues.sort_by(|a, b| a.time.total_cmp(&b.time));
    cues
}
