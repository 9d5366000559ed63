//! LRC reader.
//!
//! Only `[MM:SS.cc]text` lines are kept. Metadata tags (`[ar:...]`), blank
//! lines and anything else without a timestamp are dropped silently.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::LyricLine;
use crate::error::{Error, Result};

/// Regex matching `[01:23.45]text` anywhere in a line.
#[allow(clippy::expect_used)]
static RE_TIMED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2}):(\d{2}\.\d{2})\](.*)").expect("valid regex: RE_TIMED_LINE")
});

/// Parse LRC content into timed lines, in file order.
pub fn parse_lrc(content: &str) -> Vec<LyricLine> {
    content
        .split(['\n', '\r'])
        .filter_map(parse_line)
        .collect()
}

/// Parse one LRC line; `None` when it carries no timestamp.
fn parse_line(line: &str) -> Option<LyricLine> {
    let caps = RE_TIMED_LINE.captures(line)?;
    let minutes = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let seconds = caps.get(2)?.as_str().parse::<f64>().ok()?;
    let text = caps.get(3).map_or("", |m| m.as_str()).trim();

    Some(LyricLine::new(f64::from(minutes) * 60.0 + seconds, text))
}

/// Read and parse an LRC file.
pub async fn read_lrc_file(path: &Path) -> Result<Vec<LyricLine>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(e, path.to_path_buf()))?;

    // Non-UTF-8 bytes become U+FFFD.
    let content = String::from_utf8_lossy(&bytes);
    let lines = parse_lrc(&content);
    tracing::info!("Parsed {} timed lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_basic_lines() {
        let lines = parse_lrc("[00:01.50]Hello\n[00:03.00]World");
        assert_eq!(
            lines,
            vec![LyricLine::new(1.5, "Hello"), LyricLine::new(3.0, "World")]
        );
    }

    #[test]
    fn combines_minutes_and_seconds() {
        let lines = parse_lrc("[02:05.25]Later");
        assert_eq!(lines.len(), 1);
        assert!((lines[0].time_seconds - 125.25).abs() < 1e-9);
    }

    #[test]
    fn skips_untimed_lines() {
        let content = "[ar:Some Artist]\n[ti:Song]\n\nplain text\n[00:10.00]Kept\n[0:11.00]Short minutes\n";
        let lines = parse_lrc(content);
        assert_eq!(lines, vec![LyricLine::new(10.0, "Kept")]);
    }

    #[test]
    fn handles_any_line_ending() {
        let lines = parse_lrc("[00:01.00]One\r\n[00:02.00]Two\r[00:03.00]Three\n");
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["One", "Two", "Three"]);
    }

    #[test]
    fn trims_text_and_keeps_empty_lines() {
        let lines = parse_lrc("[00:04.00]   spaced out   \n[00:05.00]");
        assert_eq!(lines[0].text, "spaced out");
        assert_eq!(lines[1], LyricLine::new(5.0, ""));
    }

    #[test]
    fn timestamp_may_follow_other_text() {
        let lines = parse_lrc("junk [00:07.00]found");
        assert_eq!(lines, vec![LyricLine::new(7.0, "found")]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = read_lrc_file(Path::new("/nonexistent/lyricscene/song.lrc"))
            .await
            .unwrap_err();
        match err {
            Error::Io { path: Some(p), .. } => assert!(p.ends_with("song.lrc")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_utf8_file_still_yields_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.lrc");
        std::fs::write(&path, b"[00:01.00]cora\xe7\xe3o\n[00:02.00]ok\n").unwrap();

        let lines = read_lrc_file(&path).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].text.starts_with("cora"));
        assert!(lines[0].text.contains('\u{FFFD}'));
        assert_eq!(lines[1], LyricLine::new(2.0, "ok"));
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.lrc");
        std::fs::write(&path, "[00:01.50]Hello\n[00:03.00]World\n").unwrap();

        let lines = read_lrc_file(&path).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "World");
    }
}
