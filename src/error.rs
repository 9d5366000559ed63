//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// No lyric file was found below the lyrics root
    #[error("No .lrc file found under {root:?}. Expected layout: <root>/<artist>/<album>/<song>.lrc")]
    NoLyricFile {
        /// The directory that was searched.
        root: PathBuf,
    },

    /// The lyric file contained no timed lines
    #[error("No timed lyric lines in {file:?}")]
    EmptyLyrics {
        /// Source file, if known.
        file: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Scene XML could not be written
    #[error("Scene XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn io_error_keeps_path() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            PathBuf::from("/lyrics/a.lrc"),
        );
        match err {
            Error::Io { path: Some(p), .. } => assert_eq!(p, PathBuf::from("/lyrics/a.lrc")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn no_lyric_file_message_names_layout() {
        let err = Error::NoLyricFile { root: PathBuf::from("/lyrics") };
        let msg = err.to_string();
        assert!(msg.contains("/lyrics"));
        assert!(msg.contains("<artist>/<album>"));
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("lyrics root missing", "Set LYRICS_ROOT");
        assert!(err.to_string().ends_with("Set LYRICS_ROOT"));
    }
}
