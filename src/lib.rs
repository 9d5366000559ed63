//! `lyricscene` - LRC lyrics to Alight Motion scene converter.
//!
//! Finds the newest `.lrc` file in an `artist/album/` library, reads its timed
//! lines and writes a scene project with one animated text element per line.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod scene;
pub mod utils;
