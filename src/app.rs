//! The lyric-to-scene pipeline.

use std::path::PathBuf;

use crate::config::Config;
use crate::constants::discovery::LYRIC_EXTENSION;
use crate::error::{Error, Result};
use crate::lyrics::read_lrc_file;
use crate::scene::{scene_path, write_scene_file, RenderConfig};
use crate::utils::file_finder::find_latest;

/// Convert the newest lyric file under `config.lyrics_root` into a scene in
/// `config.output_dir`, returning the written path.
pub async fn run(config: &Config) -> Result<PathBuf> {
    let lyric_path = find_latest(&config.lyrics_root, LYRIC_EXTENSION)?
        .ok_or_else(|| Error::NoLyricFile { root: config.lyrics_root.clone() })?;

    let lines = read_lrc_file(&lyric_path).await?;
    if lines.is_empty() {
        return Err(Error::EmptyLyrics { file: Some(lyric_path) });
    }

    fs_err::create_dir_all(&config.output_dir)
        .map_err(|e| Error::io(e, config.output_dir.clone()))?;

    let output_path = scene_path(&config.output_dir, &lyric_path)?;
    write_scene_file(&lines, &output_path, &RenderConfig::for_source(&lyric_path))?;
    Ok(output_path)
}
