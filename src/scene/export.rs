//! Writing scene files to disk.

use std::path::{Path, PathBuf};

use chrono::Local;

use super::template::render_document;
use super::RenderConfig;
use crate::constants::discovery::SCENE_EXTENSION;
use crate::error::{Error, Result};
use crate::lyrics::LyricLine;

/// Export time embedded in a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStamp {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub exported: String,
    /// Milliseconds since the Unix epoch.
    pub modified_ms: i64,
}

impl ExportStamp {
    /// Stamp for the current moment.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            exported: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            modified_ms: now.timestamp_millis(),
        }
    }

    /// Stamp with explicit values.
    pub fn fixed(exported: impl Into<String>, modified_ms: i64) -> Self {
        Self { exported: exported.into(), modified_ms }
    }
}

/// Scene file path for a lyric file: same stem, `.xml`, inside `output_dir`.
pub fn scene_path(output_dir: &Path, lyric_path: &Path) -> Result<PathBuf> {
    let stem = lyric_path.file_stem().ok_or_else(|| {
        Error::Msg(format!("lyric path {} has no file name", lyric_path.display()))
    })?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(SCENE_EXTENSION);
    Ok(output_dir.join(name))
}

/// Render `lines` stamped with the current time and write the scene to `output_path`.
pub fn write_scene_file(lines: &[LyricLine], output_path: &Path, config: &RenderConfig) -> Result<()> {
    let xml = render_document(lines, config, &ExportStamp::now())?;
    fs_err::write(output_path, xml).map_err(|e| Error::io(e, output_path.to_path_buf()))?;
    tracing::info!("Wrote scene {}", output_path.display());
    Ok(())
}
