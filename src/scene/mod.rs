//! Alight Motion scene generation.
//!
//! Turns timed lyric lines into the fixed scene project format: a backdrop,
//! a rounded mask, and an effect group whose nested scene carries one text
//! element per lyric line.

pub mod builder;
pub mod export;
pub mod template;
pub mod timeline;

use std::path::Path;

use crate::constants::render;

// Re-export commonly used types
pub use builder::{PropertyType, SceneWriter};
pub use export::{scene_path, write_scene_file, ExportStamp};
pub use template::render_document;
pub use timeline::{Cue, Timeline};

/// Scene-level rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Scene title shown in the editor.
    pub title: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
    /// Text shown for the whole video below the lyrics, if any.
    pub watermark: Option<String>,
    /// Escape `<`, `&` and friends in lyric text. When false, lyric text is
    /// written verbatim and markup in it ends up in the document.
    pub escape_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: render::DEFAULT_WIDTH,
            height: render::DEFAULT_HEIGHT,
            fps: render::DEFAULT_FPS,
            watermark: Some(render::DEFAULT_WATERMARK.to_string()),
            escape_text: true,
        }
    }
}

impl RenderConfig {
    /// Defaults titled after the lyric file's name without extension.
    pub fn for_source(lyric_path: &Path) -> Self {
        let title = lyric_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { title, ..Self::default() }
    }
}
