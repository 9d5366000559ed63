//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Lyric file discovery constants.
pub mod discovery {
    /// Extension of the lyric files searched for (without the dot).
    pub const LYRIC_EXTENSION: &str = "lrc";

    /// Extension of the generated scene files (without the dot).
    pub const SCENE_EXTENSION: &str = "xml";

    /// Environment variable overriding the lyrics root directory.
    pub const LYRICS_ROOT_VAR: &str = "LYRICS_ROOT";

    /// Environment variable overriding the scene output directory.
    pub const OUTPUT_DIR_VAR: &str = "LYRICS_OUTPUT_DIR";

    /// Lyrics root below the home directory when no override is set.
    pub const DEFAULT_LYRICS_DIR: &str = "Lyrics";

    /// Output directory below the home directory when no override is set.
    pub const DEFAULT_OUTPUT_DIR: &str = "xmls";
}

/// Scene rendering defaults.
pub mod render {
    /// Default scene width in pixels.
    pub const DEFAULT_WIDTH: u32 = 720;

    /// Default scene height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 720;

    /// Default frame rate.
    pub const DEFAULT_FPS: u32 = 48;

    /// Default watermark shown for the whole video.
    pub const DEFAULT_WATERMARK: &str = "@hirozn";
}

/// Timeline computation constants.
pub mod timeline {
    /// How long the final lyric line stays on screen.
    pub const LAST_LINE_HOLD_MS: u64 = 3000;

    /// How long the watermark outlives the final lyric line start.
    pub const WATERMARK_TAIL_MS: u64 = 5000;

    /// Wave warp phase advance per minute of song.
    pub const PHASE_PER_MINUTE: f64 = 3.75;

    /// Element id of the first lyric text element.
    pub const FIRST_CUE_ID: u64 = 3_130_050;
}

/// Identity of the editor build the scene claims to come from.
pub mod editor {
    /// Editor version written into the creator comment.
    pub const VERSION_LINE: &str = "5.0.270.1002578 (1002351)";

    /// `amver` attribute.
    pub const AMVER: &str = "1002351";

    /// `ffver` attribute.
    pub const FFVER: &str = "106";

    /// `am` attribute.
    pub const AM: &str = "com.alightcreative.motioo/5.0.270.1002578";

    /// `amplatform` attribute.
    pub const PLATFORM: &str = "android";
}
