//! Lyric file discovery in an `artist/album/` library tree.
//!
//! Only files exactly two directories below the root are candidates:
//!
//! ```text
//! root/
//!   Artist/
//!     Album/
//!       Song.lrc   <- candidate
//!     Loose.lrc    <- ignored
//!   Stray.lrc      <- ignored
//! ```

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Depth of song files below the root (`artist` = 1, `album` = 2).
const SONG_DEPTH: usize = 3;

/// Find the most recently modified file ending in `.{extension}`.
///
/// Returns `Ok(None)` when the tree holds no candidate. Ties on modification
/// time go to the entry visited last; siblings are visited in file name order.
pub fn find_latest(root: &Path, extension: &str) -> Result<Option<PathBuf>> {
    let started = Instant::now();
    let suffix = format!(".{extension}");
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    let walker = WalkDir::new(root)
        .max_depth(SONG_DEPTH)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(Error::io(std::io::Error::from(e), root.to_path_buf()));
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };

        if entry.depth() != SONG_DEPTH || entry.file_type().is_dir() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));
        if !matches {
            continue;
        }

        // Follows symlinked songs; `entry.metadata()` would not.
        let modified = match fs_err::metadata(entry.path()).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", entry.path().display());
                continue;
            }
        };

        tracing::debug!("Candidate {} modified {modified:?}", entry.path().display());

        if latest.as_ref().is_none_or(|(best, _)| modified >= *best) {
            latest = Some((modified, entry.into_path()));
        }
    }

    let elapsed = started.elapsed();
    match &latest {
        Some((_, path)) => tracing::info!("Latest lyric file {} (searched in {elapsed:?})", path.display()),
        None => tracing::info!("No *{suffix} files under {} ({elapsed:?})", root.display()),
    }

    Ok(latest.map(|(_, path)| path))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    fn touch(path: &Path, secs_after_epoch: u64) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let file = File::create(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs_after_epoch))
            .unwrap();
    }

    #[test]
    fn picks_newest_song() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A/One/old.lrc"), 1_000);
        touch(&root.join("A/Two/newest.lrc"), 3_000);
        touch(&root.join("B/Three/middle.lrc"), 2_000);

        let found = find_latest(root, "lrc").unwrap();
        assert_eq!(found, Some(root.join("A/Two/newest.lrc")));
    }

    #[test]
    fn ignores_files_at_other_depths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A/Album/song.lrc"), 1_000);
        touch(&root.join("stray.lrc"), 9_000);
        touch(&root.join("A/loose.lrc"), 9_000);
        touch(&root.join("A/Album/Disc 1/deep.lrc"), 9_000);

        let found = find_latest(root, "lrc").unwrap();
        assert_eq!(found, Some(root.join("A/Album/song.lrc")));
    }

    #[test]
    fn ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A/Album/song.lrc"), 1_000);
        touch(&root.join("A/Album/song.txt"), 9_000);
        touch(&root.join("A/Album/other.LRC"), 9_000);

        let found = find_latest(root, "lrc").unwrap();
        assert_eq!(found, Some(root.join("A/Album/song.lrc")));
    }

    #[test]
    fn tie_goes_to_last_visited() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A/Album/a.lrc"), 5_000);
        touch(&root.join("A/Album/b.lrc"), 5_000);

        let found = find_latest(root, "lrc").unwrap();
        assert_eq!(found, Some(root.join("A/Album/b.lrc")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_album_is_not_searched() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("A/Real/song.lrc"), 1_000);
        touch(&elsewhere.path().join("Linked/newer.lrc"), 9_000);
        std::os::unix::fs::symlink(elsewhere.path().join("Linked"), root.join("A/Linked")).unwrap();
        std::os::unix::fs::symlink(elsewhere.path(), root.join("B")).unwrap();

        let found = find_latest(root, "lrc").unwrap();
        assert_eq!(found, Some(root.join("A/Real/song.lrc")));
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("A/Album")).unwrap();
        assert_eq!(find_latest(dir.path(), "lrc").unwrap(), None);
    }

    #[test]
    fn missing_root_is_io_error() {
        let err = find_latest(Path::new("/nonexistent/lyricscene/root"), "lrc").unwrap_err();
        assert!(matches!(err, Error::Io { path: Some(_), .. }));
    }
}
