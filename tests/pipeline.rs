//! End-to-end tests for the lyric-to-scene pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use lyricscene::app::run;
use lyricscene::config::Config;
use lyricscene::error::Error;

fn write_song(path: &Path, content: &str, secs_after_epoch: u64) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs_after_epoch))
        .unwrap();
}

#[tokio::test]
async fn converts_newest_song() {
    let lyrics = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("xmls");

    write_song(&lyrics.path().join("Artist/Old Album/Old.lrc"), "[00:01.00]old\n", 1_000);
    write_song(
        &lyrics.path().join("Artist/New Album/New Song.lrc"),
        "[ti:New Song]\n[00:01.50]Hello\r\n[00:03.00]World\r\n",
        2_000,
    );

    let config = Config::with_paths(lyrics.path(), &out_dir);
    let written = run(&config).await.unwrap();

    assert_eq!(written, out_dir.join("New Song.xml"));
    let xml = fs::read_to_string(&written).unwrap();
    assert!(xml.contains("<scene title=\"New Song\""));
    assert!(xml.contains("<bookmark t=\"1500\"/>"));
    assert!(xml.contains("<text id=\"3130051\" startTime=\"3000\" endTime=\"6000\""));
    assert!(!xml.contains("<content>old</content>"));
}

#[tokio::test]
async fn empty_library_reports_missing_file() {
    let lyrics = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::create_dir_all(lyrics.path().join("Artist/Album")).unwrap();

    let config = Config::with_paths(lyrics.path(), out.path().join("xmls"));
    let err = run(&config).await.unwrap_err();

    assert!(matches!(err, Error::NoLyricFile { .. }));
    assert!(!out.path().join("xmls").exists());
}

#[tokio::test]
async fn untimed_file_is_rejected() {
    let lyrics = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_song(&lyrics.path().join("A/B/Plain.lrc"), "[ar:Nobody]\nno timestamps\n", 1_000);

    let config = Config::with_paths(lyrics.path(), out.path());
    let err = run(&config).await.unwrap_err();

    match err {
        Error::EmptyLyrics { file: Some(p) } => assert!(p.ends_with("Plain.lrc")),
        other => panic!("Expected EmptyLyrics, got {other:?}"),
    }
}
