//! Debug tool to inspect how an LRC file is read and timed.
//!
//! Usage:
//!   `cargo run --bin dump_lrc -- <file.lrc>`
//!   `cargo run --bin dump_lrc -- <file.lrc> --json`
//!   `cargo run --bin dump_lrc -- <file.lrc> --xml`

use std::env;
use std::path::Path;

use anyhow::Context;
use lyricscene::lyrics::parse_lrc;
use lyricscene::scene::{render_document, ExportStamp, RenderConfig, Timeline};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(file) = args.get(1) else {
        eprintln!("Usage: dump_lrc <file.lrc> [--json | --xml]");
        std::process::exit(1);
    };

    let path = Path::new(file);
    let bytes = fs_err::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = parse_lrc(&String::from_utf8_lossy(&bytes));

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    if args.iter().any(|a| a == "--xml") {
        let xml = render_document(&lines, &RenderConfig::for_source(path), &ExportStamp::now())?;
        println!("{xml}");
        return Ok(());
    }

    let timeline = Timeline::from_lines(&lines)?;
    println!("{} ({} timed lines)", path.display(), lines.len());
    println!("├─ Length: {} ms", timeline.total_ms);
    println!("├─ Wave warp phase: {:.6}", timeline.phase_end);
    println!("└─ Cues:");
    for cue in &timeline.cues {
        println!("   {} {:>8} → {:>8}  {}", cue.id, cue.start_ms, cue.end_ms, cue.text);
    }
    Ok(())
}
