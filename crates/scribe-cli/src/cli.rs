use std::path::PathBuf;

use clap::Parser;
use scribe_ai::Mode;

/// Scribe: run an AI palette action over a text file.
#[derive(Parser, Debug)]
#[command(name = "scribe", version, about)]
pub struct Args {
    /// Document to edit.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Palette mode (fix, improve, chart, zap, continue).
    #[arg(short, long)]
    pub mode: Mode,

    /// Command text. Defaults to the selected text; for `zap` this is the
    /// instruction.
    #[arg(short, long)]
    pub command: Option<String>,

    /// Selection start, in characters.
    #[arg(long)]
    pub from: Option<usize>,

    /// Selection end, in characters. Defaults to the end of the document.
    #[arg(long)]
    pub to: Option<usize>,

    /// Refine the first completion with this instruction.
    #[arg(long)]
    pub follow_up: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `scribe=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Session id. A fresh one is generated when neither this nor the
    /// config sets one.
    #[arg(long)]
    pub session: Option<String>,

    /// Write the edited document back to `--file`.
    #[arg(long)]
    pub write: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
