//! Catclip library crate
//!
//! This crate provides the core functionality for the `catclip` CLI. It is
//! organized into small modules: `resolve` (argument → candidate paths),
//! `assemble` (banner formatting and file concatenation), and `clipboard`
//! (clipboard sink abstraction over `arboard`). The binary `src/main.rs`
//! calls `catclip_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod assemble;
pub mod clipboard;
pub mod resolve;

use clap::{ArgAction, Parser};

use crate::assemble::{Mode, assemble};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::resolve::candidates;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Full file path (with extension), or a base name resolved to
    /// <name>.h and <name>.cpp
    target: String,

    /// Abort on the first missing file instead of skipping it
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,
}

/// Run the Catclip CLI.
///
/// This function is the high-level entrypoint used by the `catclip` binary.
/// It parses the single positional argument, resolves it to candidate paths,
/// assembles the banner-plus-contents text, prints it to stdout, and copies
/// it to the system clipboard.
///
/// Behavior summary:
/// - by default, missing files degrade to a banner-only fragment and the run
///   still succeeds (lenient mode).
/// - with `--strict`, any missing or unreadable file is fatal: the error is
///   printed to stderr and the process exits non-zero before anything
///   reaches stdout or the clipboard.
/// - clipboard failure is never fatal; the text was already printed, so a
///   warning on stderr is enough.
///
/// Example:
///
/// ```no_run
/// catclip_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    let mode = if cli.strict { Mode::Strict } else { Mode::Lenient };

    let paths = candidates(&cli.target);
    let text = assemble(&paths, mode).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    print!("{}", text);

    if let Err(e) = SystemClipboard.set_text(&text) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
}
