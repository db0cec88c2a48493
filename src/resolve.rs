//! Argument resolution for catclip.
//!
//! Turns the single positional argument into an ordered list of candidate
//! file paths. Resolution is purely syntactic — no filesystem access happens
//! here, so candidates may name files that do not exist.

use std::path::{Path, PathBuf};

/// Resolve `arg` into the ordered list of candidate paths to read.
///
/// If `arg` carries a file-extension suffix the list is exactly `[arg]`.
/// Otherwise `arg` names a header/source base and the list is
/// `[arg.h, arg.cpp]`, in that order.
pub fn candidates(arg: &str) -> Vec<PathBuf> {
    if Path::new(arg).extension().is_some() {
        vec![PathBuf::from(arg)]
    } else {
        vec![
            PathBuf::from(format!("{}.h", arg)),
            PathBuf::from(format!("{}.cpp", arg)),
        ]
    }
}
