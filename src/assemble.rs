//! File reading and fragment assembly.
//!
//! For each candidate path this module emits a banner fragment naming the
//! file, followed by the file's full contents. The joined result preserves
//! candidate order, with banners and contents alternating and no extra
//! separators inserted between them.

use std::fs;
use std::path::{Path, PathBuf};

/// Missing-file policy for [`assemble`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Any missing candidate is a fatal error; no partial output is produced.
    Strict,
    /// A missing candidate contributes its banner only and the run continues.
    Lenient,
}

/// Format the banner fragment that precedes a file's contents.
///
/// Only the basename appears in the banner, so the output reads the same no
/// matter which directory the tool was invoked from.
pub fn banner(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("\n---> {} <---\n\n", name)
}

/// Read every candidate in order and join banners and contents into a single
/// string.
///
/// In `Mode::Lenient` a candidate that does not exist is skipped after its
/// banner. A file that exists but cannot be read (permissions, invalid
/// UTF-8) is an error in both modes. Contents are appended verbatim, with no
/// transformation or truncation.
pub fn assemble(paths: &[PathBuf], mode: Mode) -> Result<String, String> {
    let mut fragments: Vec<String> = Vec::with_capacity(paths.len() * 2);
    for path in paths {
        fragments.push(banner(path));
        if mode == Mode::Lenient && !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        fragments.push(contents);
    }
    Ok(fragments.concat())
}
