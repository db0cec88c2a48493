use std::fs;

use catclip_lib::assemble::{Mode, assemble};
use catclip_lib::clipboard::ClipboardSink;
use catclip_lib::resolve::candidates;

/// In-memory sink standing in for the OS clipboard.
struct CaptureSink(Option<String>);

impl ClipboardSink for CaptureSink {
    fn set_text(&mut self, s: &str) -> Result<(), String> {
        self.0 = Some(s.to_owned());
        Ok(())
    }
}

#[test]
fn integration_pair_assemble_and_publish() {
    // Resolve a bare base name to its .h/.cpp pair, assemble, and verify the
    // captured clipboard text matches what would be printed.
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("widget");
    fs::write(base.with_extension("h"), "struct Widget;\n").expect("write header");
    fs::write(base.with_extension("cpp"), "Widget w;\n").expect("write source");

    let paths = candidates(base.to_str().expect("utf-8 path"));
    assert_eq!(paths.len(), 2);

    let text = assemble(&paths, Mode::Lenient).expect("assemble");
    assert!(text.contains("---> widget.h <---"));
    assert!(text.contains("struct Widget;\n"));
    assert!(text.contains("---> widget.cpp <---"));
    assert!(text.contains("Widget w;\n"));
    assert!(text.find("widget.h").unwrap() < text.find("widget.cpp").unwrap());

    let mut sink = CaptureSink(None);
    sink.set_text(&text).expect("publish");
    assert_eq!(sink.0.as_deref(), Some(text.as_str()));
}

#[test]
fn integration_single_file_exact_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let notes = dir.path().join("notes.md");
    fs::write(&notes, "hello").expect("write");

    let paths = candidates(notes.to_str().expect("utf-8 path"));
    assert_eq!(paths.len(), 1);

    let text = assemble(&paths, Mode::Lenient).expect("assemble");
    assert_eq!(text, "\n---> notes.md <---\n\nhello");

    let mut sink = CaptureSink(None);
    sink.set_text(&text).expect("publish");
    assert_eq!(sink.0.as_deref(), Some("\n---> notes.md <---\n\nhello"));
}

#[test]
fn integration_strict_fails_before_publish() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("missing_basename");

    let paths = candidates(base.to_str().expect("utf-8 path"));
    let mut sink = CaptureSink(None);

    let res = assemble(&paths, Mode::Strict);
    assert!(res.is_err());
    // Nothing reached the sink.
    assert!(sink.0.is_none());

    // The same argument succeeds in lenient mode with banners only.
    let text = assemble(&paths, Mode::Lenient).expect("assemble");
    assert_eq!(
        text,
        "\n---> missing_basename.h <---\n\n\n---> missing_basename.cpp <---\n\n"
    );
    sink.set_text(&text).expect("publish");
    assert_eq!(sink.0.as_deref(), Some(text.as_str()));
}
