//! Output sink abstraction and generated-position tracking.
//!
//! The printer delegates all text output to [`SourceWriter`], which
//! forwards each chunk to the caller's sink, keeps the generated
//! line/column current, and records source map mappings when a sink for
//! them is attached. Tracking runs on every write path, so the recorded
//! mappings stay accurate for all emitted text.

use crate::ast::{Position, SourceLocation};
use crate::error::PrintError;
use crate::source_map::SourceMapSink;

/// Output sink contract: a single synchronous write, committed in order.
/// No partial writes, no backpressure.
pub trait Output {
    fn write_str(&mut self, text: &str) -> std::io::Result<()>;
}

impl Output for String {
    fn write_str(&mut self, text: &str) -> std::io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapter presenting any [`std::io::Write`] as an [`Output`] sink.
pub struct IoOutput<W: std::io::Write>(pub W);

impl<W: std::io::Write> Output for IoOutput<W> {
    fn write_str(&mut self, text: &str) -> std::io::Result<()> {
        self.0.write_all(text.as_bytes())
    }
}

/// Writer that forwards text to the output sink while tracking the
/// generated line and column.
pub struct SourceWriter<'a> {
    out: &'a mut dyn Output,
    /// Current output line (0-indexed).
    line: u32,
    /// Current output column (0-indexed).
    column: u32,
    source_map: Option<&'a mut dyn SourceMapSink>,
}

impl<'a> SourceWriter<'a> {
    pub fn new(out: &'a mut dyn Output) -> Self {
        Self { out, line: 0, column: 0, source_map: None }
    }

    pub fn with_source_map(out: &'a mut dyn Output, sink: &'a mut dyn SourceMapSink) -> Self {
        Self { out, line: 0, column: 0, source_map: Some(sink) }
    }

    /// Write a chunk of output text.
    pub fn write(&mut self, text: &str) -> Result<(), PrintError> {
        self.out.write_str(text)?;
        self.track(text);
        Ok(())
    }

    /// Record a mapping from `loc` to the current generated position.
    /// Called before the node's first character is written.
    pub fn map(&mut self, loc: &SourceLocation) {
        if let Some(sink) = self.source_map.as_deref_mut() {
            sink.add_mapping(
                loc.source.as_deref(),
                loc.start,
                Position { line: self.line, column: self.column },
            );
        }
    }

    /// Current output line (0-indexed).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current output column (0-indexed).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Advance the tracked position over `text`, scanning for newlines.
    fn track(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match memchr::memchr(b'\n', &bytes[i..]) {
                Some(offset) => {
                    self.line += 1;
                    self.column = 0;
                    i += offset + 1;
                }
                None => {
                    let segment = &text[i..];
                    if segment.is_ascii() {
                        self.column += segment.len() as u32;
                    } else {
                        self.column += segment.chars().count() as u32;
                    }
                    break;
                }
            }
        }
    }
}
