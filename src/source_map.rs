//! Source map collection and Source Map v3 generation.
//!
//! The printer reports node positions through the [`SourceMapSink`] trait;
//! [`SourceMapGenerator`] is the bundled implementation, producing a
//! Source Map v3 document (VLQ-encoded `mappings`, serde-serialized JSON).
//!
//! Format: https://sourcemaps.info/spec.html

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::ast::Position;

/// Receiver for the mappings the printer records: one call per node that
/// carries an original location, made just before the node's first
/// generated character.
pub trait SourceMapSink {
    fn add_mapping(&mut self, source: Option<&str>, original: Position, generated: Position);
}

/// A single original-to-generated position mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub generated: Position,
    pub source_index: u32,
    pub original: Position,
}

/// Source Map v3 output document.
#[derive(Debug, Serialize)]
pub struct SourceMap {
    pub version: u32,
    pub file: String,
    #[serde(rename = "sourceRoot")]
    pub source_root: String,
    pub sources: Vec<String>,
    pub names: Vec<String>,
    pub mappings: String,
}

/// Source name used for mappings whose location does not name a file.
const DEFAULT_SOURCE: &str = "<anonymous>";

/// Builder for Source Map v3 documents.
pub struct SourceMapGenerator {
    file: String,
    sources: Vec<String>,
    source_indices: FxHashMap<String, u32>,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            sources: Vec::new(),
            source_indices: FxHashMap::default(),
            mappings: Vec::new(),
        }
    }

    /// Register a source file and return its index. Repeated names reuse
    /// the original index.
    pub fn add_source(&mut self, source: &str) -> u32 {
        if let Some(&index) = self.source_indices.get(source) {
            return index;
        }
        let index = self.sources.len() as u32;
        self.sources.push(source.to_string());
        self.source_indices.insert(source.to_string(), index);
        index
    }

    /// Recorded mappings, in insertion order.
    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Produce the Source Map v3 document.
    pub fn generate(&mut self) -> SourceMap {
        self.mappings.sort_by(|a, b| {
            (a.generated.line, a.generated.column).cmp(&(b.generated.line, b.generated.column))
        });
        SourceMap {
            version: 3,
            file: self.file.clone(),
            source_root: String::new(),
            sources: self.sources.clone(),
            names: Vec::new(),
            mappings: encode_mappings(&self.mappings),
        }
    }

    /// Produce the document as a JSON string.
    pub fn generate_json(&mut self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.generate())
    }
}

impl SourceMapSink for SourceMapGenerator {
    fn add_mapping(&mut self, source: Option<&str>, original: Position, generated: Position) {
        let source_index = self.add_source(source.unwrap_or(DEFAULT_SOURCE));
        self.mappings.push(Mapping { generated, source_index, original });
    }
}

/// Encode sorted mappings as the `mappings` string: lines separated by
/// `;`, segments by `,`, fields VLQ-encoded relative to the previous
/// segment.
fn encode_mappings(mappings: &[Mapping]) -> String {
    let mut result = String::new();
    let mut current_line = 0u32;
    let mut first_in_line = true;

    let mut prev_generated_column = 0i32;
    let mut prev_source_index = 0i32;
    let mut prev_original_line = 0i32;
    let mut prev_original_column = 0i32;

    for mapping in mappings {
        while current_line < mapping.generated.line {
            result.push(';');
            current_line += 1;
            prev_generated_column = 0;
            first_in_line = true;
        }
        if !first_in_line {
            result.push(',');
        }
        first_in_line = false;

        let generated_column = mapping.generated.column as i32;
        vlq::encode_to(generated_column - prev_generated_column, &mut result);
        prev_generated_column = generated_column;

        let source_index = mapping.source_index as i32;
        vlq::encode_to(source_index - prev_source_index, &mut result);
        prev_source_index = source_index;

        let original_line = mapping.original.line as i32;
        vlq::encode_to(original_line - prev_original_line, &mut result);
        prev_original_line = original_line;

        let original_column = mapping.original.column as i32;
        vlq::encode_to(original_column - prev_original_column, &mut result);
        prev_original_column = original_column;
    }

    result
}

/// VLQ (Variable-Length Quantity) encoding for source map segments.
pub mod vlq {
    const VLQ_BASE_SHIFT: i32 = 5;
    const VLQ_BASE: i32 = 1 << VLQ_BASE_SHIFT;
    const VLQ_BASE_MASK: i32 = VLQ_BASE - 1;
    const VLQ_CONTINUATION_BIT: i32 = VLQ_BASE;

    const BASE64_CHARS: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    /// Encode a signed integer as VLQ directly into `buf`.
    pub fn encode_to(value: i32, buf: &mut String) {
        // Sign goes in the least significant bit.
        let mut vlq = if value < 0 { ((-value) << 1) + 1 } else { value << 1 };
        loop {
            let mut digit = vlq & VLQ_BASE_MASK;
            vlq >>= VLQ_BASE_SHIFT;
            if vlq > 0 {
                digit |= VLQ_CONTINUATION_BIT;
            }
            buf.push(BASE64_CHARS[digit as usize] as char);
            if vlq == 0 {
                break;
            }
        }
    }

    /// Decode one VLQ value, returning `(value, bytes_consumed)`.
    pub fn decode(s: &str) -> Option<(i32, usize)> {
        let mut result: i32 = 0;
        let mut shift = 0;
        let mut consumed = 0;
        for &byte in s.as_bytes() {
            let digit = BASE64_CHARS.iter().position(|&c| c == byte)? as i32;
            result |= (digit & VLQ_BASE_MASK) << shift;
            consumed += 1;
            if (digit & VLQ_CONTINUATION_BIT) == 0 {
                let is_negative = (result & 1) == 1;
                result >>= 1;
                return Some((if is_negative { -result } else { result }, consumed));
            }
            shift += VLQ_BASE_SHIFT;
        }
        None
    }
}
