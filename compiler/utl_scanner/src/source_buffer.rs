//! Sentinel-terminated source buffer for the in-memory host cursor.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can read one position past the end without a bounds
//! check failing. The total size is rounded up to the next 64-byte boundary
//! for cache-line alignment, which also gives multi-byte lookahead near the
//! end of input zero padding to land on.
//!
//! # Encoding issues
//!
//! During construction the buffer records a leading UTF-8 BOM and interior
//! null bytes as [`EncodingIssue`] values. Neither changes how the scanner
//! behaves (an interior U+0000 is ordinary content); hosts surface them as
//! warnings.

use crate::Span;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Location of the offending bytes.
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start. It becomes part of the
    /// first content run.
    Utf8Bom,
    /// Null byte (U+0000) inside the source.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated, cache-line padded buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes; spans are `u32` offsets.
    pub fn new(source: &str) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let source_bytes = &source.as_bytes()[..source_len as usize];
        let len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source_bytes, &mut encoding_issues);

        Self {
            buf,
            source_len,
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Text covered by `span`.
    ///
    /// Returns an empty string if the span is out of range or does not fall
    /// on character boundaries.
    pub fn slice(&self, span: Span) -> &str {
        if span.start > span.end || span.end > self.source_len {
            return "";
        }
        std::str::from_utf8(&self.buf[span.to_range()]).unwrap_or("")
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            span: Span::new(0, 3),
        });
    }

    // memchr for the null search instead of a byte-at-a-time loop.
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                span: Span::new(p, p + 1),
            });
        }
        offset = absolute + 1;
    }
}
