//! In-memory host cursor over a [`SourceBuffer`].
//!
//! `SourceLexer` plays the host's side of the [`Lexer`] contract for callers
//! that are not a generated parser: the template segmenter, the CLI, tests
//! and benchmarks. It keeps these positions apart:
//!
//! - the host **offset**, where the next scan starts and where the host
//!   believes the input has been consumed up to;
//! - the token **start**, moved by `skip` until the first `advance`;
//! - the **probe**, which the scanner moves with `advance`/`skip`;
//! - the **committed end**, set only by `mark_end`.
//!
//! The offset moves only when a scan succeeds, and then only to the
//! committed end. A refused scan discards the probe.

use tracing::trace;

use crate::{
    ExternalScanner, Lexer, ScannedToken, SourceBuffer, Span, TokenKind, ValidTokens, EOF_CHAR,
};

/// Host-side cursor driving an [`ExternalScanner`] over a [`SourceBuffer`].
#[derive(Clone, Debug)]
pub struct SourceLexer<'a> {
    buffer: &'a SourceBuffer,
    /// Host position: everything before it has been consumed.
    offset: u32,
    /// Token start; moved forward by `skip` until the first `advance`.
    start: u32,
    /// Probe position of the scan in progress.
    pos: u32,
    /// Last `mark_end` position of the scan in progress.
    end: Option<u32>,
    /// Whether the scan in progress has advanced (not just skipped).
    advanced: bool,
    result: Option<TokenKind>,
}

impl<'a> SourceLexer<'a> {
    /// Create a cursor at offset 0.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            buffer,
            offset: 0,
            start: 0,
            pos: 0,
            end: None,
            advanced: false,
            result: None,
        }
    }

    /// The buffer being scanned.
    pub fn buffer(&self) -> &'a SourceBuffer {
        self.buffer
    }

    /// Current host offset.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Whether the host offset has reached end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Move the host offset, e.g. past a token the grammar recognized on its
    /// own. Clamped to the source length.
    pub fn set_offset(&mut self, offset: u32) {
        debug_assert!(
            offset <= self.buffer.len(),
            "offset {offset} past end of source ({})",
            self.buffer.len()
        );
        self.offset = offset.min(self.buffer.len());
    }

    /// Move the host offset forward by `len` bytes.
    pub fn bump(&mut self, len: u32) {
        self.set_offset(self.offset.saturating_add(len));
    }

    /// Move the host offset past one character.
    pub fn bump_char(&mut self) {
        if !self.is_at_end() {
            self.bump(self.char_width(self.offset));
        }
    }

    /// Unconsumed input, from the host offset to the end.
    pub fn rest(&self) -> &'a str {
        self.buffer.slice(Span::new(self.offset, self.buffer.len()))
    }

    /// Text covered by `span`.
    pub fn slice(&self, span: Span) -> &'a str {
        self.buffer.slice(span)
    }

    /// Run one scan at the host offset.
    ///
    /// On success the token spans from the (whitespace-skipped) start to the
    /// committed end, or to the probe if the scanner never committed, and
    /// the host offset moves to its end. On refusal nothing changes.
    pub fn scan_with<S>(&mut self, scanner: &mut S, valid: ValidTokens) -> Option<ScannedToken>
    where
        S: ExternalScanner + ?Sized,
    {
        let offset = self.offset;
        self.begin();
        let accepted = scanner.scan(self, valid);
        let token = if accepted { self.finish() } else { None };
        trace!(offset, ?valid, ?token, "external scan");
        token
    }

    fn begin(&mut self) {
        self.start = self.offset;
        self.pos = self.offset;
        self.end = None;
        self.advanced = false;
        self.result = None;
    }

    fn finish(&mut self) -> Option<ScannedToken> {
        // A scanner that reports success without a kind is treated as a
        // refusal: the host has nothing to build a node from.
        let kind = self.result?;
        let end = self.end.unwrap_or(self.pos);
        let start = self.start.min(end);
        self.offset = end;
        Some(ScannedToken {
            kind,
            span: Span::new(start, end),
        })
    }

    /// Byte width of the character starting at `pos`, clamped to the source.
    fn char_width(&self, pos: u32) -> u32 {
        let lead = self.buffer.as_sentinel_bytes()[pos as usize];
        let width = utf8_char_width(lead);
        width.min(self.buffer.len() - pos)
    }

    fn consume(&mut self) {
        if self.pos < self.buffer.len() {
            self.pos += self.char_width(self.pos);
        }
    }
}

impl Lexer for SourceLexer<'_> {
    fn lookahead(&self) -> char {
        if self.eof() {
            return EOF_CHAR;
        }
        let width = self.char_width(self.pos);
        let span = Span::new(self.pos, self.pos + width);
        std::str::from_utf8(&self.buffer.as_sentinel_bytes()[span.to_range()])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn advance(&mut self) {
        self.consume();
        self.advanced = true;
    }

    fn skip(&mut self) {
        self.consume();
        if !self.advanced {
            self.start = self.pos;
        }
    }

    fn mark_end(&mut self) {
        self.end = Some(self.pos);
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    fn set_result(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }
}

/// Number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
