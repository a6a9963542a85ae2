//! Drives the external scanner across a whole template.
//!
//! The grammar offers both external kinds at top level
//! (`repeat(choice(content, directive, comment))`) and only comments inside
//! a directive. Everything the scanner refuses is handled here the way the
//! grammar's own tokens would handle it: `[%`/`[%-` open a directive,
//! `%]`/`-%]` close it, whitespace is an extra, and quoted strings are
//! stepped over so a `%]` inside one does not end the directive.

use tracing::{debug, instrument, warn};
use utl_scanner::{
    ExternalScanner, SourceBuffer, SourceLexer, Span, TokenKind, UtlScanner, ValidTokens,
};

use crate::{Directive, Segment, Template, TemplateError};

const DIRECTIVE_OPEN: &str = "[%";
const DIRECTIVE_OPEN_TRIM: &str = "[%-";
const DIRECTIVE_CLOSE: &str = "%]";
const DIRECTIVE_CLOSE_TRIM: &str = "-%]";

/// Split `source` into content, comment and directive segments.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn segment(source: &str) -> Result<Template, TemplateError> {
    let buffer = SourceBuffer::new(source);
    for issue in buffer.encoding_issues() {
        warn!(kind = ?issue.kind, span = %issue.span, "encoding issue in template");
    }

    let mut segmenter = Segmenter {
        lexer: SourceLexer::new(&buffer),
        scanner: UtlScanner::create(),
        segments: Vec::new(),
    };
    segmenter.top_level()?;
    debug!(segments = segmenter.segments.len(), "template segmented");
    Ok(Template::new(segmenter.segments))
}

struct Segmenter<'a> {
    lexer: SourceLexer<'a>,
    scanner: UtlScanner,
    segments: Vec<Segment>,
}

impl Segmenter<'_> {
    fn top_level(&mut self) -> Result<(), TemplateError> {
        while !self.lexer.is_at_end() {
            if let Some(token) = self.lexer.scan_with(&mut self.scanner, ValidTokens::all()) {
                self.segments.push(match token.kind {
                    TokenKind::Content => Segment::Content { span: token.span },
                    TokenKind::BlockComment => Segment::Comment { span: token.span },
                });
                continue;
            }

            let rest = self.lexer.rest();
            if rest.starts_with(DIRECTIVE_OPEN) {
                let directive = self.directive()?;
                self.segments.push(Segment::Directive(directive));
            } else if rest.starts_with("/*") {
                return Err(TemplateError::UnterminatedComment {
                    span: self.span_to_end(),
                });
            } else {
                // A `/` that does not open a comment. The scanner will not
                // fall back to content in the same call, so ask again with
                // only content on offer.
                debug!(offset = self.lexer.offset(), "slash at top level, rescanning as content");
                match self.lexer.scan_with(&mut self.scanner, ValidTokens::CONTENT) {
                    Some(token) => self.segments.push(Segment::Content { span: token.span }),
                    None => self.lexer.bump_char(),
                }
            }
        }
        Ok(())
    }

    /// Host offset is at `[%`.
    fn directive(&mut self) -> Result<Directive, TemplateError> {
        let start = self.lexer.offset();
        let trim_left = self.lexer.rest().starts_with(DIRECTIVE_OPEN_TRIM);
        let open_len = if trim_left { 3 } else { 2 };
        let open = Span::new(start, start + open_len);
        self.lexer.bump(open_len);
        debug!(%open, trim_left, "directive opened");

        let body_start = self.lexer.offset();
        let mut comments = Vec::new();
        loop {
            if let Some(token) = self
                .lexer
                .scan_with(&mut self.scanner, ValidTokens::BLOCK_COMMENT)
            {
                comments.push(token.span);
                continue;
            }

            self.skip_whitespace();
            let offset = self.lexer.offset();
            let rest = self.lexer.rest();
            if rest.is_empty() {
                return Err(TemplateError::UnterminatedDirective { open });
            }

            if let Some(close_len) = close_marker(rest) {
                let close = Span::new(offset, offset + close_len);
                self.lexer.bump(close_len);
                debug!(%close, comments = comments.len(), "directive closed");
                return Ok(Directive {
                    open,
                    body: Span::new(body_start, offset),
                    close,
                    trim_left,
                    trim_right: close_len == 3,
                    comments,
                });
            }

            if rest.starts_with("/*") {
                return Err(TemplateError::UnterminatedComment {
                    span: self.span_to_end(),
                });
            }

            match rest.as_bytes().first() {
                Some(&quote @ (b'"' | b'\'')) => self.skip_string(quote)?,
                _ => self.lexer.bump_char(),
            }
        }
    }

    /// Host offset is at an opening quote. Moves past the closing quote.
    fn skip_string(&mut self, quote: u8) -> Result<(), TemplateError> {
        let rest = self.lexer.rest();
        let bytes = rest.as_bytes();
        let mut i = 1;
        loop {
            match memchr::memchr2(quote, b'\\', &bytes[i..]) {
                Some(off) if bytes[i + off] == quote => {
                    let len = u32::try_from(i + off + 1).unwrap_or(u32::MAX);
                    self.lexer.bump(len);
                    return Ok(());
                }
                Some(off) => {
                    // Step over the backslash and the escaped character.
                    i += off + 1;
                    i += rest[i..].chars().next().map_or(0, char::len_utf8);
                }
                None => {
                    return Err(TemplateError::UnterminatedString {
                        span: self.span_to_end(),
                    });
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.lexer.rest();
        let len = rest.len() - rest.trim_start().len();
        self.lexer.bump(u32::try_from(len).unwrap_or(u32::MAX));
    }

    fn span_to_end(&self) -> Span {
        Span::new(self.lexer.offset(), self.lexer.buffer().len())
    }
}

/// Length of the closing marker at the start of `rest`, if any.
fn close_marker(rest: &str) -> Option<u32> {
    if rest.starts_with(DIRECTIVE_CLOSE_TRIM) {
        Some(3)
    } else if rest.starts_with(DIRECTIVE_CLOSE) {
        Some(2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
