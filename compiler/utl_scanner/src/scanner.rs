//! Content and block-comment recognition.
//!
//! One call makes a single forward pass over the [`Lexer`]:
//!
//! 1. Inside a directive (comment offered, content not) the host has not
//!    skipped whitespace, so leading whitespace is skipped here first.
//! 2. A `/` with comments offered starts a comment attempt. `/*` runs to
//!    the first `*/`; anything else, or end of input before `*/`, is a
//!    refusal. Content is not tried after a `/` was claimed this way.
//! 3. With content offered, text runs up to the first `[%` or end of input.
//!    A `[%` at the very start of the run is a refusal so the grammar can
//!    take the directive opener itself.
//!
//! Every refusal looks the same to the host, whatever the cause.

use crate::{Lexer, TokenKind, ValidTokens};

/// Scan one external token.
///
/// Returns the recognized kind with the token end committed through
/// [`Lexer::mark_end`], or `None` if no acceptable token starts here. On
/// `None` the host must discard everything the probe consumed.
pub fn scan<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidTokens) -> Option<TokenKind> {
    if valid.is_directive_context() {
        while !lexer.eof() && lexer.lookahead().is_whitespace() {
            lexer.skip();
        }
    }

    if valid.accepts(TokenKind::BlockComment) && lexer.lookahead() == '/' {
        return block_comment(lexer);
    }

    if valid.accepts(TokenKind::Content) {
        return content(lexer);
    }

    None
}

/// Lookahead is `/`.
fn block_comment<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    lexer.mark_end();
    lexer.advance();
    if lexer.lookahead() != '*' {
        return None;
    }
    lexer.advance();

    loop {
        if lexer.eof() {
            // Unterminated: never accepted partially.
            return None;
        }
        if lexer.lookahead() == '*' {
            lexer.advance();
            if lexer.lookahead() == '/' {
                lexer.advance();
                lexer.mark_end();
                return Some(TokenKind::BlockComment);
            }
        } else {
            lexer.advance();
        }
    }
}

fn content<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    let mut has_content = false;

    loop {
        if lexer.eof() {
            if !has_content {
                return None;
            }
            lexer.mark_end();
            return Some(TokenKind::Content);
        }

        if lexer.lookahead() == '[' {
            // Tentative: the run ends here if this is `[%`.
            lexer.mark_end();
            lexer.advance();
            if lexer.lookahead() == '%' {
                return has_content.then_some(TokenKind::Content);
            }
            // Plain bracket, already consumed as content.
            has_content = true;
            continue;
        }

        lexer.advance();
        has_content = true;
    }
}

/// Lifecycle of an external scanner plugin.
///
/// Mirrors the five entry points a generated parser links against:
/// create, destroy (here: `Drop`), serialize, deserialize and scan.
pub trait ExternalScanner {
    /// Create the scanner state for a new parser.
    fn create() -> Self
    where
        Self: Sized;

    /// Write the state needed to resume after an incremental edit into
    /// `buffer`, returning the number of bytes written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state previously written by [`serialize`](Self::serialize).
    /// An empty slice means "reset to the initial state".
    fn deserialize(&mut self, bytes: &[u8]);

    /// Try to recognize one token. On success the kind is reported through
    /// [`Lexer::set_result`] and the end through [`Lexer::mark_end`].
    fn scan<L: Lexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidTokens) -> bool;
}

/// The UTL external scanner.
///
/// Stateless: every scan is a pure function of the lexer and the offered
/// kinds, so serialization writes nothing and one value can be shared
/// freely across threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UtlScanner;

impl ExternalScanner for UtlScanner {
    fn create() -> Self {
        UtlScanner
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _bytes: &[u8]) {}

    fn scan<L: Lexer + ?Sized>(&mut self, lexer: &mut L, valid: ValidTokens) -> bool {
        match scan(lexer, valid) {
            Some(kind) => {
                lexer.set_result(kind);
                true
            }
            None => false,
        }
    }
}
