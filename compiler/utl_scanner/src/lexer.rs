//! The cursor contract between a host parser and the external scanner.
//!
//! The host owns the input position. For the duration of one scan it lends
//! the scanner a `Lexer`, which can look at one character, consume it
//! (extending the token or skipping it as leading whitespace), and commit
//! the token end at the current position. Whatever the scanner consumed
//! past the last commit is discarded by the host; if the scan is refused,
//! everything is discarded.

use crate::TokenKind;

/// Lookahead value reported at end of input.
pub const EOF_CHAR: char = '\0';

/// Host-provided cursor, borrowed for a single scan.
pub trait Lexer {
    /// The character at the probe position, or [`EOF_CHAR`] at end of input.
    fn lookahead(&self) -> char;

    /// Consume the lookahead as part of the token.
    fn advance(&mut self);

    /// Consume the lookahead as skipped whitespace. While nothing has been
    /// advanced yet, this moves the token start forward.
    fn skip(&mut self);

    /// Commit the token end at the probe position.
    ///
    /// If the scan succeeds, the token ends at the last committed position.
    fn mark_end(&mut self);

    /// Whether the probe has reached end of input.
    ///
    /// Distinct from `lookahead() == EOF_CHAR`, which is also true for an
    /// interior U+0000.
    fn eof(&self) -> bool;

    /// Record the kind of the token being returned.
    fn set_result(&mut self, kind: TokenKind);
}
