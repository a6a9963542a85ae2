//! External token kinds and the set of kinds a host will accept.
//!
//! The discriminants of [`TokenKind`] are the symbol indices the grammar
//! assigns to its `externals` list (`content` first, `comment` second), so a
//! kind can be written straight into a host's `result_symbol` slot.

use std::fmt;

use bitflags::bitflags;

use crate::Span;

/// A token kind recognized by the external scanner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum TokenKind {
    /// A maximal run of literal template text between directive markers.
    Content = 0,
    /// A `/* ... */` comment.
    BlockComment = 1,
}

impl TokenKind {
    /// Number of external token kinds (length of a host's valid-symbols array).
    pub const COUNT: usize = 2;

    /// All kinds in symbol order.
    pub const ALL: [TokenKind; Self::COUNT] = [TokenKind::Content, TokenKind::BlockComment];

    /// Symbol index of this kind in the grammar's `externals` list.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Look up a kind by its grammar symbol index.
    pub const fn from_symbol(symbol: u16) -> Option<TokenKind> {
        match symbol {
            0 => Some(TokenKind::Content),
            1 => Some(TokenKind::BlockComment),
            _ => None,
        }
    }

    /// Name the grammar uses for this external token.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Content => "content",
            TokenKind::BlockComment => "comment",
        }
    }

    /// The single-kind [`ValidTokens`] set for this kind.
    #[inline]
    pub const fn flag(self) -> ValidTokens {
        match self {
            TokenKind::Content => ValidTokens::CONTENT,
            TokenKind::BlockComment => ValidTokens::BLOCK_COMMENT,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The token kinds the host parser will accept at the current position.
    ///
    /// Any subset is legal, including the empty set. The scanner must not
    /// assume both kinds are offered together.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidTokens: u8 {
        /// Literal text is acceptable here (outside directives).
        const CONTENT = 1 << 0;
        /// A block comment is acceptable here.
        const BLOCK_COMMENT = 1 << 1;
    }
}

impl ValidTokens {
    /// Build the set from a host's valid-symbols array, indexed by
    /// [`TokenKind::symbol`]. Missing trailing entries count as `false`.
    pub fn from_symbols(valid: &[bool]) -> ValidTokens {
        TokenKind::ALL
            .iter()
            .filter(|kind| valid.get(usize::from(kind.symbol())).copied() == Some(true))
            .fold(ValidTokens::empty(), |set, kind| set | kind.flag())
    }

    /// Whether `kind` may be returned.
    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.flag())
    }

    /// Comment offered without content: the cursor is inside a directive,
    /// where the host has not skipped whitespace before calling out.
    #[inline]
    pub fn is_directive_context(self) -> bool {
        self.accepts(TokenKind::BlockComment) && !self.accepts(TokenKind::Content)
    }
}

/// A token committed by a scan, as seen by the host.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScannedToken {
    pub kind: TokenKind,
    pub span: Span,
}

impl ScannedToken {
    /// Text of the token within `source`.
    ///
    /// `source` must be the text the token was scanned from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.to_range()]
    }
}

#[cfg(test)]
mod tests;
