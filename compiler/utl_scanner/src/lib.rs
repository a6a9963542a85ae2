//! External token scanner for UTL templates.
//!
//! UTL mixes literal text with `[% ... %]` directives and `/* ... */` block
//! comments. The grammar's own tokenizer cannot tell where a run of literal
//! text ends, so the host parser hands that decision to this crate: it asks
//! for one of the two external token kinds ([`TokenKind::Content`],
//! [`TokenKind::BlockComment`]) and gets back either a committed token or a
//! refusal that leaves its input position untouched.
//!
//! # Layers
//!
//! - [`Lexer`]: the cursor contract a host exposes (lookahead, advance,
//!   skip, `mark_end`).
//! - [`scan`]: the recognition algorithm, generic over any [`Lexer`].
//! - [`ExternalScanner`] / [`UtlScanner`]: the stateless plugin lifecycle
//!   (create, serialize, deserialize, scan).
//! - [`SourceBuffer`] / [`SourceLexer`]: an in-memory host cursor that keeps
//!   the probe position and the committed end apart, so a refused scan can
//!   never move the host.

mod cursor;
mod lexer;
mod scanner;
mod source_buffer;
mod span;
mod token;

pub use cursor::SourceLexer;
pub use lexer::{Lexer, EOF_CHAR};
pub use scanner::{scan, ExternalScanner, UtlScanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use token::{ScannedToken, TokenKind, ValidTokens};
