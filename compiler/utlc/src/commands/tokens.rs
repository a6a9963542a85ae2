//! `utl tokens`: the raw external-token stream of a file.

use std::fmt::Write;
use std::path::Path;

use utl_scanner::{
    ExternalScanner, ScannedToken, SourceBuffer, SourceLexer, UtlScanner, ValidTokens,
};

/// Scan `source` from start to end, offering `offered` at every position.
///
/// Where the scanner refuses, the position is stepped past the way the
/// grammar's own tokens would take it: a whole `[%` marker, otherwise one
/// character.
pub fn scan_tokens(source: &str, offered: ValidTokens) -> Vec<ScannedToken> {
    let buffer = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(&buffer);
    let mut scanner = UtlScanner::create();
    let mut tokens = Vec::new();

    while !lexer.is_at_end() {
        match lexer.scan_with(&mut scanner, offered) {
            Some(token) => tokens.push(token),
            None if lexer.rest().starts_with("[%") => lexer.bump(2),
            None => lexer.bump_char(),
        }
    }
    tokens
}

/// Listing of the tokens in one file.
pub fn render_tokens(path: &Path, source: &str, offered: ValidTokens) -> String {
    let tokens = scan_tokens(source, offered);
    let mut out = format!(
        "Tokens for '{}' ({} tokens):\n",
        path.display(),
        tokens.len()
    );
    for token in &tokens {
        let _ = writeln!(out, "  {} @ {}", token.kind, token.span);
    }
    out
}
