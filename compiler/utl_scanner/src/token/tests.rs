use super::*;

// === TokenKind symbols ===

#[test]
fn symbols_follow_externals_order() {
    assert_eq!(TokenKind::Content.symbol(), 0);
    assert_eq!(TokenKind::BlockComment.symbol(), 1);
    assert_eq!(TokenKind::ALL.len(), TokenKind::COUNT);
}

#[test]
fn from_symbol_inverts_symbol() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
    }
    assert_eq!(TokenKind::from_symbol(2), None);
    assert_eq!(TokenKind::from_symbol(u16::MAX), None);
}

#[test]
fn names_match_grammar() {
    assert_eq!(TokenKind::Content.name(), "content");
    assert_eq!(TokenKind::BlockComment.name(), "comment");
    assert_eq!(TokenKind::BlockComment.to_string(), "comment");
}

#[test]
fn kind_is_two_bytes() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 2);
}

// === ValidTokens ===

#[test]
fn from_symbols_reads_each_slot() {
    assert_eq!(ValidTokens::from_symbols(&[false, false]), ValidTokens::empty());
    assert_eq!(ValidTokens::from_symbols(&[true, false]), ValidTokens::CONTENT);
    assert_eq!(
        ValidTokens::from_symbols(&[false, true]),
        ValidTokens::BLOCK_COMMENT
    );
    assert_eq!(ValidTokens::from_symbols(&[true, true]), ValidTokens::all());
}

#[test]
fn from_symbols_tolerates_short_and_long_arrays() {
    assert_eq!(ValidTokens::from_symbols(&[]), ValidTokens::empty());
    assert_eq!(ValidTokens::from_symbols(&[true]), ValidTokens::CONTENT);
    assert_eq!(
        ValidTokens::from_symbols(&[false, true, true, true]),
        ValidTokens::BLOCK_COMMENT
    );
}

#[test]
fn accepts_checks_membership() {
    let valid = ValidTokens::CONTENT;
    assert!(valid.accepts(TokenKind::Content));
    assert!(!valid.accepts(TokenKind::BlockComment));
    assert!(!ValidTokens::empty().accepts(TokenKind::Content));
}

#[test]
fn directive_context_needs_comment_without_content() {
    assert!(ValidTokens::BLOCK_COMMENT.is_directive_context());
    assert!(!ValidTokens::all().is_directive_context());
    assert!(!ValidTokens::CONTENT.is_directive_context());
    assert!(!ValidTokens::empty().is_directive_context());
}

// === ScannedToken ===

#[test]
fn text_slices_source() {
    let token = ScannedToken {
        kind: TokenKind::BlockComment,
        span: Span::new(3, 10),
    };
    assert_eq!(token.text("   /* c */ tail"), "/* c */");
}
