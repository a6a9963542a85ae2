use pretty_assertions::assert_eq;

use super::*;

fn labels(source: &str) -> Vec<(&'static str, String)> {
    match segment(source) {
        Ok(template) => template
            .iter()
            .map(|seg| (seg.label(), source[seg.span().to_range()].to_owned()))
            .collect(),
        Err(err) => panic!("segmenting {source:?} failed: {err}"),
    }
}

fn pairs(expected: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    expected
        .iter()
        .map(|(label, text)| (*label, (*text).to_owned()))
        .collect()
}

// === Top level ===

#[test]
fn empty_template_has_no_segments() {
    assert_eq!(segment(""), Ok(Template::default()));
}

#[test]
fn plain_text_is_one_content_segment() {
    assert_eq!(labels("just text\n"), pairs(&[("content", "just text\n")]));
}

#[test]
fn content_and_directives_alternate() {
    assert_eq!(
        labels("hello [% x %] world"),
        pairs(&[
            ("content", "hello "),
            ("directive", "[% x %]"),
            ("content", " world"),
        ])
    );
}

#[test]
fn adjacent_directives() {
    assert_eq!(
        labels("[% a %][% b %]"),
        pairs(&[("directive", "[% a %]"), ("directive", "[% b %]")])
    );
}

#[test]
fn top_level_comment_then_content() {
    assert_eq!(
        labels("/* note */text"),
        pairs(&[("comment", "/* note */"), ("content", "text")])
    );
}

#[test]
fn slash_after_directive_is_rescanned_as_content() {
    assert_eq!(
        labels("[% url %]/path/to"),
        pairs(&[("directive", "[% url %]"), ("content", "/path/to")])
    );
}

#[test]
fn unterminated_top_level_comment() {
    assert_eq!(
        segment("a [% x %]/* open"),
        Err(TemplateError::UnterminatedComment {
            span: Span::new(9, 16),
        })
    );
}

// === Directives ===

#[test]
fn directive_parts() {
    let source = "[%- if x /* check */ -%]";
    let template = segment(source).unwrap_or_default();
    let directives: Vec<&Directive> = template.directives().collect();
    assert_eq!(directives.len(), 1);
    let directive = directives[0];
    assert_eq!(directive.open, Span::new(0, 3));
    assert_eq!(directive.close, Span::new(21, 24));
    assert!(directive.trim_left);
    assert!(directive.trim_right);
    assert_eq!(directive.comments, vec![Span::new(9, 20)]);
    assert_eq!(directive.code(source), "if x /* check */");
}

#[test]
fn plain_markers_are_not_trimming() {
    let template = segment("[% x %]").unwrap_or_default();
    let directive = template.directives().next().cloned();
    assert_eq!(directive.map(|d| (d.trim_left, d.trim_right)), Some((false, false)));
}

#[test]
fn empty_directive() {
    let source = "[%%]";
    let template = segment(source).unwrap_or_default();
    let directive = template.directives().next().cloned();
    assert_eq!(directive.map(|d| d.body), Some(Span::point(2)));
}

#[test]
fn comments_inside_directive_are_collected() {
    let source = "[% /* a */ x = 1; /* b */ %]";
    let template = segment(source).unwrap_or_default();
    let comments: Vec<&str> = template
        .directives()
        .flat_map(|d| d.comments.iter().map(|span| &source[span.to_range()]))
        .collect();
    assert_eq!(comments, vec!["/* a */", "/* b */"]);
}

#[test]
fn close_marker_inside_comment_does_not_close() {
    assert_eq!(
        labels("[% /* %] */ x %]tail"),
        pairs(&[("directive", "[% /* %] */ x %]"), ("content", "tail")])
    );
}

#[test]
fn close_marker_inside_string_does_not_close() {
    assert_eq!(
        labels(r#"[% echo "100%]"; %]!"#),
        pairs(&[("directive", r#"[% echo "100%]"; %]"#), ("content", "!")])
    );
}

#[test]
fn escaped_quote_inside_string() {
    assert_eq!(
        labels(r"[% echo 'it\'s %]'; %]"),
        pairs(&[("directive", r"[% echo 'it\'s %]'; %]")])
    );
}

#[test]
fn division_inside_directive_is_not_a_comment() {
    assert_eq!(
        labels("[% x = a / b; %]"),
        pairs(&[("directive", "[% x = a / b; %]")])
    );
}

#[test]
fn directive_open_inside_directive_is_code() {
    assert_eq!(
        labels("[% x = [%]"),
        pairs(&[("directive", "[% x = [%]")])
    );
}

// === Errors ===

#[test]
fn unterminated_directive() {
    assert_eq!(
        segment("text [% if x"),
        Err(TemplateError::UnterminatedDirective {
            open: Span::new(5, 7),
        })
    );
}

#[test]
fn unterminated_comment_inside_directive() {
    assert_eq!(
        segment("[% x /* y %]"),
        Err(TemplateError::UnterminatedComment {
            span: Span::new(5, 12),
        })
    );
}

#[test]
fn unterminated_string_inside_directive() {
    assert_eq!(
        segment("[% echo \"abc %]"),
        Err(TemplateError::UnterminatedString {
            span: Span::new(8, 15),
        })
    );
}

#[test]
fn backslash_at_end_of_string() {
    assert_eq!(
        segment("[% 'a\\"),
        Err(TemplateError::UnterminatedString {
            span: Span::new(3, 6),
        })
    );
}

#[test]
fn error_messages() {
    let err = TemplateError::UnterminatedDirective {
        open: Span::new(5, 7),
    };
    assert_eq!(err.to_string(), "directive opened at 5..7 is never closed");
    assert_eq!(err.span(), Span::new(5, 7));
    assert_eq!(
        TemplateError::UnterminatedComment {
            span: Span::new(1, 4)
        }
        .to_string(),
        "unterminated block comment starting at 1..4"
    );
}
