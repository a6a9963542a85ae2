//! Segments of a template and the template itself.

use utl_scanner::Span;

/// One top-level piece of a template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text.
    Content { span: Span },
    /// A block comment outside any directive.
    Comment { span: Span },
    /// A `[% ... %]` region.
    Directive(Directive),
}

impl Segment {
    /// Full extent of the segment.
    pub fn span(&self) -> Span {
        match self {
            Segment::Content { span } | Segment::Comment { span } => *span,
            Segment::Directive(directive) => directive.span(),
        }
    }

    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Content { .. } => "content",
            Segment::Comment { .. } => "comment",
            Segment::Directive(_) => "directive",
        }
    }
}

/// A directive region and what the segmenter learned about it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Directive {
    /// `[%` or `[%-`.
    pub open: Span,
    /// Everything between the markers, comments and whitespace included.
    pub body: Span,
    /// `%]` or `-%]`.
    pub close: Span,
    /// Opened with `[%-`.
    pub trim_left: bool,
    /// Closed with `-%]`.
    pub trim_right: bool,
    /// Block comments inside the body, in source order.
    pub comments: Vec<Span>,
}

impl Directive {
    pub fn span(&self) -> Span {
        self.open.merge(self.close)
    }

    /// Body text with surrounding whitespace removed.
    pub fn code<'a>(&self, source: &'a str) -> &'a str {
        source[self.body.to_range()].trim()
    }
}

/// A segmented template: segments in source order, covering the whole
/// input without gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Template { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Directives in source order.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Directive(directive) => Some(directive),
            _ => None,
        })
    }

    /// All literal text, concatenated.
    pub fn content_text(&self, source: &str) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Content { span } => Some(&source[span.to_range()]),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
