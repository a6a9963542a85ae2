//! `utl segments`: content, comment and directive segments of a file.

use std::fmt::Write;
use std::path::Path;

use utl_template::{segment, Segment};

use crate::CliError;

/// Listing of the segments in one file, or where segmentation failed.
pub fn render_segments(path: &Path, source: &str) -> Result<String, CliError> {
    let template = segment(source).map_err(|err| {
        let (line, column) = line_col(source, err.span().start);
        CliError::Template {
            path: path.to_path_buf(),
            line,
            column,
            source: err,
        }
    })?;

    let mut out = format!(
        "Segments for '{}' ({} segments):\n",
        path.display(),
        template.len()
    );
    for seg in &template {
        let span = seg.span();
        let (line, column) = line_col(source, span.start);
        let _ = write!(out, "  {line}:{column} {:<9} {span}", seg.label());
        if let Segment::Directive(directive) = seg {
            let _ = write!(out, " {:?}", directive.code(source));
            if !directive.comments.is_empty() {
                let _ = write!(out, " ({} comments)", directive.comments.len());
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// 1-based line and character column of byte `offset` in `source`.
///
/// Offsets past the end or inside a character are clamped back to the
/// nearest character boundary.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let mut offset = usize::try_from(offset).map_or(source.len(), |o| o.min(source.len()));
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
