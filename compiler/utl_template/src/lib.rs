//! UTL template segmentation.
//!
//! Walks a whole template the way the UTL grammar offers tokens to the
//! external scanner: literal text and comments at top level, comments only
//! inside `[% ... %]`. The result is a flat list of [`Segment`]s, enough for
//! tooling that needs to know where directives are without parsing the
//! directive language itself.
//!
//! ```text
//! Hello [%- name /* who */ -%]!
//! ^^^^^^                        Content
//!       ^^^^^^^^^^^^^^^^^^^^^^  Directive (trim both sides, one comment)
//!                             ^ Content
//! ```

mod error;
mod segment;
mod segmenter;

pub use error::TemplateError;
pub use segment::{Directive, Segment, Template};
pub use segmenter::segment;
