//! Errors surfaced while segmenting a template.
//!
//! The external scanner only ever refuses; these are the host's reading of
//! why a refusal could not be recovered from.

use utl_scanner::Span;

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TemplateError {
    /// `/*` with no closing `*/` before end of input.
    #[error("unterminated block comment starting at {span}")]
    UnterminatedComment { span: Span },
    /// `[%` with no closing `%]` before end of input.
    #[error("directive opened at {open} is never closed")]
    UnterminatedDirective { open: Span },
    /// Quoted string inside a directive with no closing quote.
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },
}

impl TemplateError {
    /// Where the problem starts. For unterminated constructs the span runs
    /// to end of input.
    pub fn span(&self) -> Span {
        match self {
            TemplateError::UnterminatedComment { span }
            | TemplateError::UnterminatedString { span } => *span,
            TemplateError::UnterminatedDirective { open } => *open,
        }
    }
}
