//! CLI failures.

use std::io;
use std::path::{Path, PathBuf};

use utl_template::TemplateError;

/// Anything that makes `utl` report a file (or the invocation) as failed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", read_message(path, source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}:{column}: {source}", path.display())]
    Template {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: TemplateError,
    },

    #[error("{0}")]
    Usage(String),
}

fn read_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
