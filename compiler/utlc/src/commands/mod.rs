//! Command handlers for the `utl` CLI.
//!
//! Each submodule renders one command's report for a single file. [`run`]
//! reads the inputs and fans them out over a rayon pool when there is more
//! than one.

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{CliError, Command, Options};

mod segments;
mod tokens;

pub use segments::{line_col, render_segments};
pub use tokens::{render_tokens, scan_tokens};

/// Run the selected command over every input, returning one report per
/// path in input order.
pub fn run(options: &Options) -> Vec<Result<String, CliError>> {
    if options.is_parallel() {
        run_parallel(options)
    } else {
        run_sequential(options)
    }
}

fn run_sequential(options: &Options) -> Vec<Result<String, CliError>> {
    options
        .paths
        .iter()
        .map(|path| process_file(options, path))
        .collect()
}

/// Uses a scoped pool so worker threads are joined before returning.
fn run_parallel(options: &Options) -> Vec<Result<String, CliError>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        builder = builder.num_threads(jobs);
    }
    debug!(files = options.paths.len(), jobs = ?options.jobs, "processing files in parallel");

    builder
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                options
                    .paths
                    .par_iter()
                    .map(|path| process_file(options, path))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), running sequentially");
            run_sequential(options)
        })
}

fn process_file(options: &Options, path: &Path) -> Result<String, CliError> {
    let source = read_file(path)?;
    match options.command {
        Command::Tokens => Ok(render_tokens(path, &source, options.offered)),
        Command::Segments => render_segments(path, &source),
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
