//! Command-line driver for the UTL template scanner.
//!
//! The `utl` binary is a thin shell over this library: argv is parsed into
//! [`Options`], tracing is installed, and [`commands::run`] produces one
//! report per input file.

pub mod commands;
mod error;
mod options;
mod tracing_setup;

pub use error::CliError;
pub use options::{parse_options, Command, Options, USAGE};
pub use tracing_setup::init_tracing;
