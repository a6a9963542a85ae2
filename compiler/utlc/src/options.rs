//! Command-line options.

use std::path::PathBuf;

use utl_scanner::ValidTokens;

use crate::CliError;

pub const USAGE: &str = "\
Usage: utl <command> <file>... [options]

Commands:
  tokens      Print the external tokens the scanner recognizes
  segments    Print content, comment and directive segments

Options:
  --content-only    Offer only content tokens (tokens)
  --comments-only   Offer only block comments (tokens)
  --jobs=<n>        Worker threads for multiple files (1 = sequential)
  -v, --verbose     Debug logging when UTL_LOG is not set
";

/// What to do with each input file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    Tokens,
    Segments,
}

/// Everything `utl` needs to know about one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub paths: Vec<PathBuf>,
    /// Kinds offered to the scanner by `tokens`.
    pub offered: ValidTokens,
    /// Worker threads; `None` lets rayon decide.
    pub jobs: Option<usize>,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            command: Command::Tokens,
            paths: Vec::new(),
            offered: ValidTokens::all(),
            jobs: None,
            verbose: false,
        }
    }
}

impl Options {
    /// Whether files should be spread over a thread pool.
    pub fn is_parallel(&self) -> bool {
        self.paths.len() > 1 && self.jobs != Some(1)
    }
}

/// Parse the arguments after the program name.
///
/// Flags may appear before or after the file paths.
pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };
    let command = match command.as_str() {
        "tokens" => Command::Tokens,
        "segments" => Command::Segments,
        other => return Err(CliError::Usage(format!("unknown command '{other}'"))),
    };

    let mut options = Options {
        command,
        ..Options::default()
    };
    let mut restricted: Option<&str> = None;

    for arg in rest.iter().map(String::as_str) {
        if arg == "--content-only" || arg == "--comments-only" {
            if let Some(previous) = restricted {
                if previous != arg {
                    return Err(CliError::Usage(format!(
                        "{previous} and {arg} cannot be combined"
                    )));
                }
            }
            restricted = Some(arg);
            options.offered = if arg == "--content-only" {
                ValidTokens::CONTENT
            } else {
                ValidTokens::BLOCK_COMMENT
            };
        } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
            options.jobs = Some(parse_jobs(jobs)?);
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }

    if let Some(flag) = restricted {
        if options.command != Command::Tokens {
            return Err(CliError::Usage(format!(
                "{flag} only applies to the tokens command"
            )));
        }
    }
    if options.paths.is_empty() {
        return Err(CliError::Usage("no input files".to_string()));
    }
    Ok(options)
}

fn parse_jobs(value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(CliError::Usage(format!(
            "invalid job count '{value}' (expected a positive integer)"
        ))),
        Ok(jobs) => Ok(jobs),
    }
}
