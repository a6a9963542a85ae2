//! Argument parsing for the `utl` binary.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use utl_scanner::ValidTokens;
use utlc::{parse_options, CliError, Command, Options};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn usage_error(list: &[&str]) -> String {
    match parse_options(&args(list)) {
        Err(CliError::Usage(msg)) => msg,
        other => panic!("expected a usage error for {list:?}, got {other:?}"),
    }
}

#[test]
fn tokens_with_defaults() {
    let options = parse_options(&args(&["tokens", "page.utl"])).ok();
    assert_eq!(
        options,
        Some(Options {
            command: Command::Tokens,
            paths: vec![PathBuf::from("page.utl")],
            offered: ValidTokens::all(),
            jobs: None,
            verbose: false,
        })
    );
}

#[test]
fn flags_before_and_after_paths() {
    let options =
        parse_options(&args(&["segments", "-v", "a.utl", "--jobs=4", "b.utl"])).unwrap_or_default();
    assert_eq!(options.command, Command::Segments);
    assert_eq!(
        options.paths,
        vec![PathBuf::from("a.utl"), PathBuf::from("b.utl")]
    );
    assert_eq!(options.jobs, Some(4));
    assert!(options.verbose);
    assert!(options.is_parallel());
}

#[test]
fn offered_kinds_can_be_restricted() {
    let content = parse_options(&args(&["tokens", "--content-only", "x"])).unwrap_or_default();
    assert_eq!(content.offered, ValidTokens::CONTENT);

    let comments = parse_options(&args(&["tokens", "x", "--comments-only"])).unwrap_or_default();
    assert_eq!(comments.offered, ValidTokens::BLOCK_COMMENT);
}

#[test]
fn single_job_or_single_file_is_sequential() {
    let one_job = parse_options(&args(&["tokens", "a", "b", "--jobs=1"])).unwrap_or_default();
    assert!(!one_job.is_parallel());

    let one_file = parse_options(&args(&["tokens", "a"])).unwrap_or_default();
    assert!(!one_file.is_parallel());
}

#[test]
fn usage_errors() {
    assert_eq!(usage_error(&[]), "missing command");
    assert_eq!(usage_error(&["lex", "a"]), "unknown command 'lex'");
    assert_eq!(usage_error(&["tokens"]), "no input files");
    assert_eq!(usage_error(&["tokens", "--fast", "a"]), "unknown option '--fast'");
    assert_eq!(
        usage_error(&["tokens", "a", "--jobs=0"]),
        "invalid job count '0' (expected a positive integer)"
    );
    assert_eq!(
        usage_error(&["tokens", "a", "--jobs=many"]),
        "invalid job count 'many' (expected a positive integer)"
    );
    assert_eq!(
        usage_error(&["tokens", "a", "--content-only", "--comments-only"]),
        "--content-only and --comments-only cannot be combined"
    );
    assert_eq!(
        usage_error(&["segments", "a", "--content-only"]),
        "--content-only only applies to the tokens command"
    );
}
