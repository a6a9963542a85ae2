//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used by `--verbose` when no environment filter is set.
const VERBOSE_FILTER: &str = "utl_scanner=debug,utl_template=debug,utlc=debug";

/// Initialize tracing for diagnostic output on stderr.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `UTL_LOG=utl_template=debug` (or `RUST_LOG`); set
/// `UTL_LOG_TREE=1` for indented span trees. Without either variable
/// nothing is installed unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("UTL_LOG").or_else(|_| std::env::var("RUST_LOG")) {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) if verbose => EnvFilter::new(VERBOSE_FILTER),
            Err(_) => return,
        };

        let tree = std::env::var_os("UTL_LOG_TREE").is_some_and(|value| value != "0");
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
