//! UTL template scanner CLI.

use utlc::{commands, init_tracing, parse_options, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || matches!(args[0].as_str(), "help" | "--help" | "-h") {
        print!("{USAGE}");
        return;
    }

    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_tracing(options.verbose);

    let mut failed = false;
    for result in commands::run(&options) {
        match result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
