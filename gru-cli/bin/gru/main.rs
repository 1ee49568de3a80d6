//! gru: render BMC query results and decode BIOS attributes

use std::process;

mod opts;

use opts::GruOpts;

use gru_cli::{format_error_for_stderr, init_logging, run_cli};

const PROGRAM_NAME: &str = "gru";

fn main() {
    let opts = GruOpts::parse();
    let config = opts.config();

    init_logging(config.verbosity);

    if let Err(err) = run_cli(&opts.command(), &config) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }
}
