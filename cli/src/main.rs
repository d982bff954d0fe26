use clap::Parser;
use scriptcheck::cli::{run_cli, Cli};
use std::process::exit;

/// ===============================================================
/// scriptcheck CLI - User-facing command-line interface
///
/// Commands:
///   - `scriptcheck check [PATH]`: Checks a script against the grammar.
///   - `scriptcheck tokens [PATH]`: Lists the tokens of a script.
///
/// PATH is a script file or a directory containing main.script.
/// Set RUST_LOG=debug to trace the scanner and parser.
/// ===============================================================
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("scriptcheck {} starting", env!("CARGO_PKG_VERSION"));
    exit(run_cli(cli));
}
