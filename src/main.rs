use std::process::ExitCode;

use clap::Parser;
use clap_slap::cli::{Cli, Output};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1, not clap's default 2
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let quiet = cli.quiet;
    match cli.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new(false, quiet).error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
