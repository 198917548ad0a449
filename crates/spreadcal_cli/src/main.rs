use std::process::ExitCode;

use clap::Parser;
use spreadcal_cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    spreadcal_log::init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(l_lines) => {
            for line in l_lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Run failed.");
            eprintln!("spreadsheet-calendar: error: {err}");
            ExitCode::from(2)
        }
    }
}
