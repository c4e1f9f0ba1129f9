use std::process::ExitCode;

use clap::Parser;

use hhcatalog::cli::{self, Cli, Outcome};
use hhcatalog::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging(LoggingConfig::from_env()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let result = cli::run(
        cli,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    match result {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Flagged) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
