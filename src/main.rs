mod checks;
mod cli;
mod config;
mod error;
mod github;
mod report;
mod types;

use crate::error::ScanError;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ScanError> {
    match cli.command {
        cli::Commands::Scan(cmd) => {
            // An invalid URL must fail before any config read or
            // network call.
            let target = github::url::parse_target(&cmd.url)?;

            let scan_config = config::load_config()?;
            scan_config.validate()?;

            info!("analyzing {}/{}", target.owner, target.repo);
            let client = github::client::GitHubClient::new(&scan_config)?;
            let snapshot = github::fetch_snapshot(&client, &target, &scan_config)?;
            let scan_report = checks::evaluate(&snapshot);

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&scan_report, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let json_errors = matches!(
        &cli.command,
        cli::Commands::Scan(cmd) if matches!(cmd.format, cli::ReportFormat::Json)
    );

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            if json_errors {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("error: {e}");
            }
            std::process::exit(exit_code::FAILURE);
        }
    }
}
