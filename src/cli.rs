use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "redflag",
    version,
    about = "GitHub red-flag triage for Solana-ecosystem repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan(ScanCommand),
}

#[derive(Args)]
pub struct ScanCommand {
    /// GitHub repository URL
    pub url: String,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
