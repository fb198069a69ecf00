use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a scenario and print the cost/revenue report
    Calculate {
        /// Module definitions JSON file
        #[arg(short, long)]
        modules: String,
        /// Master data JSON file (products and personas)
        #[arg(short = 'd', long)]
        master_data: String,
        /// Scenario JSON file
        #[arg(short, long)]
        scenario: String,
        /// Optional output file for the result as JSON
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate a scenario against the catalog and rewrite it in normalized form
    Export {
        /// Module definitions JSON file
        #[arg(short, long)]
        modules: String,
        /// Master data JSON file (products and personas)
        #[arg(short = 'd', long)]
        master_data: String,
        /// Scenario JSON file
        #[arg(short, long)]
        scenario: String,
        /// Output scenario JSON file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
