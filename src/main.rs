mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::export_cmd::export_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ Commands::Export { .. } => export_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
}
