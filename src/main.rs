use anyhow::Result;
use clap::Parser;
use spoilmap::cli::{Cli, Commands};
use spoilmap::commands;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            input,
            format,
            output,
            config,
            at,
        } => commands::evaluate_batches(commands::EvaluateConfig {
            input,
            format,
            output,
            config,
            at,
        }),
        Commands::Init { force } => commands::init_config(force),
        Commands::ValidateConfig { config } => commands::validate_config_file(config),
    }
}
