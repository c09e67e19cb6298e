use anyhow::Result;
use clap::Parser;
use job_insights::cli::{handle_command, Cli, Command};
use job_insights::core::ConfigManager;
use job_insights::logging::init_logging;
use job_insights::start_web_server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration is built once here and handed down by reference
    let config = ConfigManager::load(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config).await,
        command => handle_command(command, &config).await,
    }
}
