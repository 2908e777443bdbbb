use anyhow::Result;
use clap::Parser;

use magpie_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = format!(
        "magpie_cli={level},magpie_pipeline={level},magpie_core={level}",
        level = log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration with CLI overrides
    let config = CliConfig::load(cli.config, cli.vault)?;

    match cli.command {
        Commands::Collect { target, raw } => commands::collect::execute(config, target, raw).await?,

        Commands::Filter {
            target,
            callout_type,
            raw,
        } => commands::filter::execute(config, target, callout_type, raw).await?,

        Commands::List {
            folder,
            callout_type,
            format,
            raw,
        } => commands::list::execute(config, folder, callout_type, format, raw).await?,
    }

    Ok(())
}
