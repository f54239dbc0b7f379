use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corkboard::app::AppContext;
use corkboard::cli::{commands, Cli, Commands};
use corkboard::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(&config, cli.base_url.as_deref())?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Feed { comments } => {
            commands::print_feed(&ctx, comments).await?;
        }
        Commands::Vault => {
            commands::print_vault(&ctx).await?;
        }
        Commands::Tui => {
            corkboard::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
