pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "A terminal client for a posts/comments/photos JSON API", long_about = None)]
pub struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the feed once and print it
    Feed {
        /// Also print each post's comments
        #[arg(long)]
        comments: bool,
    },
    /// Fetch the photo album once and print it
    Vault,
    /// Launch the TUI (default)
    Tui,
}
