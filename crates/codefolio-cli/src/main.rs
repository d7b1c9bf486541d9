mod common;
mod link;
mod refresh;
mod show;
mod user;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "codefolio-cli")]
#[command(about = "codefolio command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a user.
    CreateUser {
        #[arg(long)]
        handle: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Manage a user's profile links.
    Link {
        #[command(subcommand)]
        command: link::LinkCommand,
    },
    /// Refresh cached platform stats for a user.
    Refresh {
        /// User handle or public UUID.
        #[arg(long)]
        user: String,
        /// Refresh a single platform instead of every linked one.
        #[arg(long)]
        platform: Option<String>,
    },
    /// Show a user's cached platform stats.
    Show {
        /// User handle or public UUID.
        #[arg(long)]
        user: String,
        /// Also print the cached raw payloads.
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::CreateUser {
            handle,
            display_name,
        } => user::create(&handle, display_name.as_deref()).await,
        Commands::Link { command } => link::run(command).await,
        Commands::Refresh { user, platform } => refresh::run(&user, platform.as_deref()).await,
        Commands::Show { user, raw } => show::run(&user, raw).await,
    }
}
