//! notedraft - publish markdown notes as Typefully drafts
//!
//! CLI binary for turning notes into drafts and threads.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "notedraft")]
#[command(about = "Publish markdown notes as Typefully drafts")]
#[command(version)]
struct Cli {
    /// Show every step and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a note file
    Publish {
        /// Markdown note to publish
        file: PathBuf,

        /// Dry run - show the draft without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Publish a piece of text
    PublishText {
        /// Text to publish (`-` or omitted reads stdin)
        text: Option<String>,

        /// Note whose tags are appended
        #[arg(long, value_name = "FILE")]
        tags_from: Option<PathBuf>,

        /// Dry run - show the draft without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the social sets of the account
    SocialSets {
        /// Choose the social set to publish under
        #[arg(long)]
        select: bool,
    },

    /// Settings management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current settings
    Show,
    /// Print the settings file path
    Path,
    /// Change one setting
    Set {
        /// Setting key (e.g. `threadify`, `platforms.bluesky`)
        key: String,
        /// New value
        value: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    notedraft::logging::init(cli.verbose);

    match cli.command {
        Commands::Publish { file, dry_run } => {
            cli::run_publish(&file, dry_run, cli.verbose).await?;
        }
        Commands::PublishText {
            text,
            tags_from,
            dry_run,
        } => {
            cli::run_publish_text(text.as_deref(), tags_from.as_deref(), dry_run, cli.verbose)
                .await?;
        }
        Commands::SocialSets { select } => {
            cli::run_social_sets(select).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show()?,
            ConfigAction::Path => cli::run_config_path()?,
            ConfigAction::Set { key, value } => cli::run_config_set(&key, &value)?,
        },
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test().await?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
