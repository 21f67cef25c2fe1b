//! Partnerkit CLI - partner settings publication and inspection
//!
//! Operator entry point for the partner settings pipeline:
//! - Publish merged settings artifacts for every enumerated partner
//! - List the partner set the content store currently defines
//! - Inspect the merged record one partner would be published with
//! - Exercise the runtime loader against a deployment

use clap::{Parser, Subcommand};
use partnerkit_content::{ContentStoreClient, ContentStoreConfig, ContentVersion};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use error::CliResult;

/// Partnerkit CLI application
#[derive(Parser)]
#[command(name = "partnerkit")]
#[command(about = "Partnerkit - white-label checkout partner settings pipeline", long_about = None)]
#[command(version)]
struct Cli {
    /// Content store access token; defaults to `CONTENT_STORE_TOKEN`
    #[arg(long)]
    token: Option<String>,

    /// Content store base URL; defaults to `CONTENT_STORE_URL`
    #[arg(long)]
    content_url: Option<String>,

    /// Read published content regardless of `PARTNERKIT_ENV`
    #[arg(long)]
    production: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Fetch, merge, and publish settings artifacts for all partners
    Publish {
        /// Output directory for the artifacts
        #[arg(long, default_value = "public/partner-settings")]
        out_dir: PathBuf,

        /// Delete artifacts for partners no longer enumerated
        #[arg(long)]
        prune: bool,
    },

    /// List the enumerated partner ids
    Partners,

    /// Print the merged settings one partner would be published with
    Show {
        /// Partner id
        partner_id: String,
    },

    /// Load a published artifact the way the checkout UI would
    Resolve {
        /// Partner id
        partner_id: String,

        /// Deployment base path to load from; defaults to the
        /// environment-selected source
        #[arg(long)]
        base_path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Environment config first, explicit flags win
    let config = {
        let base = ContentStoreConfig::from_env()?;
        let version = if cli.production {
            ContentVersion::Published
        } else {
            base.version
        };
        ContentStoreConfig::new(
            cli.content_url.unwrap_or(base.base_url),
            cli.token.or(base.token),
            version,
        )
    };
    let client = ContentStoreClient::new(config)?;

    match cli.command {
        Commands::Publish { out_dir, prune } => {
            commands::publish::execute(client, out_dir, prune).await
        }
        Commands::Partners => commands::partners::execute(&client).await,
        Commands::Show { partner_id } => commands::show::execute(&client, &partner_id).await,
        Commands::Resolve {
            partner_id,
            base_path,
        } => commands::resolve::execute(&partner_id, base_path.as_deref()).await,
    }
}
