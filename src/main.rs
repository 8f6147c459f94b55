//! spotdash CLI
//!
//! Signs query strings and loads spot positions from the dashboard API.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use spotdash::{sign, signed_query, ApiConfig, PositionStore, SpotClient};

/// Spot position dashboard CLI.
#[derive(Parser)]
#[command(name = "spotdash")]
#[command(about = "Load spot positions and sign API queries", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// API root URL
    #[arg(long, env = "SPOTDASH_API_URL", global = true)]
    api_url: Option<String>,

    /// API bearer token
    #[arg(long, env = "SPOTDASH_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the HMAC-SHA256 signature of a message
    Sign {
        /// Message or query string to sign
        message: String,

        /// Signing secret
        #[arg(short, long, env = "SPOTDASH_API_SECRET", hide_env_values = true)]
        secret: String,

        /// Print the query string with the signature appended
        #[arg(short, long)]
        query: bool,
    },

    /// Fetch positions once and print them as JSON
    Positions,

    /// Refresh positions periodically until interrupted
    Watch {
        /// Refresh interval in seconds
        #[arg(short, long, default_value = "30")]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log level")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Sign {
            message,
            secret,
            query,
        } => {
            let output = if query {
                signed_query(&message, &secret)?
            } else {
                sign(&message, &secret)?
            };
            println!("{}", output);
        }

        Commands::Positions => {
            let store = build_store(cli.api_url, cli.api_token)?;
            store.refresh_positions().await;

            let snapshot = store.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }

        Commands::Watch { interval: secs } => {
            let store = build_store(cli.api_url, cli.api_token)?;

            info!(interval = secs, "Watching spot positions");

            let mut updates = store.subscribe();
            tokio::spawn(async move {
                while updates.changed().await.is_ok() {
                    let snapshot = updates.borrow_and_update().clone();
                    info!(
                        positions = snapshot.positions.len(),
                        usdt = snapshot.usdt_balance,
                        "Positions updated"
                    );
                }
            });

            let shutdown = async {
                tokio::signal::ctrl_c().await.ok();
                info!("Shutdown signal received");
            };
            store
                .refresh_every(Duration::from_secs(secs.max(1)), shutdown)
                .await;
        }
    }

    Ok(())
}

fn build_store(
    api_url: Option<String>,
    api_token: Option<String>,
) -> Result<PositionStore<SpotClient>> {
    let config = match (api_url, api_token) {
        (Some(url), Some(token)) => ApiConfig::new(url, token)?,
        _ => ApiConfig::from_env()?,
    };

    let client = SpotClient::new(config).context("Failed to create HTTP client")?;
    let store = PositionStore::new(client);

    info!(base_url = %store.source().config().base_url, "Using spot data API");

    Ok(store)
}
