use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jotter::api;
use jotter_core::{IdPolicy, NoteService};

const DEFAULT_PORT: u16 = 5025;

#[derive(Parser)]
#[command(name = "jotterd")]
#[command(about = "Minimal note-taking service with an HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the jotter server
    Serve {
        /// Port for the HTTP API (falls back to the PORT env var, then 5025)
        #[arg(short, long)]
        port: Option<u16>,

        /// Identifier scheme for new notes
        #[arg(long, value_parser = parse_id_policy, default_value = "sequential")]
        id_policy: IdPolicy,
    },
}

fn parse_id_policy(s: &str) -> Result<IdPolicy, String> {
    IdPolicy::from_str(s)
        .ok_or_else(|| format!("unknown id policy {s:?}, expected `sequential` or `random`"))
}

fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "jotter=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, id_policy }) => {
            serve(resolve_port(port), id_policy).await?;
        }
        None => {
            // Default: start server
            serve(resolve_port(None), IdPolicy::default()).await?;
        }
    }

    Ok(())
}

async fn serve(port: u16, policy: IdPolicy) -> anyhow::Result<()> {
    tracing::info!("Starting jotter server on port {}", port);

    let service = NoteService::with_policy(policy);
    let app = api::create_router(service);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!(
        "jotter server listening on http://127.0.0.1:{} (id policy: {})",
        port,
        policy.as_str()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
