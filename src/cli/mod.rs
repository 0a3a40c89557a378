use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::auth::TokenVerifier;
use crate::config::{self, AppConfig};
use crate::database::{schema, seed, DatabaseManager};
use crate::is_production;
use crate::router;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "showcase-api")]
#[command(about = "Venue directory, trivia, coffee shop and casting agency API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Bind address, overrides HOST")]
        host: Option<String>,
        #[arg(long, help = "Listen port, overrides SHOWCASE_PORT / PORT")]
        port: Option<u16>,
    },

    #[command(about = "Create any missing tables")]
    Migrate,

    #[command(about = "Create tables and load the bundled sample data into empty tables")]
    Seed,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::config().clone();
    info!("Starting in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Migrate => {
            let pool = DatabaseManager::connect(&config.database).await?;
            schema::apply(&pool).await?;
            Ok(())
        }
        Commands::Seed => {
            let pool = DatabaseManager::connect(&config.database).await?;
            schema::apply(&pool).await?;
            let report = seed::run(&pool).await?;
            println!(
                "Seeded {} categories, {} questions, {} drinks",
                report.categories, report.questions, report.drinks
            );
            Ok(())
        }
    }
}

async fn serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    if !config.security.auth.is_configured() {
        if is_production!() {
            anyhow::bail!("AUTH0_DOMAIN and API_AUDIENCE must be set in production");
        }
        warn!("AUTH0_DOMAIN / API_AUDIENCE not set; protected routes will reject every token");
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    schema::apply(&pool).await?;

    let verifier = TokenVerifier::from_config(&config.security.auth);
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let app = router::app(AppState::new(pool, config, verifier));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(addr = %bind_addr, "Showcase API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
