use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use labor_cost_engine::api::{AppState, create_router};
use labor_cost_engine::config::{RateTable, RateTableLoader};

#[derive(Parser, Debug)]
#[command(name = "labor-cost-engine", version, about = "Employer labor cost engine")]
struct Cli {
    /// Rate table YAML file (defaults to the built-in 2026 Colombian table)
    #[arg(short, long, env = "LABOR_COST_RATES")]
    rates: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "LABOR_COST_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let rates = match &cli.rates {
        Some(path) => RateTableLoader::load(path)
            .with_context(|| format!("loading rate table {}", path.display()))?,
        None => RateTable::colombia_2026(),
    };
    info!(
        year = rates.metadata().year,
        jurisdiction = %rates.metadata().jurisdiction,
        minimum_wage = %rates.minimum_wage(),
        "Rate table ready"
    );

    let app = create_router(AppState::new(rates));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    info!(addr = %cli.bind, "Listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
