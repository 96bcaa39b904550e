use std::net::IpAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use klucon_panel::cli::Cli;
use klucon_panel::config;
use klucon_panel::web::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host: IpAddr = cli.host.parse()?;

    let settings = config::init_storage(&cli.config_dir).await?;
    match &settings {
        Some(cfg) => tracing::info!(admin = %cfg.admin.username, "loaded existing configuration"),
        None => tracing::info!("no configuration found, first-run setup required"),
    }

    let state = AppState::new(settings, cli.config_dir, cli.lang_dir);
    web::serve(state, host, cli.port).await
}
