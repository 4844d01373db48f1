use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use rootview::configuration::get_configuration;
use rootview::server::config::configure_app;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rootview", about = "Serve the root document and index view")]
struct Cli {
    /// Overrides `application.host`.
    #[arg(long)]
    host: Option<String>,

    /// Overrides `application.port`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = get_configuration().context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        settings.application.host = host;
    }
    if let Some(port) = cli.port {
        settings.application.port = port;
    }

    let app = configure_app(&settings).context("Failed to load root value")?;

    let addr: SocketAddr = format!("{}:{}", settings.application.host, settings.application.port)
        .parse()
        .context("Invalid listen address")?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server ready at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
