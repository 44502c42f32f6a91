//! enhancer-web - single-page prompt enhancement site

use anyhow::Result;
use clap::Parser;
use enhancer_web::config::{Config, ConfigOptions, DEFAULT_WEBHOOK_URL};
use enhancer_web::site::SiteServer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "enhancer-web")]
#[command(about = "Single-page prompt enhancement site backed by an automation webhook")]
struct Args {
    /// Webhook endpoint that performs the actual enhancement
    #[arg(long, default_value = DEFAULT_WEBHOOK_URL)]
    webhook_url: String,

    /// First port the site server tries to bind
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Open the system browser once the server is up
    #[arg(long)]
    open: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = Config::new(
        Some(args.webhook_url),
        ConfigOptions {
            listen_port: Some(args.port),
            ..Default::default()
        },
    )?;

    info!("Starting enhancer-web");

    let server = SiteServer::new(config)?;
    server.start().await?;

    let url = format!("http://localhost:{}/", server.get_port().await);
    info!("Site available at {}", url);

    if args.open {
        if let Err(e) = open::that(&url) {
            warn!("Could not auto-open browser: {}, URL: {}", e, url);
        }
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}
