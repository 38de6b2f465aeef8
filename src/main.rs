use anyhow::Result;
use clap::Parser;
use meeting_scheduler::{create_router, AppState, Config};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "meeting-scheduler", about = "In-memory meeting scheduling API")]
struct Cli {
    /// Config file to load (extension inferred)
    #[arg(long, default_value = "config/meeting-scheduler")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v0.1.0", cfg.service.name);

    let state = AppState::new();
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
