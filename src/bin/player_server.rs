use idiom_drills::config::DrillsConfig;
use idiom_drills::{telemetry, InMemoryPlayerStore, PlayerServer};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init();
    let config = DrillsConfig::load(std::env::args_os().nth(1).map(Into::into))?;

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    let server = PlayerServer::new(InMemoryPlayerStore::new());
    server
        .serve_with_shutdown(listener, async {
            // Ctrl-C failing to install just means we run until killed.
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("ctrl-c received");
            }
        })
        .await?;
    Ok(())
}
