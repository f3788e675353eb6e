//! Liveness endpoint.
//!
//! Hosting platforms probe `GET /` to decide whether the process is alive.
//! There is no other route and no application state behind it.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::error;
use tracing::info;

/// Body returned by the liveness probe.
const LIVENESS_BODY: &str = "Bot is running!";

async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// The single-route health router.
fn router() -> Router {
    Router::new().route("/", get(liveness))
}

/// Serve the health router until the process exits.
/// Bind or serve failures are logged; the bot keeps running without probes.
pub async fn run_health_server(port: u16) {
    if let Err(e) = serve(port).await {
        error!("Health endpoint failed: {e}");
    }
}

async fn serve(port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Health endpoint listening on port {port}.");
    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_body_is_fixed() {
        assert_eq!(liveness().await, "Bot is running!");
    }

    #[test]
    fn router_builds() {
        // Route registration panics on malformed paths; catch that here.
        let _ = router();
    }
}
