//! HTTP API server.

use crate::api::{router, AppState};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use std::sync::Arc;
use tracing::info;

/// Run the HTTP API server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    // Credential problems surface here, before the listener is bound.
    let orchestrator = match Orchestrator::new(&settings) {
        Ok(o) => o,
        Err(e) => {
            Output::error(&e.to_string());
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(orchestrator));
    let app = router(state, settings.server.cors);

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("tubesum API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET       /healthz");
    Output::kv("Transcript", "GET       /transcript?video_id=");
    Output::kv("Summarize text", "GET/POST  /summarize_text");
    Output::kv("Video summary", "GET       /summary?video_id=&model=");
    println!();
    if !settings.server.cors {
        Output::warning("CORS is disabled (server.cors = false).");
    }
    Output::info("Press Ctrl+C to stop the server.");

    info!("Serving on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
