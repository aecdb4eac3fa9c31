//! Diagnosis HTTP server binary.

use diagnosis_service::{DiagnosisServer, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    match &config.kb_path {
        Some(path) if config.kb_extend => {
            tracing::info!("Extending builtin knowledge base from: {}", path.display())
        }
        Some(path) => tracing::info!("Loading knowledge base from: {}", path.display()),
        None => tracing::info!("Using builtin knowledge base"),
    }

    let engine = config.build_engine()?;

    let stats = engine.knowledge_base().stats();
    tracing::info!(
        "Loaded {} symptom keywords ({} mappings), {} conditions with {} medications",
        stats.keywords,
        stats.symptom_mappings,
        stats.conditions,
        stats.medication_entries
    );
    tracing::info!("Report analyzer: {}", engine.analyzer_name());

    // Create server
    let app = DiagnosisServer::new(engine).router();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting diagnosis server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
