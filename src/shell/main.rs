use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use promo_code_factory::modules::administration::adapters::outbound::fake_data;
use promo_code_factory::shell::config::{AppConfig, load_dotenv};
use promo_code_factory::shell::http::{API_PREFIX, router};
use promo_code_factory::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the subscriber so RUST_LOG from .env applies; reported after it.
    let dotenv = load_dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match dotenv {
        Ok(true) => {}
        Ok(false) => tracing::debug!("no .env file found, using the process environment"),
        Err(e) => {
            tracing::error!(error = %e, "failed to load .env");
            return Err(e.into());
        }
    }

    let config = AppConfig::from_env()?;

    let state = if config.seed_fake_data {
        AppState::in_memory(fake_data::employees(), fake_data::roles())
    } else {
        AppState::in_memory(Vec::new(), Vec::new())
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        seed_fake_data = config.seed_fake_data,
        "HTTP endpoint: http://{}{}/employees",
        addr,
        API_PREFIX
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
