use anyhow::{Context, Result};
use axum::serve;
use roster::core::config::Config;
use roster::core::state::AppState;
use roster::core::{routes, startup, tracing_init};
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

fn main() -> Result<()> {
    // A missing .env is fine; the process environment and defaults still apply
    let dotenv = dotenvy::dotenv().ok();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = Config::load(&config_path).context(format!(
        "Failed to load configuration from '{}'. \
        See config.example.toml for the available settings.",
        config_path.display()
    ))?;

    tracing_init::init_tracing(&config.logging)?;

    if let Some(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        host = %config.server.host,
        port = config.server.port,
        num_threads = config.server.num_threads,
        students_file = %config.storage.students_file.display(),
        log_level = %config.logging.level,
        "Student roster starting"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);

    startup::prepare(&state).await?;

    let app = routes::build_router(state).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        ),
    );

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "Listening");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shut down gracefully");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
