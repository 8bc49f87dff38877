use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use trip_planner::config::Config;
use trip_planner::generation::SimulatedGenerator;
use trip_planner::planner::Planner;
use trip_planner::store::{MemoryStore, PgStore, TripStore};
use trip_planner::{build_router, db, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging()?;

    let config = Config::from_env()?;

    let store: Arc<dyn TripStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url, config.database_max_connections).await?;
            tracing::info!("Connected to Postgres, migrations applied");
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Trips are kept in memory and lost on restart.");
            Arc::new(MemoryStore::new())
        }
    };

    let generator = Arc::new(SimulatedGenerator::new(config.generation_delay));
    let planner = Planner::new(generator);
    let shared_state = Arc::new(AppState::new(planner, store).with_assets_dir(config.assets_dir.clone()));

    spawn_session_cleanup(shared_state.clone(), config.session_idle_timeout);

    let app = build_router(shared_state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Drops planning sessions nobody has touched within `idle_timeout`.
fn spawn_session_cleanup(state: Arc<AppState>, idle_timeout: std::time::Duration) {
    let max_idle = match chrono::Duration::from_std(idle_timeout) {
        Ok(max_idle) => max_idle,
        Err(e) => {
            tracing::error!("Session idle timeout out of range, cleanup disabled: {}", e);
            return;
        }
    };
    let interval = (idle_timeout / 4).max(std::time::Duration::from_secs(30));

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let removed = state.planner.cleanup_idle_sessions(max_idle).await;
            if removed > 0 {
                tracing::info!(removed, "expired idle planning sessions");
            }
        }
    });
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,trip_planner=trace,sqlx=info,hyper=info,tower=info".to_string()
        } else {
            "info,trip_planner=info,sqlx=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();

    tracing::info!("Trip planner starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Build mode: {}", if cfg!(debug_assertions) { "development" } else { "production" });
    tracing::info!("Log level: {}", log_level);

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
