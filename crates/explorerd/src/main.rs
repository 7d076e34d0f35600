pub(crate) mod cli;

use api_ui::config::WebConfig;
use api_ui::layers::make_cors_middleware;
use api_ui::router::create_router;
use api_ui::state::AppState;
use core_explorer::{ExplorerService, SqliteExplorerService};
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

const TARGETS: [&str; 3] = ["explorerd", "api_ui", "core_explorer"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
#[allow(clippy::expect_used)]
async fn main() {
    dotenv().ok();

    let opts = cli::CliOpts::parse_args();

    setup_tracing(&opts);

    let explorer_svc = match SqliteExplorerService::open(&opts.db) {
        Ok(svc) => Arc::new(svc),
        Err(err) => {
            tracing::error!("Failed to initialize application: {err}");
            std::process::exit(1);
        }
    };
    let db_name = explorer_svc.database_name().to_string();

    let web_config = WebConfig {
        host: opts.host.clone(),
        port: opts.port,
        allow_origin: opts.cors_allow_origin.clone(),
    };

    let router = create_router().with_state(AppState::new(explorer_svc));
    let router = match &web_config.allow_origin {
        Some(allow_origin) => router.layer(make_cors_middleware(allow_origin)),
        None => router,
    };
    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CatchPanicLayer::new());

    tracing::info!("Starting explorer for '{db_name}'");
    let listener = tokio::net::TcpListener::bind(web_config.bind_address())
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to get local address");
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}

fn setup_tracing(opts: &cli::CliOpts) {
    let targets_with_level = |level: LevelFilter| -> Vec<(&str, LevelFilter)> {
        TARGETS.iter().map(|t| ((*t), level)).collect()
    };

    // RUST_LOG wins over --tracing-level when it parses
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => match val.parse::<Targets>() {
            Ok(log_targets_from_env) => log_targets_from_env,
            Err(err) => {
                eprintln!("Failed to parse RUST_LOG: {err:?}");
                Targets::default()
                    .with_targets(targets_with_level(LevelFilter::DEBUG))
                    .with_default(LevelFilter::WARN)
            }
        },
        _ => Targets::default()
            .with_targets(targets_with_level(opts.tracing_level.clone().into()))
            .with_default(LevelFilter::WARN),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(filter),
        )
        .init();
}

/// Waits for either a Ctrl+C signal or a SIGTERM signal.
///
/// # Panics
/// If the function fails to install the signal handler, it will panic.
#[allow(
    clippy::expect_used,
    clippy::redundant_pub_crate,
    clippy::cognitive_complexity
)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::warn!("Ctrl+C received, starting graceful shutdown");
        },
        () = terminate => {
            tracing::warn!("SIGTERM received, starting graceful shutdown");
        },
    }
}
