use std::net::{IpAddr, SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    AppState, DEFAULT_CURRENCY_SYMBOL, DEFAULT_MAX_SESSIONS, DEFAULT_TIMEZONE, TrackerConfig,
    build_router,
    graceful_shutdown, logging_middleware,
};

/// The web server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The IP address to serve the app from.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The secret used to sign and encrypt session cookies. A random secret
    /// is used if not set.
    #[arg(long, env = "SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// The smallest amount accepted for a transaction, e.g. "1" or "0.50".
    #[arg(long, default_value = "1")]
    minimum_amount: expense_tracker::Amount,

    /// The currency symbol shown in front of amounts.
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency_symbol: String,

    /// How many minutes a session may go unused before its transactions are discarded.
    #[arg(long, default_value_t = 60)]
    session_timeout_minutes: u64,

    /// The most sessions kept in memory at once.
    #[arg(long, default_value_t = DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let config = TrackerConfig {
        minimum_amount: args.minimum_amount,
        local_timezone: args.timezone,
        currency_symbol: args.currency_symbol,
        session_idle_timeout: std::time::Duration::from_secs(
            args.session_timeout_minutes.saturating_mul(60),
        ),
        max_sessions: args.max_sessions,
    };

    if args.secret.is_none() {
        tracing::warn!(
            "No secret given, using a random one. Sessions will not survive a server restart."
        );
    }

    let state = match AppState::new(args.secret.as_deref(), config) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Invalid configuration: {error}");
            std::process::exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("HTTP server listening on http://{}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
