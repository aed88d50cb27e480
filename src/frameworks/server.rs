// Framework bootstrap for the demo signup service.

use crate::frameworks::config;
use crate::interface_adapters::resolvers::SignupResolver;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // A missing .env is fine; FORM_BRIDGE_PORT and FORM_DATA_KEY have defaults.
    let _ = dotenvy::dotenv();

    // RUST_LOG wins; otherwise this crate logs at debug and dependencies at info.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,form_bridge=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => subscriber.json().with_current_span(true).init(),
        _ => subscriber.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "form bridge panicked");
    }));

    tracing::info!(
        form_data_key = %config::form_data_key(),
        port = config::http_port(),
        "form bridge runtime ready"
    );
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Arc<AppState> {
    let form_data_key = config::form_data_key();
    tracing::debug!(%form_data_key, "signup form configured");

    Arc::new(AppState {
        resolver: SignupResolver,
        form_data_key,
    })
}
