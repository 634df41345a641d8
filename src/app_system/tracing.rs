/// Configure tracing once at application startup for the entire process.
/// All actors and spans pick this configuration up automatically.
///
/// `RUST_LOG` controls verbosity and defaults to `info` when unset:
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=tiffin::cart_service=debug,tiffin::order_service=info cargo run
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
