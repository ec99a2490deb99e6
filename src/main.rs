use transport_pilot::run_with_config;

#[tokio::main]
async fn main() {
    // Delegate to the runner; it owns logging setup.
    if let Err(e) = run_with_config().await {
        tracing::error!(error = %e, "bot failed");
        std::process::exit(1);
    }
}
