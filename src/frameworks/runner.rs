// Framework bootstrap for the bot runtime.

use crate::domain::{DrawSink, GameApi};
use crate::frameworks::config;
use crate::interface_adapters::clients::{GameApiClient, SnapshotFile};
use crate::interface_adapters::render::RewindClient;
use crate::use_cases::{LoopReport, LoopSettings, run_tick_loop};

use std::{io::Result, sync::Arc};
use tokio::sync::Notify;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run_with_config() -> Result<LoopReport> {
    init_runtime();

    let api = build_api().await?;
    let mut viewer = connect_viewer().await;

    let settings = LoopSettings {
        tick_interval: config::tick_interval(),
        tick_limit: config::tick_limit(),
    };
    let tuning = config::decision_tuning();
    tracing::info!(
        tick_interval_ms = settings.tick_interval.as_millis() as u64,
        tick_limit = ?settings.tick_limit,
        damping_reference = ?tuning.steering.damping_reference,
        alignment = ?tuning.steering.alignment,
        viewer = viewer.is_some(),
        "bot starting"
    );

    let shutdown = Arc::new(Notify::new());
    let ctrl_c = spawn_ctrl_c_listener(shutdown.clone());

    let report = run_tick_loop(&*api, viewer.as_mut(), tuning, settings, shutdown).await;

    ctrl_c.abort();
    close_viewer(viewer.as_mut()).await;

    tracing::info!(
        ticks = report.ticks,
        failed_fetches = report.failed_fetches,
        draw_failures = report.draw_failures,
        "bot stopped"
    );
    Ok(report)
}

async fn build_api() -> Result<Box<dyn GameApi>> {
    if let Some(path) = config::mock_snapshot_path() {
        tracing::info!(path = %path.display(), "running against snapshot file");
        return Ok(Box::new(SnapshotFile::new(path)));
    }

    let token = config::api_token().ok_or_else(|| {
        std::io::Error::other("API_TOKEN is required unless MOCK_SNAPSHOT_PATH is set")
    })?;
    let base_url = config::game_api_url();
    let game_name = config::game_name();
    let timeout = config::api_timeout();
    let client = GameApiClient::new(base_url.clone(), game_name.clone(), token, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize game api client: {e}")))?;
    tracing::debug!(
        base_url = %base_url,
        game_name = %game_name,
        timeout_ms = timeout.as_millis() as u64,
        "game api client configured"
    );

    log_rounds(&client).await;
    Ok(Box::new(client))
}

// Best effort; the schedule only helps whoever is watching the logs.
async fn log_rounds(client: &GameApiClient) {
    match client.rounds().await {
        Ok(listing) => {
            for round in &listing.rounds {
                tracing::info!(
                    game = ?listing.game_name,
                    name = ?round.name,
                    status = ?round.status,
                    start_at = ?round.start_at,
                    end_at = ?round.end_at,
                    duration = ?round.duration,
                    "round"
                );
            }
        }
        Err(error) => tracing::warn!(%error, "failed to fetch rounds"),
    }
}

async fn connect_viewer() -> Option<RewindClient> {
    if !config::rewind_enabled() {
        return None;
    }

    let host = config::rewind_host();
    let port = config::rewind_port();
    match RewindClient::connect((host.as_str(), port)).await {
        Ok(client) => {
            tracing::info!(%host, port, "viewer connected");
            Some(client)
        }
        Err(error) => {
            tracing::warn!(%host, port, %error, "viewer unavailable; drawing disabled");
            None
        }
    }
}

async fn close_viewer(viewer: Option<&mut RewindClient>) {
    if let Some(viewer) = viewer {
        viewer.shutdown().await;
        tracing::debug!("viewer closed");
    }
}

fn spawn_ctrl_c_listener(shutdown: Arc<Notify>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.notify_one(),
            Err(error) => tracing::error!(%error, "failed to listen for ctrl-c"),
        }
    })
}
