use super::decide::decide;
use super::frame::build_frame;
use crate::domain::{Command, DecisionTuning, DrawSink, GameApi};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub tick_interval: Duration,
    // None runs until shutdown is notified.
    pub tick_limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopReport {
    pub ticks: u64,
    pub failed_fetches: u64,
    pub draw_failures: u64,
}

/// Drives the bot at a fixed cadence until shutdown or the tick limit.
///
/// Each tick submits the previous orders, decides on the returned world and
/// draws it. Viewer failures are logged and otherwise ignored.
pub async fn run_tick_loop<A, S>(
    api: &A,
    mut sink: Option<&mut S>,
    tuning: DecisionTuning,
    settings: LoopSettings,
    shutdown: Arc<Notify>,
) -> LoopReport
where
    A: GameApi + ?Sized,
    S: DrawSink + ?Sized,
{
    let mut report = LoopReport::default();
    let mut pending: Vec<Command> = Vec::new();

    let mut interval = tokio::time::interval(settings.tick_interval);
    // A slow round trip should not trigger a burst of catch-up ticks.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        if settings.tick_limit.is_some_and(|limit| report.ticks >= limit) {
            info!(ticks = report.ticks, "tick limit reached");
            break;
        }

        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                info!(ticks = report.ticks, "shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        report.ticks += 1;
        let tick = report.ticks;
        let started = Instant::now();

        let snapshot = match api.submit_commands(&pending).await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(tick, %error, "failed to fetch world state");
                report.failed_fetches += 1;
                // Never resubmit orders computed from an older world.
                pending.clear();
                continue;
            }
        };

        pending = decide(&snapshot, &tuning);

        if let Some(sink) = sink.as_deref_mut() {
            let frame = build_frame(&snapshot, &pending);
            if let Err(error) = sink.draw_frame(&frame).await {
                report.draw_failures += 1;
                debug!(tick, %error, "failed to draw frame");
            }
        }

        debug!(
            tick,
            points = snapshot.points,
            transports = snapshot.transports.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tick complete"
        );
    }

    report
}
