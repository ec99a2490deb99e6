use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    ApiError, Bounty, Command, DrawCall, DrawSink, GameApi, RenderError, Transport, Vector2D,
    WorldSnapshot,
};

pub(crate) type Submissions = Arc<Mutex<Vec<Vec<Command>>>>;

// Minimal one-unit world with a bounty straight ahead.
pub(crate) fn sample_world() -> WorldSnapshot {
    WorldSnapshot {
        points: 0.0,
        max_accel: 10.0,
        max_speed: 110.0,
        attack_range: 200.0,
        attack_damage: 30.0,
        attack_explosion_radius: 30.0,
        attack_cooldown_ms: 1_000,
        map_size: Vector2D::new(1_000.0, 1_000.0),
        transports: vec![Transport {
            id: "a".to_string(),
            position: Vector2D::ZERO,
            velocity: Vector2D::ZERO,
            self_acceleration: Vector2D::ZERO,
            anomaly_acceleration: Vector2D::ZERO,
            health: 100.0,
            status: "alive".to_string(),
            shield_left_ms: 0,
            shield_cooldown_ms: 0,
            attack_cooldown_ms: 0,
            death_count: 0,
        }],
        enemies: Vec::new(),
        bounties: vec![Bounty {
            position: Vector2D::new(100.0, 0.0),
            radius: 5.0,
            points: 50.0,
        }],
        wanted_list: Vec::new(),
        anomalies: Vec::new(),
    }
}

// Game API fake that returns one fixed world and records what was submitted.
pub(crate) struct ScriptedApi {
    snapshot: WorldSnapshot,
    submissions: Submissions,
    // 1-based call numbers that answer with an upstream error.
    failing_calls: HashSet<usize>,
}

impl ScriptedApi {
    pub(crate) fn new(snapshot: WorldSnapshot) -> Self {
        Self {
            snapshot,
            submissions: Arc::new(Mutex::new(Vec::new())),
            failing_calls: HashSet::new(),
        }
    }

    pub(crate) fn failing_on(mut self, calls: &[usize]) -> Self {
        self.failing_calls.extend(calls.iter().copied());
        self
    }

    pub(crate) fn submissions(&self) -> Vec<Vec<Command>> {
        self.submissions
            .lock()
            .expect("submissions mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl GameApi for ScriptedApi {
    async fn submit_commands(&self, commands: &[Command]) -> Result<WorldSnapshot, ApiError> {
        let call = {
            let mut guard = self.submissions.lock().expect("submissions mutex poisoned");
            guard.push(commands.to_vec());
            guard.len()
        };

        if self.failing_calls.contains(&call) {
            return Err(ApiError::Upstream {
                status: 500,
                body: "scripted failure".to_string(),
            });
        }
        Ok(self.snapshot.clone())
    }
}

// Draw sink fake that keeps every frame, or fails every frame when asked to.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) frames: Vec<Vec<DrawCall>>,
    pub(crate) fail: bool,
}

impl RecordingSink {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl DrawSink for RecordingSink {
    async fn draw_frame(&mut self, calls: &[DrawCall]) -> Result<(), RenderError> {
        if self.fail {
            return Err(RenderError::Disconnected);
        }
        self.frames.push(calls.to_vec());
        Ok(())
    }

    async fn shutdown(&mut self) {}
}
