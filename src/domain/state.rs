// Domain-level world snapshot and per-unit command types.

use super::vector::Vector2D;

/// One of our own transports as reported for the current tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    pub id: String,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub self_acceleration: Vector2D,
    pub anomaly_acceleration: Vector2D,
    pub health: f64,
    // Informational only (alive/dead); decisions never branch on it.
    pub status: String,

    // Cooldown state is owned upstream; the engine only reads it.
    pub shield_left_ms: u64,
    pub shield_cooldown_ms: u64,
    pub attack_cooldown_ms: u64,
    pub death_count: u64,
}

impl Transport {
    /// Effective drift: current velocity plus the pull of nearby anomalies.
    pub fn momentum(&self) -> Vector2D {
        self.velocity + self.anomaly_acceleration
    }
}

/// A hostile transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub health: f64,
    pub status: String,
    pub shield_left_ms: u64,
    pub kill_bounty: f64,
}

impl Enemy {
    pub fn is_shielded(&self) -> bool {
        self.shield_left_ms > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bounty {
    pub position: Vector2D,
    pub radius: f64,
    pub points: f64,
}

/// Hazard that bends trajectories. Only drawn; its pull already shows up in
/// each transport's anomaly acceleration.
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    pub id: String,
    pub position: Vector2D,
    pub radius: f64,
    pub effective_radius: f64,
    pub strength: f64,
    pub velocity: Vector2D,
}

/// Full world state for a single tick. Read-only input to the decision engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub points: f64,
    pub max_accel: f64,
    pub max_speed: f64,
    pub attack_range: f64,
    pub attack_damage: f64,
    pub attack_explosion_radius: f64,
    pub attack_cooldown_ms: u64,
    pub map_size: Vector2D,
    pub transports: Vec<Transport>,
    pub enemies: Vec<Enemy>,
    pub bounties: Vec<Bounty>,
    pub wanted_list: Vec<Vector2D>,
    pub anomalies: Vec<Anomaly>,
}

/// Orders for one transport, rebuilt from scratch every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub id: String,
    pub acceleration: Vector2D,
    pub activate_shield: bool,
    // Integer-rounded aim point.
    pub attack: Option<Vector2D>,
}

impl Command {
    pub fn idle(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            acceleration: Vector2D::ZERO,
            activate_shield: false,
            attack: None,
        }
    }
}
