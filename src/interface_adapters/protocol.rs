// Wire protocol DTOs and conversions for the game API.
// Field names follow the server's camelCase JSON.

use crate::domain::{
    Anomaly, Bounty, Command, Enemy, SnapshotError, Transport, Vector2D, WorldSnapshot,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorDto {
    pub x: f64,
    pub y: f64,
}

impl From<VectorDto> for Vector2D {
    fn from(v: VectorDto) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for VectorDto {
    fn from(v: Vector2D) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// World state returned by the move endpoint each tick.
///
/// Everything the decision engine reads is required; a missing field is a
/// decode error rather than a silent default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStateDto {
    pub points: f64,
    pub attack_cooldown_ms: u64,
    pub attack_damage: f64,
    pub attack_explosion_radius: f64,
    pub attack_range: f64,
    pub max_accel: f64,
    pub max_speed: f64,
    pub map_size: VectorDto,
    pub transports: Vec<TransportDto>,
    pub enemies: Vec<EnemyDto>,
    pub bounties: Vec<BountyDto>,
    pub wanted_list: Vec<WantedDto>,
    pub anomalies: Vec<AnomalyDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDto {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub velocity: VectorDto,
    pub self_acceleration: VectorDto,
    pub anomaly_acceleration: VectorDto,
    pub health: f64,
    #[serde(default)]
    pub status: String,
    pub shield_left_ms: u64,
    pub shield_cooldown_ms: u64,
    pub attack_cooldown_ms: u64,
    pub death_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyDto {
    pub x: f64,
    pub y: f64,
    pub velocity: VectorDto,
    pub health: f64,
    #[serde(default)]
    pub status: String,
    pub shield_left_ms: u64,
    #[serde(default)]
    pub kill_bounty: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BountyDto {
    pub x: f64,
    pub y: f64,
    pub points: f64,
    pub radius: f64,
}

// Wanted entries carry enemy-like fields; only the position is used.
#[derive(Debug, Clone, Deserialize)]
pub struct WantedDto {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyDto {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub effective_radius: f64,
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub velocity: VectorDto,
}

impl From<TransportDto> for Transport {
    fn from(t: TransportDto) -> Self {
        Self {
            id: t.id,
            position: Vector2D::new(t.x, t.y),
            velocity: t.velocity.into(),
            self_acceleration: t.self_acceleration.into(),
            anomaly_acceleration: t.anomaly_acceleration.into(),
            health: t.health,
            status: t.status,
            shield_left_ms: t.shield_left_ms,
            shield_cooldown_ms: t.shield_cooldown_ms,
            attack_cooldown_ms: t.attack_cooldown_ms,
            death_count: t.death_count,
        }
    }
}

impl From<EnemyDto> for Enemy {
    fn from(e: EnemyDto) -> Self {
        Self {
            position: Vector2D::new(e.x, e.y),
            velocity: e.velocity.into(),
            health: e.health,
            status: e.status,
            shield_left_ms: e.shield_left_ms,
            kill_bounty: e.kill_bounty,
        }
    }
}

impl From<BountyDto> for Bounty {
    fn from(b: BountyDto) -> Self {
        Self {
            position: Vector2D::new(b.x, b.y),
            radius: b.radius,
            points: b.points,
        }
    }
}

impl From<AnomalyDto> for Anomaly {
    fn from(a: AnomalyDto) -> Self {
        Self {
            id: a.id,
            position: Vector2D::new(a.x, a.y),
            radius: a.radius,
            effective_radius: a.effective_radius,
            strength: a.strength,
            velocity: a.velocity.into(),
        }
    }
}

impl TryFrom<RoundStateDto> for WorldSnapshot {
    type Error = SnapshotError;

    fn try_from(dto: RoundStateDto) -> Result<Self, Self::Error> {
        // Steering divides by maxAccel.
        ensure("maxAccel", dto.max_accel, dto.max_accel > 0.0 && dto.max_accel.is_finite())?;
        ensure("attackRange", dto.attack_range, dto.attack_range >= 0.0)?;
        ensure("attackDamage", dto.attack_damage, dto.attack_damage.is_finite())?;

        Ok(Self {
            points: dto.points,
            max_accel: dto.max_accel,
            max_speed: dto.max_speed,
            attack_range: dto.attack_range,
            attack_damage: dto.attack_damage,
            attack_explosion_radius: dto.attack_explosion_radius,
            attack_cooldown_ms: dto.attack_cooldown_ms,
            map_size: dto.map_size.into(),
            transports: dto.transports.into_iter().map(Transport::from).collect(),
            enemies: dto.enemies.into_iter().map(Enemy::from).collect(),
            bounties: dto.bounties.into_iter().map(Bounty::from).collect(),
            wanted_list: dto
                .wanted_list
                .into_iter()
                .map(|w| Vector2D::new(w.x, w.y))
                .collect(),
            anomalies: dto.anomalies.into_iter().map(Anomaly::from).collect(),
        })
    }
}

fn ensure(field: &'static str, value: f64, ok: bool) -> Result<(), SnapshotError> {
    if ok {
        Ok(())
    } else {
        Err(SnapshotError::InvalidParameter { field, value })
    }
}

/// Parses and validates a world snapshot body.
pub fn decode_snapshot(body: &str) -> Result<WorldSnapshot, SnapshotError> {
    let dto: RoundStateDto = serde_json::from_str(body)?;
    WorldSnapshot::try_from(dto)
}

/// Body of the move request: this tick's orders for every transport.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRequestDto {
    pub transports: Vec<CommandDto>,
}

impl From<&[Command]> for MoveRequestDto {
    fn from(commands: &[Command]) -> Self {
        Self {
            transports: commands.iter().map(CommandDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDto {
    pub id: String,
    pub acceleration: VectorDto,
    pub activate_shield: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<AimDto>,
}

/// Attack coordinates go over the wire as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AimDto {
    pub x: i64,
    pub y: i64,
}

impl From<&Command> for CommandDto {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id.clone(),
            acceleration: command.acceleration.into(),
            activate_shield: command.activate_shield,
            attack: command.attack.map(|aim| AimDto {
                x: aim.x.round_ties_even() as i64,
                y: aim.y.round_ties_even() as i64,
            }),
        }
    }
}

/// Round schedule listing. Informational, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundsDto {
    pub game_name: Option<String>,
    pub now: Option<String>,
    #[serde(default)]
    pub rounds: Vec<RoundDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDto {
    pub name: Option<String>,
    pub status: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub duration: Option<u64>,
    pub repeat: Option<u64>,
}
