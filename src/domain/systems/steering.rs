use crate::domain::state::Transport;
use crate::domain::tuning::{DampingReference, SteeringTuning};
use crate::domain::vector::Vector2D;

/// Which branch produced the acceleration; useful in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringMode {
    /// No target this tick.
    Idle,
    /// Already drifting straight at the target.
    Coast,
    /// Thrust toward the target, countering current drift.
    Correct,
    /// Overspeeding away from the target: shed speed first.
    Brake,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub acceleration: Vector2D,
    pub mode: SteeringMode,
}

impl Steering {
    fn new(acceleration: Vector2D, mode: SteeringMode) -> Self {
        Self { acceleration, mode }
    }
}

/// Converts "go to `target`" into an acceleration no longer than `max_accel`.
pub fn steer(
    unit: &Transport,
    target: Option<Vector2D>,
    max_accel: f64,
    tuning: SteeringTuning,
) -> Steering {
    let Some(target) = target else {
        return Steering::new(Vector2D::ZERO, SteeringMode::Idle);
    };
    // Snapshot decoding rejects this; keep the math total anyway.
    if !(max_accel > 0.0) {
        return Steering::new(Vector2D::ZERO, SteeringMode::Idle);
    }

    let momentum = unit.momentum();
    let direction = Vector2D::from_points(unit.position, target);
    let speed = unit.velocity.length();

    let reference = match tuning.damping_reference {
        DampingReference::Velocity => unit.velocity,
        DampingReference::Position => unit.position,
    };
    let divisor = if direction.angle_between_degrees(reference) > tuning.off_target_degrees {
        tuning.off_target_divisor
    } else {
        tuning.on_target_divisor
    };
    // Never damp below the raw drift.
    let damping = (speed / max_accel / divisor).max(1.0);
    let corrected = direction - momentum * damping;

    let heading = direction.normalize_to_length(1.0);
    let drift = momentum.normalize_to_length(1.0);
    let mut steering = if tuning.alignment.aligned(heading, drift) {
        Steering::new(Vector2D::ZERO, SteeringMode::Coast)
    } else {
        Steering::new(corrected.clamp_length(max_accel), SteeringMode::Correct)
    };

    if speed > max_accel && unit.velocity.angle_between_degrees(direction) > tuning.brake_degrees {
        steering = Steering::new(
            unit.velocity.opposite().normalize_to_length(max_accel),
            SteeringMode::Brake,
        );
    }

    steering
}
