use crate::domain::state::{Enemy, Transport};
use crate::domain::tuning::CombatTuning;
use crate::domain::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPlan<'a> {
    pub target: &'a Enemy,
    // Lead-compensated, integer-rounded.
    pub aim: Vector2D,
    // Target dies from this hit.
    pub lethal: bool,
}

/// Shield goes up on low health whenever it is off cooldown. No memory between ticks.
pub fn wants_shield(unit: &Transport, tuning: CombatTuning) -> bool {
    unit.health <= tuning.shield_health_threshold && unit.shield_cooldown_ms == 0
}

/// Chooses whom to shoot, if anyone.
///
/// Only unshielded enemies within `attack_range` are considered. The first one
/// that a single hit kills wins outright; otherwise the nearest candidate is used.
pub fn select_attack<'a>(
    unit: &Transport,
    enemies: &'a [Enemy],
    attack_range: f64,
    attack_damage: f64,
    tuning: CombatTuning,
) -> Option<AttackPlan<'a>> {
    if unit.attack_cooldown_ms != 0 {
        return None;
    }

    let mut nearest: Option<(&Enemy, f64)> = None;
    let mut lethal = None;
    for enemy in enemies {
        let distance = Vector2D::distance(unit.position, enemy.position);
        if enemy.is_shielded() || distance > attack_range {
            continue;
        }
        if enemy.health <= attack_damage {
            lethal = Some(enemy);
            break;
        }
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((enemy, distance));
        }
    }

    let (target, lethal) = match (lethal, nearest) {
        (Some(enemy), _) => (enemy, true),
        (None, Some((enemy, _))) => (enemy, false),
        (None, None) => return None,
    };

    Some(AttackPlan {
        target,
        aim: lead_aim(target, tuning),
        lethal,
    })
}

/// First-order extrapolation of where the target will be when the shot lands.
pub fn lead_aim(target: &Enemy, tuning: CombatTuning) -> Vector2D {
    (target.position + target.velocity / tuning.lead_divisor).round()
}
