use crate::domain::state::Bounty;
use crate::domain::tuning::PursuitTuning;
use crate::domain::vector::Vector2D;

/// Why a bounty was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitKind {
    /// Best `points - distance` among bounties inside the admission gate.
    BestValue,
    /// Nothing passed the gate; closest bounty overall.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuit<'a> {
    pub bounty: &'a Bounty,
    pub kind: PursuitKind,
}

/// Picks the bounty a unit should chase this tick.
///
/// `momentum` is the unit's combined drift (velocity + anomaly acceleration).
/// Ties keep the earlier bounty. Returns `None` only when `bounties` is empty.
pub fn select_bounty<'a>(
    position: Vector2D,
    momentum: Vector2D,
    bounties: &'a [Bounty],
    tuning: PursuitTuning,
) -> Option<Pursuit<'a>> {
    let mut nearest: Option<(&Bounty, f64)> = None;
    let mut best_value: Option<(&Bounty, f64)> = None;

    for bounty in bounties {
        let distance = Vector2D::distance(position, bounty.position);
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((bounty, distance));
        }

        let direction = Vector2D::from_points(position, bounty.position);
        let deviation = momentum.angle_between_degrees(direction);
        if !is_reachable(deviation, distance, tuning) {
            continue;
        }

        let value = bounty.points - distance;
        if best_value.is_none_or(|(_, best)| value > best) {
            best_value = Some((bounty, value));
        }
    }

    match (best_value, nearest) {
        (Some((bounty, _)), _) => Some(Pursuit {
            bounty,
            kind: PursuitKind::BestValue,
        }),
        (None, Some((bounty, _))) => Some(Pursuit {
            bounty,
            kind: PursuitKind::Nearest,
        }),
        (None, None) => None,
    }
}

fn is_reachable(deviation: f64, distance: f64, tuning: PursuitTuning) -> bool {
    (deviation <= tuning.narrow_cone_degrees && distance <= tuning.narrow_range)
        || (deviation <= tuning.wide_cone_degrees && distance <= tuning.wide_range)
}
