use crate::domain::systems::{combat, pursuit, steering};
use crate::domain::{Command, DecisionTuning, Transport, WorldSnapshot};
use tracing::debug;

/// One command per own transport, in snapshot order.
///
/// Pure: the same snapshot always yields the same commands. Units decide
/// independently, so two of them may chase the same bounty.
pub fn decide(snapshot: &WorldSnapshot, tuning: &DecisionTuning) -> Vec<Command> {
    snapshot
        .transports
        .iter()
        .map(|unit| decide_transport(unit, snapshot, tuning))
        .collect()
}

fn decide_transport(unit: &Transport, snapshot: &WorldSnapshot, tuning: &DecisionTuning) -> Command {
    let chase = pursuit::select_bounty(
        unit.position,
        unit.momentum(),
        &snapshot.bounties,
        tuning.pursuit,
    );
    let thrust = steering::steer(
        unit,
        chase.map(|p| p.bounty.position),
        snapshot.max_accel,
        tuning.steering,
    );
    let activate_shield = combat::wants_shield(unit, tuning.combat);
    let attack = combat::select_attack(
        unit,
        &snapshot.enemies,
        snapshot.attack_range,
        snapshot.attack_damage,
        tuning.combat,
    );

    debug!(
        transport_id = %unit.id,
        pursuit = ?chase.map(|p| p.kind),
        steering = ?thrust.mode,
        activate_shield,
        lethal = ?attack.map(|a| a.lethal),
        "transport decided"
    );

    Command {
        id: unit.id.clone(),
        acceleration: thrust.acceleration,
        activate_shield,
        attack: attack.map(|a| a.aim),
    }
}
