// Builds the per-tick debug frame: status text, world objects, our orders.

use crate::domain::{Color, Command, DrawCall, Vector2D, WorldSnapshot};

const ANOMALY_LAYER: u32 = 1;
const BOUNTY_LAYER: u32 = 2;
const ENEMY_LAYER: u32 = 3;
const TRANSPORT_LAYER: u32 = 4;
const WANTED_LAYER: u32 = 5;

const UNIT_HALF_SIZE: f64 = 10.0;
const SHIELD_HALF_SIZE: f64 = 5.0;
const HEALTH_BAR_OFFSET: f64 = 15.0;
const HEALTH_BAR_LENGTH: f64 = 30.0;
const HEALTH_BAR_HEIGHT: f64 = 5.0;
const MAX_HEALTH: f64 = 100.0;

/// Draw calls for one tick, always terminated by `DrawCall::EndFrame`.
pub fn build_frame(snapshot: &WorldSnapshot, commands: &[Command]) -> Vec<DrawCall> {
    let mut calls = status_messages(snapshot);

    // Map boundary stays on screen across frames.
    calls.push(DrawCall::permanent(true));
    calls.push(DrawCall::Rectangle {
        top_left: Vector2D::ZERO,
        bottom_right: snapshot.map_size,
        color: Color::GREEN,
        fill: false,
    });
    calls.push(DrawCall::permanent(false));

    if !snapshot.anomalies.is_empty() {
        calls.push(DrawCall::layer(ANOMALY_LAYER));
    }
    for anomaly in &snapshot.anomalies {
        calls.push(circle(anomaly.position, anomaly.radius, Color::DARK_PURPLE));
        calls.push(circle(anomaly.position, anomaly.effective_radius, Color::PURPLE));
        calls.push(DrawCall::Popup {
            center: anomaly.position,
            radius: anomaly.radius,
            text: format!("Anomaly {}", anomaly.id),
        });
    }

    if !snapshot.bounties.is_empty() {
        calls.push(DrawCall::layer(BOUNTY_LAYER));
    }
    for bounty in &snapshot.bounties {
        calls.push(circle(bounty.position, bounty.radius, Color::YELLOW));
        calls.push(DrawCall::Popup {
            center: bounty.position,
            radius: bounty.radius,
            text: format!("Bounty - {}", bounty.points),
        });
    }

    if !snapshot.enemies.is_empty() {
        calls.push(DrawCall::layer(ENEMY_LAYER));
    }
    for enemy in &snapshot.enemies {
        calls.push(DrawCall::square(enemy.position, UNIT_HALF_SIZE, Color::RED));
        calls.push(DrawCall::Popup {
            center: enemy.position,
            radius: UNIT_HALF_SIZE,
            text: "enemy".to_string(),
        });
        health_bar(&mut calls, enemy.position, enemy.health);
        if enemy.shield_left_ms > 0 {
            calls.push(DrawCall::square(enemy.position, SHIELD_HALF_SIZE, Color::PURPLE));
        }
    }

    if !snapshot.transports.is_empty() {
        calls.push(DrawCall::layer(TRANSPORT_LAYER));
    }
    for transport in &snapshot.transports {
        let at = transport.position;
        calls.push(DrawCall::square(at, UNIT_HALF_SIZE, Color::DARK_GREEN));
        calls.push(DrawCall::Popup {
            center: at,
            radius: UNIT_HALF_SIZE,
            text: format!("Transport {}", transport.id),
        });
        health_bar(&mut calls, at, transport.health);
        if transport.shield_left_ms > 0 {
            calls.push(DrawCall::square(at, SHIELD_HALF_SIZE, Color::PURPLE));
        }
        calls.push(line(at, at + transport.self_acceleration, Color::DARK_GREEN));
        calls.push(line(at, at + transport.anomaly_acceleration, Color::DARK_PURPLE));
        calls.push(line(at, at + transport.velocity, Color::BLUE));
    }

    if !snapshot.wanted_list.is_empty() {
        calls.push(DrawCall::layer(WANTED_LAYER));
    }
    for wanted in &snapshot.wanted_list {
        calls.push(circle(*wanted, 0.5, Color::DARK_RED));
        calls.push(DrawCall::Popup {
            center: *wanted,
            radius: UNIT_HALF_SIZE,
            text: "wanted".to_string(),
        });
    }

    for command in commands {
        let Some(aim) = command.attack else {
            continue;
        };
        if let Some(transport) = snapshot.transports.iter().find(|t| t.id == command.id) {
            calls.push(line(transport.position, aim, Color::DARK_PURPLE));
        }
    }

    calls.push(DrawCall::EndFrame);
    calls
}

/// Text panel with match-wide parameters and a block per own transport.
pub fn status_messages(snapshot: &WorldSnapshot) -> Vec<DrawCall> {
    let mut lines = vec![
        format!("Points {}", snapshot.points),
        format!("attackCooldownMs {}", snapshot.attack_cooldown_ms),
        format!("attackDamage {}", snapshot.attack_damage),
        format!("attackExplosionRadius {}", snapshot.attack_explosion_radius),
        format!("attackRange {}", snapshot.attack_range),
        format!("maxAccel {}", snapshot.max_accel),
        format!("maxSpeed {}", snapshot.max_speed),
    ];

    const SEPARATOR: &str = "---------------------------------";
    for (index, t) in snapshot.transports.iter().enumerate() {
        lines.push(SEPARATOR.to_string());
        lines.push(format!("Transport {}:", index + 1));
        lines.push(format!("ID {}", t.id));
        lines.push(format!("Status {}", t.status));
        lines.push(format!("Health {} / {}", t.health, MAX_HEALTH));
        lines.push(format!("Position: (x: {}, y: {})", t.position.x, t.position.y));
        lines.push(format!("Velocity: (x: {}, y: {})", t.velocity.x, t.velocity.y));
        lines.push(format!(
            "Self Acceleration: (x: {}, y: {})",
            t.self_acceleration.x, t.self_acceleration.y
        ));
        lines.push(format!(
            "Anomaly Acceleration: (x: {}, y: {})",
            t.anomaly_acceleration.x, t.anomaly_acceleration.y
        ));
        lines.push(format!("Attack Cooldown: {} ms", t.attack_cooldown_ms));
        lines.push(format!(
            "Shield Cooldown: {}/{} ms",
            t.shield_left_ms, t.shield_cooldown_ms
        ));
        lines.push(format!("Death Count: {}", t.death_count));
        lines.push(SEPARATOR.to_string());
    }

    lines.into_iter().map(DrawCall::Message).collect()
}

fn circle(center: Vector2D, radius: f64, color: Color) -> DrawCall {
    DrawCall::Circle {
        center,
        radius,
        color,
        fill: false,
    }
}

fn line(from: Vector2D, to: Vector2D, color: Color) -> DrawCall {
    DrawCall::Line { from, to, color }
}

// Filled part in red, missing part in dark red.
fn health_bar(calls: &mut Vec<DrawCall>, at: Vector2D, health: f64) {
    let left = at.x - HEALTH_BAR_OFFSET;
    let top = at.y - HEALTH_BAR_OFFSET;
    let bottom = top + HEALTH_BAR_HEIGHT;
    let filled = health.clamp(0.0, MAX_HEALTH) / MAX_HEALTH * HEALTH_BAR_LENGTH;

    calls.push(DrawCall::Rectangle {
        top_left: Vector2D::new(left, top),
        bottom_right: Vector2D::new(left + filled, bottom),
        color: Color::RED,
        fill: false,
    });
    calls.push(DrawCall::Rectangle {
        top_left: Vector2D::new(left + filled, top),
        bottom_right: Vector2D::new(left + HEALTH_BAR_LENGTH, bottom),
        color: Color::DARK_RED,
        fill: false,
    });
}
