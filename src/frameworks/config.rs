use std::{env, path::PathBuf, time::Duration};

use crate::domain::DecisionTuning;
use crate::domain::tuning::{AlignmentCheck, DampingReference};
use crate::interface_adapters::clients::{PRODUCTION_URL, TEST_URL};
use crate::interface_adapters::render::rewind::{DEFAULT_HOST, DEFAULT_PORT};

// Runtime constants and env lookups (gameplay tuning lives in domain::tuning).

pub const DEFAULT_GAME_NAME: &str = "magcarp";

pub fn api_token() -> Option<String> {
    env::var("API_TOKEN").ok().filter(|token| !token.is_empty())
}

pub fn use_test_server() -> bool {
    flag("USE_TEST_SERVER", false)
}

pub fn game_api_url() -> String {
    env::var("GAME_API_URL").unwrap_or_else(|_| {
        if use_test_server() {
            TEST_URL.to_string()
        } else {
            PRODUCTION_URL.to_string()
        }
    })
}

pub fn game_name() -> String {
    env::var("GAME_NAME").unwrap_or_else(|_| DEFAULT_GAME_NAME.to_string())
}

pub fn api_timeout() -> Duration {
    let millis = env::var("API_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(2000);
    Duration::from_millis(millis)
}

// Set to run offline against a stored world snapshot.
pub fn mock_snapshot_path() -> Option<PathBuf> {
    env::var_os("MOCK_SNAPSHOT_PATH").map(PathBuf::from)
}

pub fn rewind_enabled() -> bool {
    flag("REWIND_ENABLED", true)
}

pub fn rewind_host() -> String {
    env::var("REWIND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn rewind_port() -> u16 {
    env::var("REWIND_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn tick_interval() -> Duration {
    let millis = env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(100);
    Duration::from_millis(millis)
}

// 0 or unset runs until Ctrl-C.
pub fn tick_limit() -> Option<u64> {
    env::var("TICK_LIMIT")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|limit| *limit > 0)
}

pub fn decision_tuning() -> DecisionTuning {
    let mut tuning = DecisionTuning::default();
    if let Some(reference) = env::var("DAMPING_REFERENCE")
        .ok()
        .and_then(|v| parse_damping_reference(&v))
    {
        tuning.steering.damping_reference = reference;
    }
    if let Some(epsilon) = env::var("ALIGNMENT_EPSILON")
        .ok()
        .and_then(|v| parse_alignment_epsilon(&v))
    {
        tuning.steering.alignment = AlignmentCheck::Within(epsilon);
    }
    tuning
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_damping_reference(value: &str) -> Option<DampingReference> {
    match value.trim().to_ascii_lowercase().as_str() {
        "velocity" => Some(DampingReference::Velocity),
        "position" => Some(DampingReference::Position),
        _ => None,
    }
}

fn parse_alignment_epsilon(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|epsilon| epsilon.is_finite() && *epsilon >= 0.0)
}
