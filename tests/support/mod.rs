// Shared fixtures for integration tests: a fake game API and snapshot files.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

// Game name whose rounds listing comes back as an HTML maintenance page.
pub const GARBLED_GAME: &str = "garbled";

// Tokens with this prefix are refused by the fake API.
pub const REJECTED_TOKEN_PREFIX: &str = "rejected-";

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();
// Move request bodies keyed by auth token, so tests sharing the server stay isolated.
static RECORDED: OnceLock<Mutex<HashMap<String, Vec<Value>>>> = OnceLock::new();

fn recorded() -> &'static Mutex<HashMap<String, Vec<Value>>> {
    RECORDED.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Move bodies the fake API received for `token`, in arrival order.
pub fn recorded_moves(token: &str) -> Vec<Value> {
    recorded()
        .lock()
        .expect("recorded mutex poisoned")
        .get(token)
        .cloned()
        .unwrap_or_default()
}

pub fn unique_token() -> String {
    format!("token-{}", uuid::Uuid::new_v4())
}

/// A full, valid round state as the game server sends it.
pub fn round_state_json() -> Value {
    json!({
        "points": 42,
        "attackCooldownMs": 1000,
        "attackDamage": 30,
        "attackExplosionRadius": 30,
        "attackRange": 200,
        "maxAccel": 10,
        "maxSpeed": 110,
        "mapSize": { "x": 1000, "y": 1000 },
        "transports": [{
            "id": "t-1",
            "x": 0, "y": 0,
            "velocity": { "x": 0, "y": 0 },
            "selfAcceleration": { "x": 0, "y": 0 },
            "anomalyAcceleration": { "x": 0, "y": 0 },
            "health": 100,
            "status": "alive",
            "shieldLeftMs": 0,
            "shieldCooldownMs": 0,
            "attackCooldownMs": 0,
            "deathCount": 0
        }],
        "enemies": [{
            "x": 30, "y": 0,
            "velocity": { "x": 0, "y": 9 },
            "health": 20,
            "status": "alive",
            "shieldLeftMs": 0,
            "killBounty": 15
        }],
        "bounties": [{ "x": 100, "y": 0, "points": 50, "radius": 5 }],
        "wantedList": [],
        "anomalies": [{
            "id": "a-1",
            "x": 500, "y": 500,
            "radius": 20,
            "effectiveRadius": 80,
            "strength": 2,
            "velocity": { "x": 0, "y": 0 }
        }]
    })
}

/// Writes `contents` to a uniquely named file under the system temp dir.
pub fn write_snapshot_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("snapshot-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("write snapshot fixture");
    path
}

fn auth_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("X-Auth-Token")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn move_handler(
    Path(_game): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let Some(token) = auth_token(&headers) else {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "missing token" })));
    };
    if token.starts_with(REJECTED_TOKEN_PREFIX) {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "invalid token" })));
    }

    recorded()
        .lock()
        .expect("recorded mutex poisoned")
        .entry(token)
        .or_default()
        .push(body);
    (StatusCode::OK, Json(round_state_json()))
}

async fn rounds_handler(Path(game): Path<String>) -> Response {
    if game == GARBLED_GAME {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    Json(json!({
        "gameName": game,
        "now": "2026-10-17T10:00:00Z",
        "rounds": [
            { "name": "round 1", "status": "ended", "duration": 1800, "repeat": 0 },
            { "name": "round 2", "status": "active", "startAt": "2026-10-17T09:45:00Z" }
        ]
    }))
    .into_response()
}

// Ensure the fake game API is running and return its base URL.
pub fn ensure_game_api() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Own OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));

                let app = Router::new()
                    .route("/play/{game}/player/move", post(move_handler))
                    .route("/rounds/{game}", get(rounds_handler));
                axum::serve(listener, app).await.expect("fake api failed");
            });
        });
        wait_for_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("fake game api did not become ready in time");
}
