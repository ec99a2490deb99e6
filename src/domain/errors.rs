// Domain-level errors surfaced through the ports.

use thiserror::Error;

/// The upstream snapshot could not be turned into a `WorldSnapshot`.
#[derive(Debug, Error)]
pub enum SnapshotError {
    // serde_json names the missing/mistyped field and its position.
    #[error("malformed world snapshot: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid world snapshot: `{field}` = {value}")]
    InvalidParameter { field: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game api transport error: {0}")]
    Transport(String),
    #[error("game api upstream error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("game api response decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("snapshot file error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("viewer io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("viewer serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("viewer disconnected")]
    Disconnected,
}
