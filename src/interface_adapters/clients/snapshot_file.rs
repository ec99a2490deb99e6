use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{ApiError, Command, GameApi, WorldSnapshot};
use crate::interface_adapters::protocol::decode_snapshot;

// Offline stand-in for the game API: every submission answers with the
// world stored in one JSON file. Re-read per tick so edits show up live.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GameApi for SnapshotFile {
    async fn submit_commands(&self, _commands: &[Command]) -> Result<WorldSnapshot, ApiError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(decode_snapshot(&body)?)
    }
}
