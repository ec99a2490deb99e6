use async_trait::async_trait;

use crate::domain::draw::DrawCall;
use crate::domain::errors::{ApiError, RenderError};
use crate::domain::state::{Command, WorldSnapshot};

// The tick loop depends on these traits, not on the HTTP or socket clients.

// Port for the game server: hand in last tick's orders, get the fresh world back.
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn submit_commands(&self, commands: &[Command]) -> Result<WorldSnapshot, ApiError>;
}

// Port for the debug viewer. Best effort; callers never let a failure here
// change the commands.
#[async_trait]
pub trait DrawSink: Send {
    async fn draw_frame(&mut self, calls: &[DrawCall]) -> Result<(), RenderError>;

    async fn shutdown(&mut self);
}
