// Domain layer: world model, decision rules and ports.

pub mod draw;
pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod vector;

pub use draw::{Color, DrawCall};
pub use errors::{ApiError, RenderError, SnapshotError};
pub use ports::{DrawSink, GameApi};
pub use state::{Anomaly, Bounty, Command, Enemy, Transport, WorldSnapshot};
pub use tuning::DecisionTuning;
pub use vector::Vector2D;
