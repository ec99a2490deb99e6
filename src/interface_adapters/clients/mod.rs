pub mod game_api;
pub mod snapshot_file;

pub use game_api::{GameApiClient, PRODUCTION_URL, TEST_URL};
pub use snapshot_file::SnapshotFile;
