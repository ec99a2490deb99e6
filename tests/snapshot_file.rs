mod support;

use transport_pilot::domain::{ApiError, GameApi, SnapshotError};
use transport_pilot::interface_adapters::clients::SnapshotFile;

#[tokio::test]
async fn when_snapshot_file_is_valid_then_every_submission_returns_it() {
    let path = support::write_snapshot_file(&support::round_state_json().to_string());
    let api = SnapshotFile::new(&path);

    let first = api.submit_commands(&[]).await.expect("first read");
    let second = api.submit_commands(&[]).await.expect("second read");

    assert_eq!(first, second);
    assert_eq!(first.bounties.len(), 1);
    assert_eq!(first.anomalies[0].id, "a-1");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn when_snapshot_file_changes_then_next_tick_sees_the_edit() {
    let mut world = support::round_state_json();
    let path = support::write_snapshot_file(&world.to_string());
    let api = SnapshotFile::new(&path);
    api.submit_commands(&[]).await.expect("first read");

    world["points"] = serde_json::json!(99);
    std::fs::write(&path, world.to_string()).expect("rewrite fixture");
    let snapshot = api.submit_commands(&[]).await.expect("second read");

    assert_eq!(snapshot.points, 99.0);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn when_snapshot_file_is_missing_then_io_error_is_returned() {
    let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));

    let result = SnapshotFile::new(path).submit_commands(&[]).await;

    assert!(matches!(result, Err(ApiError::Io(_))));
}

#[tokio::test]
async fn when_snapshot_file_has_zero_max_accel_then_it_is_rejected() {
    let mut world = support::round_state_json();
    world["maxAccel"] = serde_json::json!(0);
    let path = support::write_snapshot_file(&world.to_string());

    let result = SnapshotFile::new(&path).submit_commands(&[]).await;

    assert!(matches!(
        result,
        Err(ApiError::Snapshot(SnapshotError::InvalidParameter {
            field: "maxAccel",
            ..
        }))
    ));

    let _ = std::fs::remove_file(path);
}
