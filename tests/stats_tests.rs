// Integration tests for the service statistics counters

mod common;

use neovia_tracker::stats::enums::stats_event::StatsEvent;

#[tokio::test]
async fn test_stats_initial_values() {
    let tracker = common::create_test_tracker().await;

    let stats = tracker.get_service_stats();

    assert!(stats.started > 0, "started timestamp should be set at boot");
    assert_eq!(stats.games, 0, "Initial games count should be 0");
    assert_eq!(stats.downloads, 0, "Initial downloads count should be 0");
    assert_eq!(stats.api_handled, 0, "Initial api_handled count should be 0");
    assert_eq!(stats.mirror_updates, 0, "Initial mirror_updates count should be 0");
}

#[tokio::test]
async fn test_stats_increment_decrement() {
    let tracker = common::create_test_tracker().await;

    tracker.update_stats(StatsEvent::Games, 1);
    tracker.update_stats(StatsEvent::Downloads, 5);
    tracker.update_stats(StatsEvent::ApiHandled, 10);

    let stats = tracker.get_service_stats();
    assert_eq!(stats.games, 1, "Games should be 1");
    assert_eq!(stats.downloads, 5, "Downloads should be 5");
    assert_eq!(stats.api_handled, 10, "ApiHandled should be 10");

    tracker.update_stats(StatsEvent::Downloads, -2);
    tracker.update_stats(StatsEvent::ApiHandled, -3);

    let stats = tracker.get_service_stats();
    assert_eq!(stats.downloads, 3, "Downloads should be 3 after decrement");
    assert_eq!(stats.api_handled, 7, "ApiHandled should be 7 after decrement");
}

#[tokio::test]
async fn test_stats_set_value() {
    let tracker = common::create_test_tracker().await;

    tracker.set_stats(StatsEvent::TimestampLastRecord, 1700000000);
    let stats = tracker.get_service_stats();
    assert_eq!(stats.timestamp_last_record, 1700000000);

    tracker.set_stats(StatsEvent::Downloads, 42);
    let stats = tracker.get_service_stats();
    assert_eq!(stats.downloads, 42);
}

#[tokio::test]
async fn test_stats_concurrent_updates() {
    let tracker = common::create_test_tracker().await;

    let mut handles = vec![];

    for _ in 0..100 {
        let tracker_clone = tracker.clone();
        let handle = tokio::spawn(async move {
            tracker_clone.update_stats(StatsEvent::ApiHandled, 1);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let stats = tracker.get_service_stats();
    assert_eq!(stats.api_handled, 100, "ApiHandled should be 100 after 100 concurrent increments");
}

#[tokio::test]
async fn test_record_updates_service_counters() {
    let tracker = common::create_test_tracker().await;

    tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();
    tracker.record("TOTK", "Zelda: TOTK", None, None, None).await.unwrap();
    tracker.record("MC", "Minecraft", None, None, None).await.unwrap();

    let stats = tracker.get_service_stats();
    assert_eq!(stats.games, 2, "two distinct games were seen");
    assert_eq!(stats.downloads, 3, "three downloads were recorded");
    assert!(stats.timestamp_last_record > 0, "last record timestamp is set");
}
