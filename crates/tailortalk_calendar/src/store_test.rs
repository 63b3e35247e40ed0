#[cfg(test)]
mod tests {
    use crate::models::Event;
    use crate::store::{EventStore, JsonFileStore, StoreError};
    use chrono::{DateTime, FixedOffset, TimeZone};
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("tailortalk_bookings_{}.json", Uuid::new_v4()))
    }

    fn zurich_time(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 27, hour, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let store = JsonFileStore::new(temp_path());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn events_round_trip_with_timezone_offset() {
        let path = temp_path();
        let store = JsonFileStore::new(&path);
        let events = vec![Event {
            id: "evt_test".to_string(),
            summary: "Meeting via TailorTalk".to_string(),
            description: String::new(),
            start: zurich_time(14),
            end: zurich_time(15),
        }];
        store.save(&events).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, events);
        // Offset must survive, not just the instant.
        assert_eq!(loaded[0].start.offset().local_minus_utc(), 2 * 3600);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn save_replaces_the_whole_collection() {
        let path = temp_path();
        let store = JsonFileStore::new(&path);
        let one = vec![Event {
            id: "evt_one".to_string(),
            summary: "First".to_string(),
            description: String::new(),
            start: zurich_time(9),
            end: zurich_time(10),
        }];
        store.save(&one).await.unwrap();
        store.save(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_a_hard_error() {
        let path = temp_path();
        tokio::fs::write(&path, b"{ not json ").await.unwrap();
        let store = JsonFileStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
