#[cfg(test)]
mod tests {
    use crate::logic::{overlaps, BookingEngine};
    use crate::models::Event;
    use crate::store::{EventStore, MemoryStore};
    use chrono::{DateTime, Duration, FixedOffset};
    use proptest::prelude::*;
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    // Helper function to create the base instant all offsets count from
    fn base_time() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-27T00:00:00+02:00")
            .expect("Failed to parse base time")
    }

    // Helper function to create a slot at a minute offset from the base
    fn slot_at(
        start_minutes: i64,
        duration_minutes: i64,
    ) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let start = base_time() + Duration::minutes(start_minutes);
        (start, start + Duration::minutes(duration_minutes))
    }

    // Helper function to create a stored event at a minute offset
    fn event_at(id: usize, start_minutes: i64, duration_minutes: i64) -> Event {
        let (start, end) = slot_at(start_minutes, duration_minutes);
        Event {
            id: format!("evt_{}", id),
            summary: "Busy".to_string(),
            description: String::new(),
            start,
            end,
        }
    }

    proptest! {
        // Test that the overlap check matches the half-open interval formula
        #[test]
        fn overlap_check_matches_the_half_open_formula(
            event_start in 0..1440i64,
            event_minutes in 1..240i64,
            query_offset in -480..480i64,
            query_minutes in 1..240i64,
        ) {
            let event = event_at(0, event_start, event_minutes);
            let (start, end) = slot_at(event_start + query_offset, query_minutes);

            let expected = event.start < end && event.end > start;
            prop_assert_eq!(overlaps(&event, start, end), expected,
                "Overlap of {:?}-{:?} with query {:?}-{:?} should be {}",
                event.start, event.end, start, end, expected);
        }

        // Test that intervals touching at an endpoint never conflict
        #[test]
        fn touching_intervals_never_conflict(
            event_start in 0..1440i64,
            event_minutes in 1..240i64,
            query_minutes in 1..240i64,
        ) {
            let event = event_at(0, event_start, event_minutes);

            // A query ending exactly at the event's start
            let (start, end) = slot_at(event_start - query_minutes, query_minutes);
            prop_assert!(!overlaps(&event, start, end),
                "Query ending at the event's start should not conflict");

            // A query starting exactly at the event's end
            let (start, end) = slot_at(event_start + event_minutes, query_minutes);
            prop_assert!(!overlaps(&event, start, end),
                "Query starting at the event's end should not conflict");
        }

        // Test that whatever sequence of bookings is attempted, the events
        // the engine accepts are pairwise non-overlapping
        #[test]
        fn accepted_bookings_never_overlap(
            start_offsets in prop::collection::vec(0..1440i64, 1..12),
            duration_minutes in 15..120i64,
        ) {
            let events = Runtime::new().unwrap().block_on(async {
                let store = Arc::new(MemoryStore::new());
                let engine = BookingEngine::new(store.clone());
                for offset in &start_offsets {
                    let (start, end) = slot_at(*offset, duration_minutes);
                    engine.book(start, end, None).await.unwrap();
                }
                store.load().await.unwrap()
            });

            for a in &events {
                for b in &events {
                    if a.id != b.id {
                        prop_assert!(!(a.start < b.end && a.end > b.start),
                            "Accepted events {:?}-{:?} and {:?}-{:?} overlap",
                            a.start, a.end, b.start, b.end);
                    }
                }
            }
        }

        // Test that any suggestion is a whole-hour shift of the rejected
        // interval, free, same length, and at most 24 hours out
        #[test]
        fn suggestions_are_free_hourly_shifts_within_a_day(
            busy_offsets in prop::collection::vec(0..1440i64, 0..8),
            request_offset in 0..1440i64,
            duration_minutes in 15..120i64,
        ) {
            let (request_start, request_end) = slot_at(request_offset, duration_minutes);

            let (suggestion, suggestion_is_free) = Runtime::new().unwrap().block_on(async {
                let store = Arc::new(MemoryStore::new());
                let busy: Vec<Event> = busy_offsets
                    .iter()
                    .enumerate()
                    .map(|(i, offset)| event_at(i, *offset, 60))
                    .collect();
                store.save(&busy).await.unwrap();

                let engine = BookingEngine::new(store);
                let suggestion = engine.suggest_next(request_start, request_end).await.unwrap();
                let suggestion_is_free = match &suggestion {
                    Some(slot) => engine.is_free(slot.start, slot.end).await.unwrap(),
                    None => true,
                };
                (suggestion, suggestion_is_free)
            });

            if let Some(slot) = suggestion {
                let shift = slot.start - request_start;
                prop_assert!(shift > Duration::zero(),
                    "Suggestion must be strictly after the rejected start");
                prop_assert!(shift <= Duration::hours(24),
                    "Suggestion must be within 24 hours of the rejected start");
                prop_assert_eq!(shift.num_minutes() % 60, 0,
                    "Suggestion must be a whole-hour shift");
                prop_assert_eq!(slot.end - slot.start, request_end - request_start,
                    "Suggestion must keep the requested duration");
                prop_assert!(suggestion_is_free, "Suggested slot must be free");
            }
        }
    }
}
