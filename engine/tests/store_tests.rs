//! Time-series store tests
//!
//! Covers the append/query round-trip, ordering enforcement, and the
//! inclusive-window query contract.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use farm_insight_engine::{EngineError, TimeSeriesStore};
use shared::{EntityId, Metric, Sample, TimeWindow, Unit};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn ts(hours: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(hours)
}

fn sample(hours: i64, value: i64) -> Sample {
    Sample::new(ts(hours), Decimal::from(value), Unit::Celsius)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_append_then_query_full_range_round_trip() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("station:north");
    let samples = vec![sample(0, 20), sample(1, 21), sample(2, 23)];

    for s in &samples {
        store
            .append(id.clone(), Metric::Temperature, s.clone())
            .unwrap();
    }

    let window = TimeWindow::new(ts(0), ts(2));
    let queried = store.query(&id, Metric::Temperature, &window);
    assert_eq!(queried, samples);
}

#[test]
fn test_out_of_order_append_rejected_and_store_untouched() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("station:north");

    store
        .append(id.clone(), Metric::Temperature, sample(5, 20))
        .unwrap();

    let err = store
        .append(id.clone(), Metric::Temperature, sample(3, 19))
        .unwrap_err();
    assert!(matches!(err, EngineError::OutOfOrderSample { .. }));

    // Equal timestamp is also rejected
    let err = store
        .append(id.clone(), Metric::Temperature, sample(5, 22))
        .unwrap_err();
    assert!(matches!(err, EngineError::OutOfOrderSample { .. }));

    let window = TimeWindow::new(ts(0), ts(10));
    assert_eq!(store.query(&id, Metric::Temperature, &window).len(), 1);
}

#[test]
fn test_same_timestamp_allowed_on_different_keys() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("station:north");

    store
        .append(id.clone(), Metric::Temperature, sample(0, 20))
        .unwrap();
    store
        .append(id.clone(), Metric::Precipitation, sample(0, 40))
        .unwrap();
    store
        .append(EntityId::new("station:south"), Metric::Temperature, sample(0, 25))
        .unwrap();

    assert_eq!(store.len(), 3);
}

#[test]
fn test_window_bounds_are_inclusive() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("station:north");
    for hour in 0..5 {
        store
            .append(id.clone(), Metric::Temperature, sample(hour, 20))
            .unwrap();
    }

    let window = TimeWindow::new(ts(1), ts(3));
    let queried = store.query(&id, Metric::Temperature, &window);
    assert_eq!(queried.len(), 3);
    assert_eq!(queried[0].timestamp, ts(1));
    assert_eq!(queried[2].timestamp, ts(3));
}

#[test]
fn test_empty_window_yields_empty_not_error() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("station:north");
    store
        .append(id.clone(), Metric::Temperature, sample(0, 20))
        .unwrap();

    // end before start matches nothing
    let window = TimeWindow::new(ts(5), ts(1));
    assert!(store.query(&id, Metric::Temperature, &window).is_empty());
}

#[test]
fn test_unknown_key_yields_empty() {
    let store = TimeSeriesStore::new();
    let window = TimeWindow::new(ts(0), ts(10));
    let queried = store.query(&EntityId::new("nope"), Metric::Price, &window);
    assert!(queried.is_empty());
}

#[test]
fn test_contains_series() {
    let store = TimeSeriesStore::new();
    let id = EntityId::new("crop:wheat");
    assert!(!store.contains_series(&id, Metric::Irrigation));

    store
        .append(id.clone(), Metric::Irrigation, sample(0, 1))
        .unwrap();
    assert!(store.contains_series(&id, Metric::Irrigation));
}

#[test]
fn test_concurrent_readers_share_the_store() {
    use std::sync::Arc;

    let store = Arc::new(TimeSeriesStore::new());
    let id = EntityId::new("station:north");
    for hour in 0..10 {
        store
            .append(id.clone(), Metric::Temperature, sample(hour, 20 + hour))
            .unwrap();
    }

    let window = TimeWindow::new(ts(0), ts(9));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            std::thread::spawn(move || store.query(&id, Metric::Temperature, &window).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Append followed by query over the full range returns exactly the
    /// appended samples in timestamp order
    #[test]
    fn test_round_trip_preserves_samples(
        hour_gaps in prop::collection::vec(1i64..48, 1..40),
        values in prop::collection::vec(-100i64..1000, 40),
    ) {
        let store = TimeSeriesStore::new();
        let id = EntityId::new("prop:entity");

        let mut hour = 0;
        let mut appended = Vec::new();
        for (gap, value) in hour_gaps.iter().zip(values.iter()) {
            hour += gap;
            let s = sample(hour, *value);
            store.append(id.clone(), Metric::Price, s.clone()).unwrap();
            appended.push(s);
        }

        let window = TimeWindow::new(ts(0), ts(hour));
        let queried = store.query(&id, Metric::Price, &window);
        prop_assert_eq!(queried, appended);
    }

    /// Every queried sample falls inside the requested window
    #[test]
    fn test_query_respects_window(
        start in 0i64..50,
        len in 0i64..50,
    ) {
        let store = TimeSeriesStore::new();
        let id = EntityId::new("prop:entity");
        for hour in 0..100 {
            store.append(id.clone(), Metric::Price, sample(hour, hour)).unwrap();
        }

        let window = TimeWindow::new(ts(start), ts(start + len));
        let queried = store.query(&id, Metric::Price, &window);
        prop_assert_eq!(queried.len() as i64, len + 1);
        for s in queried {
            prop_assert!(window.contains(s.timestamp));
        }
    }
}
