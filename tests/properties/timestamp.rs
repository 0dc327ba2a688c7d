//! Property-based tests for calendar date packing.
//!
//! These tests verify the packed layout against chrono's own calendar
//! arithmetic and that out-of-range years are always rejected.
//!   Refer to `src/domain/timestamp.rs` for more details.
use chrono::{DateTime, Datelike, Utc};
use proptest::{prelude::*, test_runner::Config};
use registration_relayer::domain::pack_calendar_date;

// Unix seconds for 2000-01-01T00:00:00Z, the first packable instant.
const PACKABLE_EPOCH: i64 = 946_684_800;

proptest! {
  // Set the number of cases to 1000
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// Packed fields match the UTC calendar date chrono reports.
  #[test]
  fn prop_packed_fields_match_calendar(ts in PACKABLE_EPOCH..9_000_000_000i64) {
      let packed = pack_calendar_date(ts).unwrap();
      let date = DateTime::<Utc>::from_timestamp(ts, 0).unwrap();

      prop_assert_eq!(packed & 0xFF, date.day());
      prop_assert_eq!((packed >> 8) & 0xFF, date.month());
      prop_assert_eq!((packed >> 16) & 0xFF, (date.year() - 2000) as u32);
      // Nothing above the year byte is ever set.
      prop_assert_eq!(packed >> 24, 0);
  }

  /// Any two timestamps on the same UTC day pack identically.
  #[test]
  fn prop_time_of_day_is_discarded(
      ts in PACKABLE_EPOCH..9_000_000_000i64,
      seconds_into_day in 0i64..86_400
  ) {
      let midnight = ts - ts.rem_euclid(86_400);
      let packed_midnight = pack_calendar_date(midnight).unwrap();
      let packed_later = pack_calendar_date(midnight + seconds_into_day).unwrap();

      prop_assert_eq!(packed_midnight, packed_later);
  }

  /// Timestamps before the year 2000 are always rejected.
  #[test]
  fn prop_pre_2000_timestamps_are_rejected(ts in -10_000_000_000i64..PACKABLE_EPOCH) {
      prop_assert!(pack_calendar_date(ts).is_err());
  }

  /// Packing never panics, whatever the timestamp.
  #[test]
  fn prop_packing_is_total(ts in any::<i64>()) {
      let _ = pack_calendar_date(ts);
  }
}
