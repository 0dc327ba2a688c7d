//! Property-based tests for logging.
//!
//! These tests verify the behavior of the `rolled_log_path` function,
//! focusing on suffix handling and output consistency across various input
//! combinations.
//!   Refer to `src/logging/mod.rs` for more details.
use proptest::{prelude::*, test_runner::Config};
use registration_relayer::logging::rolled_log_path;

proptest! {
  // Set the number of cases to 1000
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// Property test for rolled_log_path when base ends with ".log"
  #[test]
  fn prop_rolled_log_path_with_log_suffix(
    base in ".*[^.]",
    // ensuring non-empty ending character in date
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      let base_with_log = format!("{}.log", base);
      let result = rolled_log_path(&base_with_log, &date, 1);
      let expected = format!("{}-{}.{}.log", base_with_log.strip_suffix(".log").unwrap(), date, 1);
      prop_assert_eq!(result, expected);
    }

  /// Property test for rolled_log_path when base does not end with ".log"
  #[test]
  fn prop_rolled_log_path_without_log_suffix(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}"
  ) {
      // Ensure base does not end with ".log"
      let base_non_log = if base.ends_with(".log")
      {
        format!("{}x", base)
      } else {
        base
      };
      let result = rolled_log_path(&base_non_log, &date, 1);
      let expected = format!("{}-{}.{}.log", base_non_log, date, 1);
      prop_assert_eq!(result, expected);
  }

  /// The sequence index always lands between the date and the extension.
  #[test]
  fn prop_rolled_log_path_carries_index(
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let result = rolled_log_path("service.log", &date, index);
      prop_assert_eq!(result, format!("service-{}.{}.log", date, index));
  }
}
