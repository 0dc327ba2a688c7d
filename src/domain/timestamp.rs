//! Calendar date packing for on-chain registration.
//!
//! The registration contract stores an issue date as a single integer with
//! the day in the low byte, the month in the second byte and the year offset
//! from 2000 in the third byte: `day | month << 8 | (year - 2000) << 16`.
use chrono::{DateTime, Datelike, Utc};

use crate::models::RelayerError;

/// First year representable in the packed encoding.
pub const PACKED_YEAR_MIN: i32 = 2000;
/// Last year that fits in the single year byte.
pub const PACKED_YEAR_MAX: i32 = PACKED_YEAR_MIN + 0xFF;

/// Packs the UTC calendar date of a unix timestamp (seconds).
///
/// Timestamps whose year falls outside 2000..=2255 are rejected instead of
/// silently truncating the year byte.
pub fn pack_calendar_date(unix_seconds: i64) -> Result<u32, RelayerError> {
    let date = DateTime::<Utc>::from_timestamp(unix_seconds, 0).ok_or_else(|| {
        RelayerError::Timestamp(format!("{} is not a valid unix timestamp", unix_seconds))
    })?;

    let year = date.year();
    if !(PACKED_YEAR_MIN..=PACKED_YEAR_MAX).contains(&year) {
        return Err(RelayerError::Timestamp(format!(
            "year {} is outside the packable range {}..={}",
            year, PACKED_YEAR_MIN, PACKED_YEAR_MAX
        )));
    }

    Ok(date.day() | (date.month() << 8) | (((year - PACKED_YEAR_MIN) as u32) << 16))
}
