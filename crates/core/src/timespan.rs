//! Calendar-day time span construction for activity log queries.
//!
//! The log query endpoint filters entries to a single calendar day. The day
//! is interpreted in a configurable fixed UTC offset and converted to a
//! half-open UTC range `[day_start, next_day_start)` so entries at exactly
//! midnight of the following day are excluded.

use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Build the half-open UTC range covering one calendar day.
///
/// `month0` is zero-indexed (0 = January), matching the wire contract the
/// front-end has always used. `utc_offset_minutes` shifts the day boundary;
/// `0` means the day runs midnight-to-midnight UTC.
///
/// Returns `CoreError::Validation` for a month outside `0..=11`, a
/// day/month/year combination that is not a real calendar date, or an
/// offset outside what a UTC offset can express.
pub fn day_span(
    year: i32,
    month0: u32,
    day: u32,
    utc_offset_minutes: i32,
) -> Result<(Timestamp, Timestamp), CoreError> {
    if month0 > 11 {
        return Err(CoreError::Validation(format!(
            "month must be in 0..=11 (zero-indexed), got {month0}"
        )));
    }

    let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
        CoreError::Validation(format!("invalid UTC offset: {utc_offset_minutes} minutes"))
    })?;

    let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(|| {
        CoreError::Validation(format!(
            "no such date: year={year} month={month0} day={day}"
        ))
    })?;

    let next = date.succ_opt().ok_or_else(|| {
        CoreError::Validation(format!("date out of range: year={year} day={day}"))
    })?;

    Ok((to_utc(date, offset)?, to_utc(next, offset)?))
}

/// Midnight of `date` at the given offset, as a UTC instant.
fn to_utc(date: NaiveDate, offset: FixedOffset) -> Result<Timestamp, CoreError> {
    match offset.from_local_datetime(&date.and_time(NaiveTime::MIN)) {
        // Fixed offsets have no DST gaps, so this is the only arm hit in
        // practice.
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        _ => Err(CoreError::Internal(format!(
            "ambiguous local midnight for {date} at {offset}"
        ))),
    }
}
