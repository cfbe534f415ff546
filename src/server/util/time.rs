//! Time and date calculation utilities.
//!
//! This module provides helpers for turning calendar dates from query parameters
//! into timestamp ranges for database filtering. Fine and payment timestamps are
//! stored with full precision, so day-level filters compare against half-open
//! `[start, end)` bounds rather than exact values.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::server::error::Error;

/// Calculates the half-open timestamp bounds covering a calendar day.
///
/// Returns the pair `(start, end)` where `start` is midnight at the beginning of
/// `date` and `end` is midnight at the beginning of the following day. Filtering
/// with `timestamp >= start AND timestamp < end` matches every moment of the day
/// regardless of stored precision.
///
/// # Arguments
/// - `date` - The calendar day to cover
///
/// # Returns
/// - `Ok((NaiveDateTime, NaiveDateTime))` - Start and exclusive end of the day
/// - `Err(Error::ParseError)` - The day or its successor is out of range for the date type
pub fn day_bounds(date: NaiveDate) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    let start = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::ParseError(format!("Failed to construct start of day for {date}")))?;

    let next_day = date
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| Error::ParseError(format!("Failed to calculate the day after {date}")))?;
    let end = next_day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::ParseError(format!("Failed to construct end of day for {date}")))?;

    Ok((start, end))
}
