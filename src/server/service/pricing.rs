//! Booking fee calculation.
//!
//! Every started hour is billed in full: 3600 seconds bill one hour, 3601 seconds bill two.
//! Amounts are integer cents, so no rounding is ever needed.

use chrono::{DateTime, Duration, Utc};

use crate::server::error::booking::BookingError;

const SECONDS_PER_HOUR: i64 = 3600;

/// Billed hours and the resulting cost of one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fee {
    pub billed_hours: i64,
    pub cost_cents: i64,
}

/// Whole seconds between `start` and `end`, with any sub-second remainder counted as a second.
///
/// Returns zero or a negative value when `end` is not after `start`.
pub fn billable_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let elapsed = end - start;
    let seconds = elapsed.num_seconds();

    if elapsed > Duration::seconds(seconds) {
        seconds + 1
    } else {
        seconds
    }
}

/// Number of hours billed for a duration.
///
/// # Returns
/// - `Ok(hours)` - `ceil(duration_seconds / 3600)`
/// - `Err(BookingError::InvalidDuration)` - Duration is zero or negative
pub fn billed_hours(duration_seconds: i64) -> Result<i64, BookingError> {
    if duration_seconds <= 0 {
        return Err(BookingError::InvalidDuration);
    }

    Ok((duration_seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR)
}

/// Billed hours and cost in cents for a duration at an hourly rate.
///
/// # Returns
/// - `Ok(Fee)` - Billed hours and billed hours times the hourly rate
/// - `Err(BookingError::InvalidDuration)` - Duration is zero or negative
/// - `Err(BookingError::CostOutOfRange)` - The cost does not fit in an `i64`
pub fn compute_fee(duration_seconds: i64, hourly_rate_cents: i64) -> Result<Fee, BookingError> {
    let billed_hours = billed_hours(duration_seconds)?;
    let cost_cents = billed_hours
        .checked_mul(hourly_rate_cents)
        .ok_or(BookingError::CostOutOfRange)?;

    Ok(Fee {
        billed_hours,
        cost_cents,
    })
}

/// Fee in cents for a duration at an hourly rate.
pub fn compute_cost(duration_seconds: i64, hourly_rate_cents: i64) -> Result<i64, BookingError> {
    compute_fee(duration_seconds, hourly_rate_cents).map(|fee| fee.cost_cents)
}

/// Formats cents as a decimal amount with two places, e.g. `2000` as `"20.00"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();

    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bills_partial_hours_as_full_hours() {
        assert_eq!(compute_cost(1, 1000), Ok(1000));
        assert_eq!(compute_cost(5400, 1000), Ok(2000));
        assert_eq!(compute_cost(7199, 1000), Ok(2000));
    }

    #[test]
    fn exact_hour_boundary_bills_that_many_hours() {
        assert_eq!(billed_hours(3600), Ok(1));
        assert_eq!(billed_hours(3601), Ok(2));
        assert_eq!(billed_hours(7200), Ok(2));
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert_eq!(compute_cost(0, 1000), Err(BookingError::InvalidDuration));
        assert_eq!(compute_cost(-60, 1000), Err(BookingError::InvalidDuration));
    }

    #[test]
    fn zero_rate_is_free() {
        assert_eq!(compute_cost(10_000, 0), Ok(0));
    }

    #[test]
    fn fee_reports_hours_with_cost() {
        assert_eq!(
            compute_fee(5400, 1000),
            Ok(Fee {
                billed_hours: 2,
                cost_cents: 2000
            })
        );
    }

    #[test]
    fn overflowing_cost_is_an_error() {
        assert_eq!(
            compute_cost(3 * 3600, i64::MAX / 2),
            Err(BookingError::CostOutOfRange)
        );
    }

    #[test]
    fn sub_second_remainder_counts_as_a_second() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

        assert_eq!(billable_seconds(start, start + Duration::milliseconds(400)), 1);
        assert_eq!(billable_seconds(start, start + Duration::milliseconds(1500)), 2);
        assert_eq!(billable_seconds(start, start + Duration::seconds(3600)), 3600);
        assert_eq!(billable_seconds(start, start + Duration::nanoseconds(1)), 1);
    }

    #[test]
    fn end_not_after_start_is_not_billable() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

        assert_eq!(billable_seconds(start, start), 0);
        assert!(billable_seconds(start, start - Duration::milliseconds(400)) <= 0);
    }

    #[test]
    fn formats_cents_with_two_decimals() {
        assert_eq!(format_cents(2000), "20.00");
        assert_eq!(format_cents(3505), "35.05");
        assert_eq!(format_cents(7), "0.07");
        assert_eq!(format_cents(-150), "-1.50");
    }
}
