//! Local calendar-day boundary math.
//!
//! All tracking happens in local wall-clock time, so day boundaries are
//! local midnights. DST ambiguity is resolved by picking the earlier
//! instant; spring-forward gaps fall back to 1am, which always exists.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Milliseconds per hour, the denominator of every pixel conversion.
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Resolves a naive local date+time to an instant.
fn resolve_local(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    match Local.from_local_datetime(&date.and_time(time)) {
        // Single or ambiguous (DST fall-back): use the earlier time
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            // DST spring-forward gap; 1am local is guaranteed to exist
            let one_am = date.and_time(NaiveTime::from_hms_opt(1, 0, 0).unwrap());
            Local.from_local_datetime(&one_am).unwrap()
        }
    }
}

/// Returns local midnight of the instant's calendar day.
pub fn start_of_day(dt: DateTime<Local>) -> DateTime<Local> {
    resolve_local(dt.date_naive(), NaiveTime::from_hms_opt(0, 0, 0).unwrap())
}

/// Returns 23:59:59 of the instant's calendar day.
///
/// A segment ending exactly on a day boundary belongs to the day that is
/// ending, so end-of-day is 23:59:59 rather than next-day 00:00:00.
pub fn end_of_day(dt: DateTime<Local>) -> DateTime<Local> {
    resolve_local(dt.date_naive(), NaiveTime::from_hms_opt(23, 59, 59).unwrap())
}

/// Returns local midnight of the day after the instant's calendar day.
pub fn next_day_start(dt: DateTime<Local>) -> DateTime<Local> {
    resolve_local(
        dt.date_naive() + Duration::days(1),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
    )
}

/// Returns true when both instants fall on the same calendar day.
pub fn same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Converts the span between two instants to horizontal pixels.
///
/// Absolute millisecond difference divided by 3,600,000, times the
/// pixels-per-hour scale.
#[allow(clippy::cast_precision_loss)]
pub fn pixel_span(from: DateTime<Local>, to: DateTime<Local>, pixels_per_hour: f64) -> f64 {
    let millis = (to - from).num_milliseconds().abs() as f64;
    millis / MILLIS_PER_HOUR * pixels_per_hour
}
