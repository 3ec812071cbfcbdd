//! "Last updated" timestamps in India Standard Time.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Asia/Kolkata offset. India observes no daylight saving time.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The Asia/Kolkata fixed offset.
#[must_use]
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Header timestamp, e.g. `16 Oct 2026, 2:05 pm`.
#[must_use]
pub fn format_last_updated(now: DateTime<Utc>) -> String {
    now.with_timezone(&ist())
        .format("%-d %b %Y, %-I:%M %P")
        .to_string()
}

/// Detail panel timestamp with a two-digit hour, e.g. `16 Oct 2026, 02:05 pm`.
#[must_use]
pub fn format_detail_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&ist())
        .format("%-d %b %Y, %I:%M %P")
        .to_string()
}

/// [`format_last_updated`] for the current time.
#[must_use]
pub fn last_updated_now() -> String {
    format_last_updated(Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn converts_to_ist() {
        assert_eq!(format_last_updated(at(2026, 10, 16, 8, 35)), "16 Oct 2026, 2:05 pm");
        assert_eq!(format_detail_timestamp(at(2026, 10, 16, 8, 35)), "16 Oct 2026, 02:05 pm");
    }

    #[test]
    fn rolls_over_the_date() {
        assert_eq!(format_last_updated(at(2026, 12, 31, 19, 0)), "1 Jan 2027, 12:30 am");
    }
}
