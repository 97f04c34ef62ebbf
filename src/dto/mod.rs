use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

pub mod game;
pub mod health;

/// `createdAt` layout: UTC, millisecond precision, `Z` suffix.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Render `time` as an ISO-8601 UTC timestamp such as `2026-10-19T08:15:30.123Z`.
pub fn format_timestamp(time: OffsetDateTime) -> String {
    time.to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn timestamps_are_utc_with_millis() {
        let time = datetime!(2026-10-19 10:15:30.123_456 +02:00);
        assert_eq!(format_timestamp(time), "2026-10-19T08:15:30.123Z");
    }
}
