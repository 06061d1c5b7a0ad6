use crate::error::{Error, FormatError};
use chrono::prelude::*;

/// Length of a compact `YYYYMMDDHHMMSS` timestamp.
pub const COMPACT_TIMESTAMP_LEN: usize = 14;

const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// Render `time` as a compact `YYYYMMDDHHMMSS` UTC timestamp.
/// Sub-second precision is dropped.
pub fn format_compact_timestamp(time: DateTime<Utc>) -> String {
    time.format(COMPACT_FORMAT).to_string()
}

/// Like [`format_compact_timestamp`], but refuses instants whose year falls
/// outside `0..=9999` since their rendering would not parse back.
pub fn try_format_compact_timestamp(time: DateTime<Utc>) -> Result<String, Error> {
    if !(0..=9999).contains(&time.year()) {
        return Err(Error::TimestampOutOfRange(time));
    }
    Ok(format_compact_timestamp(time))
}

/// Parse a compact `YYYYMMDDHHMMSS` UTC timestamp.
pub fn parse_compact_timestamp(ts: &str) -> Result<DateTime<Utc>, FormatError> {
    let invalid = || FormatError::InvalidTimestamp(ts.to_string());
    if ts.len() != COMPACT_TIMESTAMP_LEN || !ts.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // all-ASCII, so byte slicing is safe and each field parses
    let field = |range: std::ops::Range<usize>| ts[range].parse::<u32>().map_err(|_| invalid());
    let year = field(0..4)? as i32;
    let month = field(4..6)?;
    let day = field(6..8)?;
    let hour = field(8..10)?;
    let minute = field(10..12)?;
    let second = field(12..14)?;

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap();
        assert_eq!(format_compact_timestamp(time), "20240305123045");

        let early = Utc.with_ymd_and_hms(999, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_compact_timestamp(early), "09990102030405");
    }

    #[test]
    fn drops_sub_second_precision() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap()
            + chrono::Duration::milliseconds(999);
        let parsed = parse_compact_timestamp(&format_compact_timestamp(time)).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap());
    }

    #[test]
    fn rejects_invalid_timestamps() {
        for bad in [
            "",
            "2024030512304",
            "202403051230450",
            "2024030512304x",
            "+0240305123045",
            "20241305123045",
            "20240230123045",
            "20240305243045",
            "20240305126045",
            "20240305123060",
        ] {
            assert_eq!(
                parse_compact_timestamp(bad),
                Err(FormatError::InvalidTimestamp(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn refuses_years_without_four_digits() {
        for year in [-1, 10000] {
            let time = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
            assert!(matches!(
                try_format_compact_timestamp(time),
                Err(Error::TimestampOutOfRange(t)) if t == time
            ));
        }
        let edge = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let formatted = try_format_compact_timestamp(edge).unwrap();
        assert_eq!(parse_compact_timestamp(&formatted).unwrap(), edge);
    }

    #[test]
    fn accepts_leap_day() {
        let parsed = parse_compact_timestamp("20240229000000").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }
}
