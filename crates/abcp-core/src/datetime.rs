//! Date formatting for the two ABCP API generations
//!
//! The legacy (`cp/`) endpoints take local-time strings in
//! `YYYY-MM-DD HH:MM:SS` form, a few take bare dates. The newer (`ts/`)
//! endpoints take RFC 3339 timestamps. Endpoint methods normalize their
//! date parameters with these helpers before the payload encoder ever
//! sees them; the encoder itself only handles strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Legacy API timestamp: `YYYY-MM-DD HH:MM:SS`
pub fn format_cp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Legacy API bare date: `YYYY-MM-DD` (birth dates and the like)
pub fn format_cp_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Newer API timestamp: RFC 3339 with offset
pub fn format_ts(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cp_format() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 40, 1)
            .unwrap();
        assert_eq!(format_cp(dt), "2024-03-05 07:40:01");
    }

    #[test]
    fn cp_date_format() {
        let d = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
        assert_eq!(format_cp_date(d), "1990-12-31");
    }

    #[test]
    fn ts_format_keeps_offset() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 7, 40, 1).unwrap();
        assert_eq!(format_ts(dt), "2024-03-05T07:40:01+00:00");
    }
}
