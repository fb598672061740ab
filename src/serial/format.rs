//! Field text formatting.

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Format as RFC 3339 with whole seconds, keeping the original offset.
///
/// Returns: `YYYY-MM-DDTHH:MM:SS±HH:MM`, or `...Z` for a zero offset.
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format with exactly one decimal digit, rounding half away from zero.
pub fn format_priority(priority: f64) -> String {
    // `+ 0.0` folds a rounded `-0.0` into `0.0`
    let rounded = (priority * 10.0).round() / 10.0 + 0.0;
    format!("{rounded:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_format_priority() {
        assert_eq!(format_priority(0.5), "0.5");
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.33), "0.3");
        assert_eq!(format_priority(0.0), "0.0");
        assert_eq!(format_priority(0.25), "0.3");
        assert_eq!(format_priority(0.96), "1.0");
        assert_eq!(format_priority(-0.04), "0.0");
    }

    #[test]
    fn test_format_timestamp_keeps_offset() {
        let dt = FixedOffset::west_opt(4 * 3600)
            .unwrap()
            .with_ymd_and_hms(2019, 10, 10, 8, 0, 0)
            .unwrap();
        assert_eq!(format_timestamp(&dt), "2019-10-10T08:00:00-04:00");

        let dt = FixedOffset::east_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 23, 59, 59)
            .unwrap();
        assert_eq!(format_timestamp(&dt), "2024-02-29T23:59:59+05:30");
    }

    #[test]
    fn test_format_timestamp_utc_and_fraction() {
        let naive = NaiveDate::from_ymd_opt(2020, 10, 10)
            .unwrap()
            .and_hms_milli_opt(8, 0, 0, 250)
            .unwrap();
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .from_utc_datetime(&naive);
        assert_eq!(format_timestamp(&dt), "2020-10-10T08:00:00Z");
    }
}
