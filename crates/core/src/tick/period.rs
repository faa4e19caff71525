//! Relative period keywords resolved to inclusive date ranges
//!
//! `day`, `week`, and `month` anchor on a caller-supplied date (the shell
//! passes "today"); the clock never lives in this crate.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

/// Date format used throughout the Tick API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A relative calendar window keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
        }
    }
}

/// Rejected period keyword.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Period must be 'day', 'week', or 'month'")]
pub struct InvalidPeriod(pub String);

impl FromStr for Period {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(InvalidPeriod(other.to_string())),
        }
    }
}

/// Malformed `YYYY-MM-DD` date string.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Invalid date format. Use YYYY-MM-DD")]
pub struct InvalidDate(pub String);

/// Parse a `YYYY-MM-DD` date string, rejecting anything else.
pub fn parse_date(s: &str) -> Result<NaiveDate, InvalidDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| InvalidDate(s.to_string()))
}

/// An inclusive date range; `start <= end` always holds for ranges produced
/// by [`period_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_string(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_string(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Human label in the `"{start} to {end}"` shape the tool responses use.
    pub fn label(&self) -> String {
        format!("{} to {}", self.start_string(), self.end_string())
    }
}

/// Resolve a period keyword to the concrete range containing `anchor`.
///
/// - `day`: start = end = anchor
/// - `week`: the ISO Monday-start week containing anchor
/// - `month`: first through last calendar day of anchor's month
pub fn period_range(period: Period, anchor: NaiveDate) -> DateRange {
    match period {
        Period::Day => DateRange {
            start: anchor,
            end: anchor,
        },
        Period::Week => {
            let start = anchor - Duration::days(i64::from(anchor.weekday().num_days_from_monday()));
            DateRange {
                start,
                end: start + Duration::days(6),
            }
        }
        Period::Month => {
            let start = anchor
                .with_day(1)
                .unwrap_or(anchor);
            // Last day of the month: first of the next month minus one day,
            // rolling the year when anchor is in December.
            let next_month_first = if anchor.month() == 12 {
                NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
            }
            .unwrap_or(start);
            DateRange {
                start,
                end: next_month_first - Duration::days(1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("month".parse::<Period>().unwrap(), Period::Month);
        assert!("fortnight".parse::<Period>().is_err());
        assert!("Week".parse::<Period>().is_err());
    }

    #[test]
    fn test_day_range_is_single_day() {
        let range = period_range(Period::Day, date(2024, 1, 1));

        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 1, 1));
        assert_eq!(range.label(), "2024-01-01 to 2024-01-01");
    }

    #[test]
    fn test_week_range_maps_to_containing_monday_week() {
        // 2024-03-01 is a Friday; its ISO week runs Mon 02-26 .. Sun 03-03
        let range = period_range(Period::Week, date(2024, 3, 1));

        assert_eq!(range.start, date(2024, 2, 26));
        assert_eq!(range.end, date(2024, 3, 3));
    }

    #[test]
    fn test_week_range_anchor_on_monday() {
        let range = period_range(Period::Week, date(2024, 3, 4));

        assert_eq!(range.start, date(2024, 3, 4));
        assert_eq!(range.end, date(2024, 3, 10));
    }

    #[test]
    fn test_month_range_december_rollover() {
        let range = period_range(Period::Month, date(2024, 12, 15));

        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn test_month_range_february_leap_year() {
        let range = period_range(Period::Month, date(2024, 2, 10));

        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-01").unwrap(), date(2024, 3, 1));
        assert!(parse_date("03/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
