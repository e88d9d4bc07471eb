use crate::error::AirQualityError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month pair, the time-window key for dashboard selections.
///
/// Ordering is chronological (year first, then month), so sorted
/// collections of `YearMonth` list periods oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Create a year-month, rejecting months outside 1-12.
    pub fn new(year: i32, month: u32) -> Option<YearMonth> {
        if (1..=12).contains(&month) {
            Some(YearMonth { year, month })
        } else {
            None
        }
    }

    /// The calendar month a date falls in.
    pub fn of(date: &NaiveDate) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// True if the date falls within this calendar month; the day is
    /// irrelevant.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AirQualityError;

    /// Parse a "YYYY-MM" string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AirQualityError::MalformedInput(format!("unparsable month {s:?}"));
        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        YearMonth::new(year, month).ok_or_else(malformed)
    }
}
