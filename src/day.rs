use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

const ISO_FORMAT: &str = "%Y-%m-%d";
const LEGACY_FORMAT: &str = "%a %b %d %Y";

/// A civil calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized calendar day: {0:?}")]
pub struct ParseDayError(pub String);

impl Day {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Reads the local clock. Only the outer edge of the program should call this.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn pred(self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    pub fn succ(self) -> Self {
        Self(self.0 + Duration::days(1))
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Whole calendar days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(self, earlier: Day) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// The most recent Sunday on or before this day.
    pub fn week_start(self) -> Self {
        self.add_days(-i64::from(self.0.weekday().num_days_from_sunday()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, ISO_FORMAT) {
            return Ok(Self(date));
        }
        // Browser `Date.toDateString()` output, e.g. "Mon Jan 01 2024".
        if let Ok(date) = NaiveDate::parse_from_str(text, LEGACY_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(stamp.date_naive()));
        }
        Err(ParseDayError(s.to_string()))
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
