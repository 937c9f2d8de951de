//! Russian date formatting, parsing and period summaries.
//!
//! ```
//! use ru_date::{MonthNames, RuDate};
//!
//! let ru = RuDate::new(MonthNames::Russian);
//! assert_eq!(ru.parse("«23» января 2011").unwrap().to_string(), "2011-01-23");
//! assert_eq!(ru.period("2016-02-01", "2016-05-05").unwrap(), "1 февраля - 5 мая 2016");
//! ```

mod consts;
mod format;
mod locale;
mod parse;
mod period;
mod prelude;
mod types;

pub use consts::*;
pub use format::{DateFormatter, FormatError, FormatLocalized};
pub use locale::MonthNames;
pub use parse::{ParseError, parse_russian};
pub use period::{Period, PeriodError, PeriodKind};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// A real Gregorian calendar date.
/// Displays and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CivilDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CivilDate {
    /// Creates a date from already validated components
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Validates raw components against the calendar.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that is out of range.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn is_first_of_month(&self) -> bool {
        self.day.get() == MIN_DAY
    }

    pub const fn is_last_of_month(&self) -> bool {
        self.day.get() == days_in_month(self.year.get(), self.month.get())
    }

    /// January 1st
    pub const fn is_first_of_year(&self) -> bool {
        self.month.get() == JANUARY && self.is_first_of_month()
    }

    /// December 31st
    pub const fn is_last_of_year(&self) -> bool {
        self.month.get() == DECEMBER && self.is_last_of_month()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    /// Parses the canonical `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        }

        let year = Self::parse_component::<u16>(parts[0])?;
        let month = Self::parse_component::<u8>(parts[1])?;
        let day = Self::parse_component::<u8>(parts[2])?;

        Self::from_parts(year, month, day)
    }
}

impl TryFrom<CivilDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: CivilDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(
            i32::from(date.year.get()),
            u32::from(date.month.get()),
            u32::from(date.day.get()),
        )
        .ok_or_else(|| DateError::InvalidFormat(date.to_string()))
    }
}

impl TryFrom<NaiveDate> for CivilDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        let month = u8::try_from(date.month()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        Self::from_parts(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Formatter, parser and period summarizer for Russian dates.
///
/// Holds no state beyond the month-name configuration, so it is cheap to
/// construct wherever it is needed. [`RuDate::instance`] offers a shared
/// value resolved from the process locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuDate {
    month_names: MonthNames,
}

impl RuDate {
    pub const fn new(month_names: MonthNames) -> Self {
        Self { month_names }
    }

    /// Builds a value configured from the locale environment variables.
    pub fn from_env() -> Self {
        Self::new(MonthNames::from_env())
    }

    /// Process-wide value, resolved from the environment on first use.
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<RuDate> = OnceLock::new();
        INSTANCE.get_or_init(Self::from_env)
    }

    pub const fn month_names(&self) -> MonthNames {
        self.month_names
    }
}

/// [`RuDate::strftime`] on the process-wide instance.
///
/// # Errors
/// See [`RuDate::strftime`].
pub fn strftime(template: &str, at: Option<chrono::NaiveDateTime>) -> Result<String, FormatError> {
    RuDate::instance().strftime(template, at)
}

/// [`RuDate::parse`] on the process-wide instance.
///
/// # Errors
/// Returns `ParseError` when no supported date shape is found.
pub fn parse(text: &str) -> Result<CivilDate, ParseError> {
    RuDate::instance().parse(text)
}

/// [`RuDate::period`] on the process-wide instance.
///
/// # Errors
/// See [`RuDate::period`].
pub fn period(start: &str, end: &str) -> Result<String, PeriodError> {
    RuDate::instance().period(start, end)
}
