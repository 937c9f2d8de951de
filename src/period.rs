use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CivilDate, DateError, FormatError, FormatLocalized, PERIOD_SEPARATOR, RuDate, SPAN_DASH, YEAR_WORD, prelude::*,
};

const DAY: &str = "%e";
const DAY_MONTH: &str = "%e {месяца}";
const DAY_MONTH_YEAR: &str = "%e {месяца} %Y";
const MONTH_YEAR: &str = "{месяц} %Y";

/// An inclusive span between two civil dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Period {
    start: CivilDate,
    end:   CivilDate,
}

/// How the two ends of a period relate, which decides how it is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// "1 января 2016"
    SameDay,
    /// "январь 2016"
    WholeMonth,
    /// "1 - 10 января 2016"
    SameMonth,
    /// "2016 год"
    WholeYear,
    /// "1 февраля - 5 мая 2016"
    SameYear,
    /// "2 января 2016 - 31 декабря 2017"
    AcrossYears,
}

/// Error type for period operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Start date is after end date.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    Reversed { start: CivilDate, end: CivilDate },

    /// Error parsing one of the dates.
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl Period {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `PeriodError::Reversed` if start > end.
    pub fn new(start: CivilDate, end: CivilDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CivilDate {
        self.start
    }

    pub const fn end(&self) -> CivilDate {
        self.end
    }

    /// Classifies the period, most specific case first.
    pub fn kind(&self) -> PeriodKind {
        let (start, end) = (self.start, self.end);

        if start == end {
            PeriodKind::SameDay
        } else if start.year() == end.year() && start.month() == end.month() {
            if start.is_first_of_month() && end.is_last_of_month() {
                PeriodKind::WholeMonth
            } else {
                PeriodKind::SameMonth
            }
        } else if start.year() == end.year() {
            if start.is_first_of_year() && end.is_last_of_year() {
                PeriodKind::WholeYear
            } else {
                PeriodKind::SameYear
            }
        } else {
            PeriodKind::AcrossYears
        }
    }

    /// Words the period in the shortest form its kind allows.
    ///
    /// # Errors
    /// Returns `PeriodError::Format` if the formatter fails.
    pub fn describe(&self, formatter: &RuDate) -> Result<String, PeriodError> {
        let kind = self.kind();
        tracing::debug!(period = %self, ?kind, "describing period");

        let render = |date: CivilDate, template: &str| date.format_localized(formatter, template);
        let span = |left: String, right: String| format!("{left}{SPAN_DASH}{right}");

        let text = match kind {
            PeriodKind::SameDay => render(self.start, DAY_MONTH_YEAR)?,
            PeriodKind::WholeMonth => render(self.start, MONTH_YEAR)?,
            PeriodKind::SameMonth => span(render(self.start, DAY)?, render(self.end, DAY_MONTH_YEAR)?),
            PeriodKind::WholeYear => format!("{} {YEAR_WORD}", self.start.year()),
            PeriodKind::SameYear => span(render(self.start, DAY_MONTH)?, render(self.end, DAY_MONTH_YEAR)?),
            PeriodKind::AcrossYears => span(
                render(self.start, DAY_MONTH_YEAR)?,
                render(self.end, DAY_MONTH_YEAR)?,
            ),
        };

        Ok(text)
    }
}

impl RuDate {
    /// Describes the span between two `YYYY-MM-DD` dates in Russian:
    ///
    /// | start      | end        | result                          |
    /// |------------|------------|---------------------------------|
    /// | 2016-01-01 | 2016-01-01 | 1 января 2016                   |
    /// | 2016-01-01 | 2016-01-31 | январь 2016                     |
    /// | 2016-01-01 | 2016-01-10 | 1 - 10 января 2016              |
    /// | 2016-01-01 | 2016-12-31 | 2016 год                        |
    /// | 2016-02-01 | 2016-05-05 | 1 февраля - 5 мая 2016          |
    /// | 2016-01-02 | 2017-12-31 | 2 января 2016 - 31 декабря 2017 |
    ///
    /// # Errors
    /// Returns `PeriodError::Date` for malformed or impossible dates and
    /// `PeriodError::Reversed` if `start` is after `end`.
    pub fn period(&self, start: &str, end: &str) -> Result<String, PeriodError> {
        let start = start.parse::<CivilDate>()?;
        let end = end.parse::<CivilDate>()?;
        Period::new(start, end)?.describe(self)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start, end)) = trimmed.split_once(PERIOD_SEPARATOR) else {
            return Err(PeriodError::InvalidFormat(format!(
                "No period separator found (expected '{PERIOD_SEPARATOR}'): {s}"
            )));
        };
        if end.contains(PERIOD_SEPARATOR) {
            return Err(PeriodError::InvalidFormat(format!(
                "Too many '{PERIOD_SEPARATOR}' separators: {s}"
            )));
        }

        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
