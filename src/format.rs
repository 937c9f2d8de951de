use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use regex::{Captures, Regex};

use crate::{CivilDate, DateError, Month, MonthNames, NATIVE_MONTH_DIRECTIVE, RuDate};

/// `{месяц}`, `{Месяц}`, `{месяца}`, `{Месяца}`
static MONTH_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([Мм])есяц(а?)\}").expect("month placeholder pattern is valid"));

/// Error type for formatting operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// chrono could not render the template.
    #[error("Unsupported format directive in {0:?}")]
    InvalidDirective(String),

    /// Unix timestamp has no local time representation.
    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// A strategy that renders an instant through a strftime-style template.
///
/// Code that formats dates can take any `DateFormatter` instead of calling
/// chrono directly, which lets the placeholder support of [`RuDate`] plug in.
pub trait DateFormatter {
    /// Formats `at` with `template`.
    ///
    /// # Errors
    /// Returns `FormatError` if the template cannot be rendered.
    fn format_at(&self, template: &str, at: NaiveDateTime) -> Result<String, FormatError>;
}

impl<F: DateFormatter + ?Sized> DateFormatter for &F {
    fn format_at(&self, template: &str, at: NaiveDateTime) -> Result<String, FormatError> {
        (**self).format_at(template, at)
    }
}

impl DateFormatter for RuDate {
    fn format_at(&self, template: &str, at: NaiveDateTime) -> Result<String, FormatError> {
        self.strftime(template, Some(at))
    }
}

/// Adds placeholder-aware formatting to date values.
///
/// ```
/// use chrono::NaiveDate;
/// use ru_date::{FormatLocalized, RuDate};
///
/// let date = NaiveDate::from_ymd_opt(2016, 3, 8).unwrap();
/// let text = date.format_localized(&RuDate::default(), "%e {месяца} %Y").unwrap();
/// assert_eq!(text, "8 марта 2016");
/// ```
pub trait FormatLocalized {
    /// Renders `self` with `template` through `formatter`.
    ///
    /// # Errors
    /// Returns whatever error the formatter reports.
    fn format_localized<F>(&self, formatter: &F, template: &str) -> Result<String, FormatError>
    where
        F: DateFormatter + ?Sized;
}

impl FormatLocalized for NaiveDateTime {
    fn format_localized<F>(&self, formatter: &F, template: &str) -> Result<String, FormatError>
    where
        F: DateFormatter + ?Sized,
    {
        formatter.format_at(template, *self)
    }
}

impl FormatLocalized for NaiveDate {
    fn format_localized<F>(&self, formatter: &F, template: &str) -> Result<String, FormatError>
    where
        F: DateFormatter + ?Sized,
    {
        formatter.format_at(template, NaiveDateTime::from(*self))
    }
}

impl<Tz: TimeZone> FormatLocalized for DateTime<Tz> {
    fn format_localized<F>(&self, formatter: &F, template: &str) -> Result<String, FormatError>
    where
        F: DateFormatter + ?Sized,
    {
        formatter.format_at(template, self.naive_local())
    }
}

impl FormatLocalized for CivilDate {
    fn format_localized<F>(&self, formatter: &F, template: &str) -> Result<String, FormatError>
    where
        F: DateFormatter + ?Sized,
    {
        NaiveDate::try_from(*self)?.format_localized(formatter, template)
    }
}

impl RuDate {
    /// Formats `at` (or the current local time) with a strftime template that
    /// may also contain month placeholders:
    ///
    /// | placeholder | expands to |
    /// |-------------|------------|
    /// | `{месяц}`   | январь     |
    /// | `{Месяц}`   | Январь     |
    /// | `{месяца}`  | января     |
    /// | `{Месяца}`  | Января     |
    ///
    /// With [`MonthNames::Native`] every placeholder becomes `%B`.
    /// The result is trimmed, so `%e` on single-digit days leaves no padding
    /// at the edges.
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDirective` if chrono rejects the template.
    pub fn strftime(&self, template: &str, at: Option<NaiveDateTime>) -> Result<String, FormatError> {
        let at = at.unwrap_or_else(|| Local::now().naive_local());
        let month = Month::try_from(u8::try_from(at.month()).map_err(|_| DateError::InvalidFormat(at.to_string()))?)?;

        let (genitive, nominative) = match self.month_names() {
            MonthNames::Russian => (month.genitive(), month.nominative()),
            MonthNames::Native => (NATIVE_MONTH_DIRECTIVE, NATIVE_MONTH_DIRECTIVE),
        };
        let expanded = expand_month_placeholders(template, genitive, nominative);

        let mut out = String::with_capacity(expanded.len() + 16);
        write!(out, "{}", at.format(&expanded)).map_err(|_| {
            tracing::debug!(template, %expanded, "chrono rejected format template");
            FormatError::InvalidDirective(template.to_owned())
        })?;

        Ok(out.trim().to_owned())
    }

    /// Same as [`RuDate::strftime`] for a unix timestamp read in local time.
    ///
    /// # Errors
    /// Returns `FormatError::TimestampOutOfRange` if the timestamp has no local
    /// representation, or any error of [`RuDate::strftime`].
    pub fn strftime_timestamp(&self, template: &str, timestamp: i64) -> Result<String, FormatError> {
        let local = Local
            .timestamp_opt(timestamp, 0)
            .single()
            .ok_or(FormatError::TimestampOutOfRange(timestamp))?;
        self.strftime(template, Some(local.naive_local()))
    }
}

fn expand_month_placeholders(template: &str, genitive: &str, nominative: &str) -> String {
    MONTH_PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = if caps[2].is_empty() { nominative } else { genitive };
            if &caps[1] == "М" {
                capitalize_first(name)
            } else {
                name.to_owned()
            }
        })
        .into_owned()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
