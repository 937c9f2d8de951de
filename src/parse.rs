use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{CivilDate, MONTH_PREFIXES, Month, RuDate};

/// `31.12.2011`
static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})\.([0-9]{2})\.([0-9]{4})").expect("numeric date pattern is valid"));

/// `«23» января 2011`, `"23" января 2011`, `23 янв. 2011`
static WORDED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[«"]?\s*([0-9]+)\s*[»"]?\s*(\S+)\s*([0-9]{4})"#).expect("worded date pattern is valid")
});

/// No date could be read from the input.
///
/// Malformed text and well-formed but impossible dates are reported the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not parse a date from {input:?}")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected text
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl RuDate {
    /// Reads a date written the Russian way.
    ///
    /// Recognised shapes, tried in order:
    ///   31.12.2011г.
    ///   31.12.2011 г.
    ///   «23»   января  2011
    ///   « 23 » января  2011
    ///   "23"   января  2011
    ///    23    янв.    2011
    ///
    /// A `DD.MM.YYYY` match anywhere in the text decides the result on its
    /// own; the worded shape is only tried when there is none.
    ///
    /// # Errors
    /// Returns `ParseError` if no shape matches or the date does not exist.
    pub fn parse(&self, text: &str) -> Result<CivilDate, ParseError> {
        parse_russian(text)
    }
}

/// Free-function form of [`RuDate::parse`].
///
/// # Errors
/// Returns `ParseError` if no shape matches or the date does not exist.
pub fn parse_russian(text: &str) -> Result<CivilDate, ParseError> {
    let parsed = match NUMERIC_DATE.captures(text) {
        Some(caps) => numeric_date(&caps),
        None => worded_date(text),
    };

    match parsed {
        Some(date) => {
            tracing::trace!(input = text, %date, "parsed russian date");
            Ok(date)
        },
        None => Err(ParseError::new(text)),
    }
}

fn numeric_date(caps: &Captures<'_>) -> Option<CivilDate> {
    let month = caps[2].parse::<u8>().ok()?;
    build_date(&caps[1], month, &caps[3])
}

fn worded_date(text: &str) -> Option<CivilDate> {
    let Some(caps) = WORDED_DATE.captures(text) else {
        tracing::debug!(input = text, "no date pattern found");
        return None;
    };

    let word = &caps[2];
    let Some(month) = month_from_word(word) else {
        tracing::debug!(input = text, word, "unrecognised month word");
        return None;
    };

    build_date(&caps[1], month.get(), &caps[3])
}

fn build_date(day: &str, month: u8, year: &str) -> Option<CivilDate> {
    let day = day.parse::<u8>().ok()?;
    let year = year.parse::<u16>().ok()?;

    CivilDate::from_parts(year, month, day)
        .map_err(|err| tracing::debug!(%err, "rejected impossible date"))
        .ok()
}

/// Month whose recognition prefix starts `word`, first prefix in list order.
fn month_from_word(word: &str) -> Option<Month> {
    let word = word.trim().to_lowercase();
    let index = MONTH_PREFIXES.iter().position(|prefix| word.starts_with(prefix))?;
    Month::new(u8::try_from(index + 1).ok()?).ok()
}
