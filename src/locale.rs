use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Which month names the `{месяц}` family of placeholders expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNames {
    /// Declined Russian names ("января", "январь")
    #[default]
    #[display(fmt = "russian")]
    Russian,
    /// Placeholders fall back to the `%B` directive
    #[display(fmt = "native")]
    Native,
}

impl MonthNames {
    /// Locale variables in POSIX precedence order for time formatting
    pub const LOCALE_VARS: [&'static str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

    /// Maps a POSIX locale name such as `ru_RU.UTF-8` to a month name setting.
    pub fn from_locale_name(name: &str) -> Self {
        let language = name
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default();

        if language.eq_ignore_ascii_case("ru") {
            Self::Russian
        } else {
            Self::Native
        }
    }

    /// Resolves the setting from `LC_ALL`, `LC_TIME` and `LANG`.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let found = Self::LOCALE_VARS
            .iter()
            .find_map(|&key| lookup(key).filter(|value| !value.is_empty()).map(|value| (key, value)));

        match found {
            Some((key, locale)) => {
                let names = Self::from_locale_name(&locale);
                tracing::debug!(var = key, %locale, %names, "resolved month names from locale");
                names
            },
            None => {
                tracing::debug!("no locale variables set, using native month names");
                Self::Native
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(vars: &[(&str, &str)]) -> MonthNames {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        MonthNames::resolve(|key| env.get(key).cloned())
    }

    #[test]
    fn test_from_locale_name_cases() {
        struct TestCase {
            locale:   &'static str,
            expected: MonthNames,
        }

        let cases = [
            TestCase {
                locale:   "ru_RU.UTF-8",
                expected: MonthNames::Russian,
            },
            TestCase {
                locale:   "ru_RU",
                expected: MonthNames::Russian,
            },
            TestCase {
                locale:   "ru",
                expected: MonthNames::Russian,
            },
            TestCase {
                locale:   "RU_ru.KOI8-R",
                expected: MonthNames::Russian,
            },
            TestCase {
                locale:   "ru-RU",
                expected: MonthNames::Russian,
            },
            TestCase {
                locale:   "en_US.UTF-8",
                expected: MonthNames::Native,
            },
            TestCase {
                locale:   "C",
                expected: MonthNames::Native,
            },
            TestCase {
                locale:   "rue_UA",
                expected: MonthNames::Native,
            },
        ];

        for case in &cases {
            assert_eq!(
                MonthNames::from_locale_name(case.locale),
                case.expected,
                "locale {}",
                case.locale
            );
        }
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(
            resolve_with(&[("LC_ALL", "en_US.UTF-8"), ("LANG", "ru_RU.UTF-8")]),
            MonthNames::Native
        );
        assert_eq!(
            resolve_with(&[("LC_TIME", "ru_RU.UTF-8"), ("LANG", "en_US.UTF-8")]),
            MonthNames::Russian
        );
        assert_eq!(resolve_with(&[("LC_ALL", ""), ("LANG", "ru_RU.UTF-8")]), MonthNames::Russian);
    }

    #[test]
    fn test_resolve_without_locale() {
        assert_eq!(resolve_with(&[]), MonthNames::Native);
    }

    #[test]
    fn test_serde_and_display() {
        assert_eq!(MonthNames::Russian.to_string(), "russian");
        assert_eq!(
            serde_json::to_string(&MonthNames::Native).expect("failed to serialize"),
            r#""native""#
        );
        let parsed: MonthNames = serde_json::from_str(r#""russian""#).expect("failed to deserialize");
        assert_eq!(parsed, MonthNames::Russian);
    }
}
