// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Month and weekday name tables.
//!
//! Weekday tables start with Sunday, as the POSIX `LC_TIME` tables do.

#[cfg(feature = "locales")]
mod with_locales {
    use crate::error::{FormatErrorKind, FormatResult};

    macro_rules! locale_match {
        ($locale:expr => $($item:ident)::+) => {{
            match $locale {
                "en_US" => Ok(pure_rust_locales::en_US::$($item)::+),
                "en_GB" => Ok(pure_rust_locales::en_GB::$($item)::+),
                "de_DE" => Ok(pure_rust_locales::de_DE::$($item)::+),
                "es_ES" => Ok(pure_rust_locales::es_ES::$($item)::+),
                "fr_FR" => Ok(pure_rust_locales::fr_FR::$($item)::+),
                "fr_BE" => Ok(pure_rust_locales::fr_BE::$($item)::+),
                "it_IT" => Ok(pure_rust_locales::it_IT::$($item)::+),
                "nl_NL" => Ok(pure_rust_locales::nl_NL::$($item)::+),
                "pt_BR" => Ok(pure_rust_locales::pt_BR::$($item)::+),
                other => Err(FormatErrorKind::UnknownLocale(other.to_owned()).into()),
            }
        }}
    }

    pub(crate) fn short_months(locale: &str) -> FormatResult<&'static [&'static str]> {
        locale_match!(locale => LC_TIME::ABMON)
    }

    pub(crate) fn long_months(locale: &str) -> FormatResult<&'static [&'static str]> {
        locale_match!(locale => LC_TIME::MON)
    }

    pub(crate) fn short_weekdays(locale: &str) -> FormatResult<&'static [&'static str]> {
        locale_match!(locale => LC_TIME::ABDAY)
    }

    pub(crate) fn long_weekdays(locale: &str) -> FormatResult<&'static [&'static str]> {
        locale_match!(locale => LC_TIME::DAY)
    }
}

#[cfg(feature = "locales")]
pub(crate) use self::with_locales::*;

pub(crate) const SHORT_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

pub(crate) const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const SHORT_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) const LONG_WEEKDAYS: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
