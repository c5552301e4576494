// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! A formatter bundling a compiled pattern with a preferred locale.

use std::sync::Arc;

use crate::date::DateValue;
use crate::error::{FormatErrorKind, FormatResult};
use crate::format::CompiledPattern;
use crate::locale::{global_registry, LocaleMessages, LocaleRegistry};

/// Commonly used patterns.
pub mod formats {
    /// `2018-11-17 09:05:00`
    pub const DEFAULT: &str = "yyyy-MM-dd HH:mm:ss";

    /// `11/17/18`
    pub const DATE_SHORT: &str = "M/d/yy";
    /// `Nov 17, 2018`
    pub const DATE_MEDIUM: &str = "MMM d, yyyy";
    /// `November 17, 2018`
    pub const DATE_LONG: &str = "MMMM d, yyyy";
    /// `Saturday, November 17, 2018`
    pub const DATE_FULL: &str = "EEEE, MMMM d, yyyy";
    /// `2018-11-17`
    pub const ISO_DATE: &str = "yyyy-MM-dd";

    /// `9:05 AM`
    pub const TIME_SHORT: &str = "h:mm a";
    /// `9:05:00 AM`
    pub const TIME_MEDIUM: &str = "h:mm:ss a";
    /// `9:05:00 AM +0100`
    pub const TIME_LONG: &str = "h:mm:ss a Z";
    /// `09:05:00`
    pub const ISO_TIME: &str = "HH:mm:ss";

    /// `2018-11-17T09:05:00`
    pub const ISO_DATE_TIME: &str = "yyyy-MM-dd'T'HH:mm:ss";
    /// The date format of the HTTP `Expires` header: `Sat, 17 Nov 2018 09:05:00 +0000`
    pub const EXPIRES_HEADER: &str = "EEE, dd MMM yyyy HH:mm:ss Z";
}

/// Formats date values with one pattern.
///
/// The pattern is compiled once, on construction. Locale messages are looked
/// up on every call, in this order: the locale asked for in the call, the
/// locale of the formatter, and the default locale of the registry.
///
/// ```
/// use datepattern::{CivilDateTime, DateTimeFormatter};
///
/// let dt = CivilDateTime::from_ymd_opt(2018, 11, 17)
///     .and_then(|d| d.and_hms_milli_opt(9, 5, 0, 0))
///     .unwrap();
/// let formatter = DateTimeFormatter::new("EEE d MMM yyyy 'at' h:mm a");
/// assert_eq!(formatter.format(&dt).unwrap(), "Sat 17 Nov 2018 at 9:05 AM");
/// ```
#[derive(Clone, Debug)]
pub struct DateTimeFormatter {
    pattern: CompiledPattern,
    locale: Option<String>,
}

impl DateTimeFormatter {
    /// Makes a formatter using the default locale.
    pub fn new(pattern: &str) -> DateTimeFormatter {
        DateTimeFormatter { pattern: crate::format::compile(pattern), locale: None }
    }

    /// Makes a formatter preferring `locale`.
    ///
    /// The locale does not have to be registered yet; it is looked up when
    /// formatting.
    pub fn with_locale(pattern: &str, locale: impl Into<String>) -> DateTimeFormatter {
        DateTimeFormatter { pattern: crate::format::compile(pattern), locale: Some(locale.into()) }
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// The preferred locale, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Formats `value` with the messages of the formatter's locale.
    pub fn format(&self, value: &dyn DateValue) -> FormatResult<String> {
        self.format_with(value, None, global_registry())
    }

    /// Formats `value` with the messages of `locale`, falling back to the
    /// formatter's locale when `locale` is not registered.
    pub fn format_in_locale(&self, value: &dyn DateValue, locale: &str) -> FormatResult<String> {
        self.format_with(value, Some(locale), global_registry())
    }

    /// Formats `value` with messages from a given registry.
    ///
    /// Patterns without names render even when the registry has no messages
    /// for the default locale. Names then fail with
    /// [`FormatErrorKind::NoLocaleMessages`].
    pub fn format_with(
        &self,
        value: &dyn DateValue,
        locale: Option<&str>,
        registry: &LocaleRegistry,
    ) -> FormatResult<String> {
        match self.messages(locale, registry) {
            Some(messages) => self.pattern.render(value, &messages),
            None => self.pattern.render(value, &LocaleMessages::new()).map_err(|err| {
                if matches!(err.kind(), FormatErrorKind::MissingMessage(_)) {
                    FormatErrorKind::NoLocaleMessages(registry.default_locale().to_owned()).into()
                } else {
                    err
                }
            }),
        }
    }

    /// Compiles `pattern` and formats a single value with it.
    pub fn format_pattern(
        value: &dyn DateValue,
        pattern: &str,
        locale: Option<&str>,
    ) -> FormatResult<String> {
        DateTimeFormatter::new(pattern).format_with(value, locale, global_registry())
    }

    fn messages(
        &self,
        locale: Option<&str>,
        registry: &LocaleRegistry,
    ) -> Option<Arc<LocaleMessages>> {
        let requested = match locale {
            Some(locale) if registry.contains(locale) => Some(locale),
            Some(_locale) => {
                debug!("locale `{}` is not registered, trying {:?}", _locale, self.locale);
                self.locale.as_deref()
            }
            None => self.locale.as_deref(),
        };
        registry.find(requested)
    }
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        DateTimeFormatter::new(formats::DEFAULT)
    }
}
