// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Localized month and weekday names.
//!
//! A [`LocaleMessages`] set is a flat map from message keys to display text.
//! The keys read by compiled patterns are:
//!
//! Key                   | Meaning
//! --------------------- | -------------------------------------------
//! `months.full.<n>`     | Full name of month `n` (1 = January)
//! `months.short.<n>`    | Abbreviated name of month `n`
//! `weekdays.full.<n>`   | Full name of weekday `n` (1 = Monday, 7 = Sunday)
//! `weekdays.short.<n>`  | Abbreviated name of weekday `n`
//!
//! Message sets are registered per locale in a [`LocaleRegistry`]. There is
//! one process-wide registry, [`global_registry`], which is created with the
//! English messages registered under [`DEFAULT_LOCALE`].

use std::collections::hash_map::{self, HashMap};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::error::{FormatError, FormatErrorKind, FormatResult};
use crate::format::locales;

/// The locale the process-wide registry falls back to.
pub const DEFAULT_LOCALE: &str = "en";

/// Display texts of a single locale, keyed by message key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocaleMessages {
    messages: HashMap<String, String>,
}

impl LocaleMessages {
    /// Makes an empty message set.
    pub fn new() -> LocaleMessages {
        LocaleMessages::default()
    }

    /// The built-in English month and weekday names.
    pub fn english() -> LocaleMessages {
        LocaleMessages::from_names(
            &locales::SHORT_MONTHS,
            &locales::LONG_MONTHS,
            &locales::SHORT_WEEKDAYS,
            &locales::LONG_WEEKDAYS,
        )
    }

    /// Builds the month and weekday messages from name tables.
    ///
    /// Month tables start with January. Weekday tables start with Sunday, the
    /// order used by POSIX `LC_TIME`; they are renumbered to the Monday-first
    /// message keys. Entries past the 12th month or 7th weekday are ignored.
    pub fn from_names(
        short_months: &[&str],
        long_months: &[&str],
        short_weekdays: &[&str],
        long_weekdays: &[&str],
    ) -> LocaleMessages {
        let mut messages = LocaleMessages::new();
        for (i, (short, long)) in short_months.iter().zip(long_months).take(12).enumerate() {
            messages.insert(format!("months.short.{}", i + 1), *short);
            messages.insert(format!("months.full.{}", i + 1), *long);
        }
        for (i, (short, long)) in short_weekdays.iter().zip(long_weekdays).take(7).enumerate() {
            // Sunday is 0 in the tables and 7 in the keys.
            let number = if i == 0 { 7 } else { i };
            messages.insert(format!("weekdays.short.{}", number), *short);
            messages.insert(format!("weekdays.full.{}", number), *long);
        }
        messages
    }

    /// Builds the messages of a POSIX locale such as `fr_BE`.
    #[cfg(feature = "locales")]
    #[cfg_attr(docsrs, doc(cfg(feature = "locales")))]
    pub fn from_posix_locale(locale: &str) -> FormatResult<LocaleMessages> {
        Ok(LocaleMessages::from_names(
            locales::short_months(locale)?,
            locales::long_months(locale)?,
            locales::short_weekdays(locale)?,
            locales::long_weekdays(locale)?,
        ))
    }

    /// Sets the text of a key, returning the previous text if any.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.messages.insert(key.into(), text.into())
    }

    /// The text of a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// The text of a key.
    ///
    /// A missing key is an error rather than some placeholder text.
    pub fn lookup(&self, key: &str) -> FormatResult<&str> {
        self.get(key).ok_or_else(|| FormatError::missing_message(key))
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over `(key, text)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.messages.iter() }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut messages = LocaleMessages::new();
        messages.extend(iter);
        messages
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for LocaleMessages {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, text) in iter {
            self.insert(key, text);
        }
    }
}

impl<'a> IntoIterator for &'a LocaleMessages {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the messages of a [`LocaleMessages`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Locale messages registered by locale identifier, with a default locale.
///
/// Registration is additive: registering a locale again replaces its
/// messages, and nothing is ever removed. Lookups and registrations are
/// guarded by a read-write lock, though registering everything up front and
/// only reading afterwards is the expected use.
#[derive(Debug)]
pub struct LocaleRegistry {
    default_locale: String,
    locales: RwLock<HashMap<String, Arc<LocaleMessages>>>,
}

impl LocaleRegistry {
    /// Makes an empty registry falling back to `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> LocaleRegistry {
        LocaleRegistry { default_locale: default_locale.into(), locales: RwLock::default() }
    }

    /// Makes a registry with the English messages registered as [`DEFAULT_LOCALE`].
    pub fn with_english() -> LocaleRegistry {
        let registry = LocaleRegistry::new(DEFAULT_LOCALE);
        registry.register(DEFAULT_LOCALE, LocaleMessages::english());
        registry
    }

    /// The locale used when a requested locale is not registered.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Registers the messages of a locale, returning the replaced messages if any.
    pub fn register(
        &self,
        locale: impl Into<String>,
        messages: LocaleMessages,
    ) -> Option<Arc<LocaleMessages>> {
        let locale = locale.into();
        debug!("registering {} locale messages for `{}`", messages.len(), locale);
        let previous = self
            .locales
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locale, Arc::new(messages));
        if previous.is_some() {
            debug!("replaced previously registered locale messages");
        }
        previous
    }

    /// Returns true if messages are registered for the locale.
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.read().unwrap_or_else(PoisonError::into_inner).contains_key(locale)
    }

    /// The messages registered for exactly this locale.
    pub fn get(&self, locale: &str) -> Option<Arc<LocaleMessages>> {
        self.locales.read().unwrap_or_else(PoisonError::into_inner).get(locale).cloned()
    }

    /// The messages of `locale`, or of the default locale when `locale` is
    /// `None` or not registered.
    ///
    /// Returns `None` when the default locale is not registered either.
    pub fn find(&self, locale: Option<&str>) -> Option<Arc<LocaleMessages>> {
        let locales = self.locales.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(locale) = locale {
            if let Some(messages) = locales.get(locale) {
                return Some(Arc::clone(messages));
            }
            debug!("no messages for locale `{}`, using `{}`", locale, self.default_locale);
        }
        let messages = locales.get(&self.default_locale).cloned();
        if messages.is_none() {
            warn!("no messages for default locale `{}`", self.default_locale);
        }
        messages
    }

    /// Like [`LocaleRegistry::find`], but fails with
    /// [`FormatErrorKind::NoLocaleMessages`] when the default locale is not
    /// registered.
    pub fn resolve(&self, locale: Option<&str>) -> FormatResult<Arc<LocaleMessages>> {
        self.find(locale)
            .ok_or_else(|| FormatErrorKind::NoLocaleMessages(self.default_locale.clone()).into())
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        LocaleRegistry::with_english()
    }
}

/// The process-wide registry, created on first use by [`LocaleRegistry::with_english`].
pub fn global_registry() -> &'static LocaleRegistry {
    static GLOBAL: OnceLock<LocaleRegistry> = OnceLock::new();
    GLOBAL.get_or_init(LocaleRegistry::with_english)
}

/// Registers messages for a locale in the [`global_registry`].
pub fn register_locale_messages(locale: impl Into<String>, messages: LocaleMessages) {
    global_registry().register(locale, messages);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{LocaleMessages, LocaleRegistry, DEFAULT_LOCALE};
    use crate::error::FormatErrorKind;

    #[test]
    fn test_english() {
        let en = LocaleMessages::english();
        assert_eq!(en.len(), 12 * 2 + 7 * 2);
        assert_eq!(en.lookup("months.full.1"), Ok("January"));
        assert_eq!(en.lookup("months.short.12"), Ok("Dec"));
        assert_eq!(en.lookup("weekdays.full.1"), Ok("Monday"));
        assert_eq!(en.lookup("weekdays.short.6"), Ok("Sat"));
        assert_eq!(en.lookup("weekdays.full.7"), Ok("Sunday"));
        assert_eq!(en.get("weekdays.full.0"), None);
    }

    #[test]
    fn test_lookup_missing() {
        let messages: LocaleMessages = [("months.full.1", "Janvier")].into_iter().collect();
        assert_eq!(messages.lookup("months.full.1"), Ok("Janvier"));
        let err = messages.lookup("months.full.2").unwrap_err();
        assert_eq!(err.kind(), &FormatErrorKind::MissingMessage("months.full.2".into()));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = LocaleRegistry::with_english();
        let mut de = LocaleMessages::new();
        de.insert("months.full.3", "März");
        registry.register("de", de);

        assert_eq!(registry.resolve(Some("de")).unwrap().lookup("months.full.3"), Ok("März"));
        assert_eq!(registry.resolve(Some("xx")).unwrap().lookup("months.full.3"), Ok("March"));
        assert_eq!(registry.resolve(None).unwrap().lookup("months.full.3"), Ok("March"));
    }

    #[test]
    fn test_resolve_without_default() {
        let registry = LocaleRegistry::new("fr");
        registry.register("en", LocaleMessages::english());
        assert!(registry.resolve(Some("en")).is_ok());
        let err = registry.resolve(Some("de")).unwrap_err();
        assert_eq!(err.kind(), &FormatErrorKind::NoLocaleMessages("fr".into()));
        assert!(registry.resolve(None).is_err());
        assert!(registry.find(Some("en")).is_some());
        assert!(registry.find(Some("de")).is_none());
        assert!(registry.find(None).is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let registry = LocaleRegistry::new(DEFAULT_LOCALE);
        assert!(registry.register("en", LocaleMessages::new()).is_none());
        let previous = registry.register("en", LocaleMessages::english()).unwrap();
        assert!(previous.is_empty());
        assert!(registry.contains("en"));
        assert_eq!(registry.get("en").map(|m| m.len()), Some(38));
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(LocaleRegistry::with_english());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let messages = registry.resolve(Some("en")).unwrap();
                    messages.lookup("months.short.5").map(String::from)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok("May".to_owned()));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = r#"{"months.full.1":"enero","weekdays.short.1":"lun"}"#;
        let messages: LocaleMessages = serde_json::from_str(json).unwrap();
        assert_eq!(messages.lookup("months.full.1"), Ok("enero"));
        assert_eq!(messages.lookup("weekdays.short.1"), Ok("lun"));
        let back = serde_json::to_string(&messages).unwrap();
        assert_eq!(serde_json::from_str::<LocaleMessages>(&back).unwrap(), messages);
    }

    #[cfg(feature = "locales")]
    #[test]
    fn test_posix_locale() {
        let fr = LocaleMessages::from_posix_locale("fr_BE").unwrap();
        assert_eq!(fr.lookup("months.full.1"), Ok("janvier"));
        assert_eq!(fr.lookup("weekdays.full.7"), Ok("dimanche"));
        let err = LocaleMessages::from_posix_locale("xx_XX").unwrap_err();
        assert_eq!(err.kind(), &FormatErrorKind::UnknownLocale("xx_XX".into()));
    }
}
