// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Errors raised while rendering a compiled pattern.

use core::fmt;

/// The category of a formatting failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatErrorKind {
    /// A name had to be looked up, but neither the requested locale nor the
    /// default locale has registered messages.
    ///
    /// Carries the default locale that was tried last.
    NoLocaleMessages(String),

    /// The resolved locale messages have no entry for the key.
    ///
    /// Month and weekday names are looked up under keys such as `months.full.7`
    /// or `weekdays.short.3`.
    MissingMessage(String),

    /// A built-in locale table was requested for a locale that is not shipped.
    UnknownLocale(String),
}

/// An error from rendering a compiled pattern.
///
/// Compiling a pattern never fails; only the locale-dependent parts of
/// rendering do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatError(pub(crate) FormatErrorKind);

/// Same as `Result<T, FormatError>`.
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// The category of the error.
    pub const fn kind(&self) -> &FormatErrorKind {
        &self.0
    }

    pub(crate) fn missing_message(key: impl Into<String>) -> FormatError {
        FormatError(FormatErrorKind::MissingMessage(key.into()))
    }
}

impl From<FormatErrorKind> for FormatError {
    #[inline]
    fn from(kind: FormatErrorKind) -> Self {
        FormatError(kind)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            FormatErrorKind::NoLocaleMessages(ref locale) => {
                write!(f, "no locale messages registered, not even for default locale `{}`", locale)
            }
            FormatErrorKind::MissingMessage(ref key) => {
                write!(f, "locale messages have no entry for `{}`", key)
            }
            FormatErrorKind::UnknownLocale(ref name) => write!(f, "unknown locale `{}`", name),
        }
    }
}

impl std::error::Error for FormatError {}
