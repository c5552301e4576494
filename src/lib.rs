// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! # datepattern: pattern-driven date and time formatting
//!
//! Formats calendar dates with the familiar letter patterns: `yyyy-MM-dd`,
//! `EEE, dd MMM yyyy HH:mm:ss Z` and so on. See the [`format`] module for the
//! pattern grammar and the meaning of every letter.
//!
//! Patterns are compiled once into a [`CompiledPattern`], which can then
//! render any number of dates from any number of threads:
//!
//! ```
//! use datepattern::{compile, render, CivilDateTime, LocaleMessages};
//!
//! let dt = CivilDateTime::from_ymd_opt(2010, 8, 31)
//!     .and_then(|d| d.and_hms_milli_opt(15, 4, 0, 0))
//!     .unwrap();
//! let pattern = compile("EEEE, MMMM d, yyyy 'at' h:mm a");
//! let text = render(&pattern, &dt, &LocaleMessages::english()).unwrap();
//! assert_eq!(text, "Tuesday, August 31, 2010 at 3:04 PM");
//! ```
//!
//! Month and weekday names come from [`LocaleMessages`], which are
//! registered per locale in a [`LocaleRegistry`]. The [`DateTimeFormatter`]
//! ties a pattern to a locale and resolves the messages from the
//! [global registry](locale::global_registry), where English is registered
//! under `"en"` from the start.
//!
//! Any type can be formatted by implementing [`DateValue`]. The crate ships
//! [`CivilDateTime`], a plain date and time with a fixed UTC offset, and with
//! the `chrono` feature also implements [`DateValue`] for chrono's
//! `NaiveDateTime` and `DateTime`.
//!
//! ## Calendar
//!
//! Weeks follow ISO 8601, see the [`calendar`] module. Dates are in the
//! proleptic Gregorian calendar, with year 0 being 1 BCE.
//!
//! ## Errors
//!
//! Compiling never fails: unknown letters are printed as they are and an
//! unclosed quote quotes the rest of the pattern. Rendering fails with a
//! [`FormatError`] only when locale messages are missing, either for a
//! whole locale or for a single name.
//!
//! ## Optional features
//!
//! - `logging`: emits diagnostics through the [`log`](https://docs.rs/log)
//!   facade.
//! - `serde`: (de)serialization of [`LocaleMessages`] as a flat map.
//! - `locales`: [`LocaleMessages::from_posix_locale`], messages built from
//!   the tables of [`pure-rust-locales`](https://docs.rs/pure-rust-locales).
//! - `chrono`: [`DateValue`] implementations for chrono types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod logging;

pub mod calendar;
mod date;
pub mod error;
pub mod format;
pub mod formatter;
pub mod locale;

pub use date::{CivilDateTime, DateValue};
pub use error::{FormatError, FormatErrorKind, FormatResult};
pub use format::{compile, render, CompiledPattern, Compiler, Token};
pub use formatter::DateTimeFormatter;
pub use locale::{register_locale_messages, LocaleMessages, LocaleRegistry};
