// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Date and time patterns.
//!
//! A pattern is plain text in which runs of ASCII letters stand for calendar
//! fields. Repeating a letter selects a wider or more verbose rendering.
//!
//! Letter | Field                        | Repetition
//! ------ | ---------------------------- | -----------------------------------------------
//! `G`    | era (`BC`/`AD`)              | ignored
//! `y`    | year                         | `y`, `yy`: last two digits; `yyy` or more: full year
//! `Y`    | ISO 8601 week-based year     | as `y`
//! `M`    | month                        | `M`: `7`; `MM`: `07`; `MMM`: `Jul`; `MMMM` or more: `July`
//! `w`    | ISO 8601 week of year        | zero-padded to the repetition count
//! `W`    | week of month                | zero-padded
//! `D`    | day of year                  | zero-padded
//! `d`    | day of month                 | zero-padded
//! `F`    | weekday occurrence in month  | zero-padded
//! `E`    | weekday name                 | up to `EEE`: `Tue`; `EEEE` or more: `Tuesday`
//! `u`    | ISO 8601 weekday (1 = Monday)| zero-padded
//! `a`    | `AM`/`PM`                    | ignored
//! `H`    | hour (0--23)                 | zero-padded
//! `k`    | hour (1--24)                 | zero-padded
//! `K`    | hour (0--11)                 | zero-padded
//! `h`    | hour (1--12)                 | zero-padded
//! `m`    | minute                       | zero-padded
//! `s`    | second                       | zero-padded
//! `S`    | millisecond                  | zero-padded
//! `z`    | offset, `GMT` or `GMT-08:00` | ignored
//! `Z`    | offset, `-0800`              | ignored
//! `X`    | offset                       | `X`: `-08`; `XX`: `-0800`; `XXX` or more: `-08:00`
//!
//! Any other letter is printed as is. Everything that is not a letter is
//! printed as is too, and text between single quotes is never interpreted:
//! `'at' h a` prints `at 3 PM`. Two single quotes print one, inside or
//! outside of quoted text. A quote that is never closed quotes the rest of
//! the pattern.
//!
//! Patterns go through three stages. [`PatternItems`] splits the pattern
//! into [`Lexeme`]s, a [`Compiler`] turns those into a [`CompiledPattern`]
//! of [`Node`]s using its catalog of [`Token`]s, and the compiled pattern
//! renders any number of [`DateValue`]s.

use std::borrow::Cow;
use std::fmt;

use crate::date::DateValue;
use crate::error::FormatResult;
use crate::locale::LocaleMessages;

/// A unit of a tokenized pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Lexeme<'a> {
    /// A run of one repeated letter.
    Token {
        /// The letter.
        letter: char,
        /// How many times the letter is repeated, at least 1.
        count: usize,
    },
    /// Literal text with any quoting already removed.
    ///
    /// Consecutive literal runs are always merged into a single blob.
    Blob(Cow<'a, str>),
}

impl Lexeme<'_> {
    /// Detaches the lexeme from the pattern it was read from.
    pub fn into_owned(self) -> Lexeme<'static> {
        match self {
            Lexeme::Token { letter, count } => Lexeme::Token { letter, count },
            Lexeme::Blob(text) => Lexeme::Blob(Cow::Owned(text.into_owned())),
        }
    }
}

/// Prints the unquoted source text: the repeated letter, or the blob.
impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Lexeme::Token { letter, count } => {
                for _ in 0..count {
                    fmt::Write::write_char(f, letter)?;
                }
                Ok(())
            }
            Lexeme::Blob(ref text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
macro_rules! tok {
    ($letter:expr, $count:expr) => {
        Lexeme::Token { letter: $letter, count: $count }
    };
}

#[cfg(test)]
macro_rules! blob {
    ($text:expr) => {
        Lexeme::Blob(std::borrow::Cow::Borrowed($text))
    };
}

mod compile;
pub(crate) mod locales;
mod node;
mod pattern;
mod token;

pub use compile::{CompiledPattern, Compiler, DelayedFormat};
pub use node::{
    Fixed, FixedText, Literal, Name, NameField, NameStyle, Node, Numeric, OffsetFormat,
    OffsetPrecision, PaddedNumber, YearField, YearNumber, ZoneOffset,
};
pub use pattern::{parse, PatternItems};
pub use token::Token;

/// Compiles a pattern with the full token catalog.
///
/// Never fails: unknown letters and unbalanced quotes are taken literally.
pub fn compile(pattern: &str) -> CompiledPattern {
    Compiler::DEFAULT.compile(pattern)
}

/// Renders a compiled pattern for a date value with the given messages.
pub fn render(
    pattern: &CompiledPattern,
    value: &dyn DateValue,
    messages: &LocaleMessages,
) -> FormatResult<String> {
    pattern.render(value, messages)
}

#[cfg(test)]
mod tests {
    use super::{compile, render, Lexeme};
    use crate::{CivilDateTime, LocaleMessages};

    #[test]
    fn test_lexeme_display() {
        assert_eq!(tok!('y', 4).to_string(), "yyyy");
        assert_eq!(blob!("o'clock").to_string(), "o'clock");
    }

    #[test]
    fn test_into_owned() {
        let pattern = String::from(" at ");
        let lexeme = blob!(pattern.as_str()).into_owned();
        drop(pattern);
        assert_eq!(lexeme, blob!(" at "));
    }

    #[test]
    fn test_compile_and_render() {
        let dt = CivilDateTime::from_ymd_opt(2018, 11, 17)
            .and_then(|d| d.and_hms_milli_opt(9, 5, 0, 0))
            .unwrap();
        let pattern = compile("EEEE d MMMM yyyy, HH:mm");
        let rendered = render(&pattern, &dt, &LocaleMessages::english()).unwrap();
        assert_eq!(rendered, "Saturday 17 November 2018, 09:05");
    }
}
