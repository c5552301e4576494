// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Tokenizer of date and time patterns.

use std::borrow::Cow;

use super::Lexeme;

const QUOTE: char = '\'';

/// Parsing iterator for date and time patterns.
///
/// Yields a token for every maximal run of one repeated ASCII letter and a
/// blob for everything in between. The grammar is lenient: every string is a
/// valid pattern.
///
/// ```
/// use std::borrow::Cow;
/// use datepattern::format::{Lexeme, PatternItems};
///
/// let lexemes: Vec<_> = PatternItems::new("HH 'h'").collect();
/// assert_eq!(
///     lexemes,
///     [Lexeme::Token { letter: 'H', count: 2 }, Lexeme::Blob(Cow::Borrowed(" h"))],
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PatternItems<'a> {
    /// Remaining portion of the pattern.
    remainder: &'a str,
}

impl<'a> PatternItems<'a> {
    /// Creates a new parsing iterator over the pattern.
    pub const fn new(pattern: &'a str) -> PatternItems<'a> {
        PatternItems { remainder: pattern }
    }

    /// Consumes literal text up to the next letter outside of quotes.
    fn take_literal(&mut self) -> Cow<'a, str> {
        let mut text = Cow::Borrowed("");
        loop {
            let rest = self.remainder;
            if rest.starts_with("''") {
                append(&mut text, &rest[..1]);
                self.remainder = &rest[2..];
            } else if let Some(quoted) = rest.strip_prefix(QUOTE) {
                self.remainder = take_quoted(quoted, &mut text);
            } else {
                let end = rest.find(|c: char| is_pattern_letter(c) || c == QUOTE);
                let end = end.unwrap_or(rest.len());
                if end == 0 {
                    return text;
                }
                append(&mut text, &rest[..end]);
                self.remainder = &rest[end..];
            }
        }
    }
}

impl<'a> Iterator for PatternItems<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        let first = self.remainder.chars().next()?;
        if is_pattern_letter(first) {
            // letters are ASCII, so bytes and repetitions agree
            let count = self.remainder.find(|c: char| c != first).unwrap_or(self.remainder.len());
            self.remainder = &self.remainder[count..];
            return Some(Lexeme::Token { letter: first, count });
        }

        let text = self.take_literal();
        // only an unclosed, empty quote at the very end reads as nothing
        if text.is_empty() {
            return None;
        }
        Some(Lexeme::Blob(text))
    }
}

/// Tokenizes a whole pattern.
pub fn parse(pattern: &str) -> Vec<Lexeme<'_>> {
    PatternItems::new(pattern).collect()
}

#[inline]
fn is_pattern_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Reads quoted text following an opening quote and returns what is left
/// after the closing one.
///
/// A doubled quote inside is one literal quote. Without a closing quote the
/// rest of the pattern is quoted.
fn take_quoted<'a>(mut rest: &'a str, text: &mut Cow<'a, str>) -> &'a str {
    loop {
        let Some(end) = rest.find(QUOTE) else {
            append(text, rest);
            return &rest[rest.len()..];
        };
        append(text, &rest[..end]);
        let after = &rest[end + 1..];
        match after.strip_prefix(QUOTE) {
            Some(continued) => {
                append(text, &rest[end..end + 1]);
                rest = continued;
            }
            None => return after,
        }
    }
}

/// Appends a piece of the pattern, borrowing as long as there is only one piece.
fn append<'a>(text: &mut Cow<'a, str>, piece: &'a str) {
    if piece.is_empty() {
        return;
    }
    if text.is_empty() {
        *text = Cow::Borrowed(piece);
    } else {
        text.to_mut().push_str(piece);
    }
}
