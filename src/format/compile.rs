// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

use core::fmt;
use std::sync::Arc;

use super::node::{Literal, Node};
use super::pattern::PatternItems;
use super::token::Token;
use super::Lexeme;
use crate::date::DateValue;
use crate::error::FormatResult;
use crate::locale::LocaleMessages;

/// Turns patterns into [`CompiledPattern`]s using a fixed catalog of tokens.
///
/// The catalog is set on construction and never changes, so one compiler can
/// be shared by any number of threads.
#[derive(Clone, Debug)]
pub struct Compiler {
    /// Tokens indexed by their ASCII letter.
    tokens: [Option<Token>; 128],
}

impl Compiler {
    /// A compiler knowing every [`Token`].
    pub const DEFAULT: Compiler = Compiler::with_tokens(&Token::ALL);

    /// Makes a compiler knowing every [`Token`].
    pub const fn new() -> Compiler {
        Compiler::DEFAULT
    }

    /// Makes a compiler knowing only the given tokens.
    ///
    /// Other letters are compiled as literal text.
    pub const fn with_tokens(tokens: &[Token]) -> Compiler {
        let mut table = [None; 128];
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            table[token.letter() as usize] = Some(token);
            i += 1;
        }
        Compiler { tokens: table }
    }

    /// The token of a letter in this compiler's catalog.
    pub fn token(&self, letter: char) -> Option<Token> {
        self.tokens.get(letter as usize).copied().flatten()
    }

    /// Compiles a pattern.
    ///
    /// Never fails. Letters outside of the catalog are kept as literal text,
    /// repeated as often as they appear, and neighbouring literal text always
    /// ends up in a single node.
    pub fn compile(&self, pattern: &str) -> CompiledPattern {
        let mut nodes: Vec<Arc<dyn Node>> = Vec::new();
        let mut literal = String::new();

        for lexeme in PatternItems::new(pattern) {
            match lexeme {
                Lexeme::Blob(text) => literal.push_str(&text),
                Lexeme::Token { letter, count } => match self.token(letter) {
                    Some(token) => {
                        if !literal.is_empty() {
                            nodes.push(Arc::new(Literal::new(core::mem::take(&mut literal))));
                        }
                        nodes.push(token.node(count));
                    }
                    None => {
                        trace!("no token for `{}` in {:?}, kept as literal text", letter, pattern);
                        literal.extend(core::iter::repeat(letter).take(count));
                    }
                },
            }
        }
        if !literal.is_empty() {
            nodes.push(Arc::new(Literal::new(literal)));
        }

        debug!("compiled pattern {:?} into {} nodes", pattern, nodes.len());
        CompiledPattern { nodes }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::DEFAULT
    }
}

/// A compiled pattern: the sequence of nodes rendering it.
///
/// Compile a pattern once and render it as often as needed. Cloning is cheap
/// since the nodes are shared.
#[derive(Clone, Debug, Default)]
pub struct CompiledPattern {
    nodes: Vec<Arc<dyn Node>>,
}

impl CompiledPattern {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true for the empty pattern, which renders as the empty string.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes, in rendering order.
    pub fn nodes(&self) -> impl Iterator<Item = &dyn Node> + '_ {
        self.nodes.iter().map(|node| &**node)
    }

    /// Renders every node for `value` and concatenates the fragments.
    pub fn render(&self, value: &dyn DateValue, messages: &LocaleMessages) -> FormatResult<String> {
        let mut result = String::new();
        for node in &self.nodes {
            node.format(&mut result, value, messages)?;
        }
        Ok(result)
    }

    /// Returns a value that renders the pattern when displayed.
    ///
    /// Rendering errors become [`fmt::Error`]; use [`CompiledPattern::render`]
    /// to see them.
    pub fn format<'a>(
        &'a self,
        value: &'a dyn DateValue,
        messages: &'a LocaleMessages,
    ) -> DelayedFormat<'a> {
        DelayedFormat { pattern: self, value, messages }
    }
}

/// A *temporary* object which can be used as an argument to `format!` or others.
/// This is normally constructed via [`CompiledPattern::format`].
pub struct DelayedFormat<'a> {
    pattern: &'a CompiledPattern,
    value: &'a dyn DateValue,
    messages: &'a LocaleMessages,
}

impl fmt::Display for DelayedFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let result = self.pattern.render(self.value, self.messages).map_err(|_| fmt::Error)?;
        f.pad(&result)
    }
}

impl fmt::Debug for DelayedFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DelayedFormat").field("pattern", self.pattern).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::{CompiledPattern, Compiler};
    use crate::format::Token;
    use crate::{CivilDateTime, LocaleMessages};

    fn sample() -> CivilDateTime {
        CivilDateTime::from_ymd_opt(2018, 11, 1)
            .and_then(|d| d.and_hms_milli_opt(14, 3, 9, 7))
            .unwrap()
            .with_offset_minutes(-60)
    }

    fn render(compiler: &Compiler, pattern: &str) -> String {
        compiler.compile(pattern).render(&sample(), &LocaleMessages::english()).unwrap()
    }

    #[test]
    fn test_compile_empty() {
        let compiled = Compiler::new().compile("");
        assert!(compiled.is_empty());
        assert_eq!(compiled.render(&sample(), &LocaleMessages::new()).unwrap(), "");
    }

    #[test]
    fn test_node_counts() {
        let compiler = Compiler::new();
        assert_eq!(compiler.compile("yyyy-MM-dd").len(), 5);
        assert_eq!(compiler.compile("'literal only'").len(), 1);
        // unknown letters join the surrounding literal text
        assert_eq!(compiler.compile("dd 'of' qq MM").len(), 3);
        assert_eq!(compiler.compile("qqq").len(), 1);
    }

    #[test]
    fn test_unknown_letters() {
        let compiler = Compiler::new();
        assert_eq!(render(&compiler, "qqq"), "qqq");
        assert_eq!(render(&compiler, "HH'h'mm T"), "14h03 T");
        assert_eq!(render(&compiler, "dd/qq/MM"), "01/qq/11");
    }

    #[test]
    fn test_restricted_catalog() {
        let compiler = Compiler::with_tokens(&[Token::Day, Token::Month]);
        assert_eq!(compiler.token('d'), Some(Token::Day));
        assert_eq!(compiler.token('y'), None);
        assert_eq!(compiler.token('é'), None);
        assert_eq!(render(&compiler, "dd.MM.yyyy"), "01.11.yyyy");
    }

    #[test]
    fn test_full_catalog() {
        let compiler = Compiler::default();
        for token in Token::ALL {
            assert_eq!(compiler.token(token.letter()), Some(token));
        }
        assert_eq!(
            render(&compiler, "G yyyy YY MMM w W D d F EEEE u a H k K h m s SSS z Z XXX"),
            "AD 2018 18 Nov 44 1 305 1 1 Thursday 4 PM 14 14 2 2 3 9 007 GMT+01:00 +0100 +01:00"
        );
    }

    #[test]
    fn test_literal_round_trip() {
        let compiler = Compiler::new();
        let literals = ["", " - / : ", "'at' '", "'o''clock'", "''", "12345 ,.;"];
        let expected = ["", " - / : ", "at ", "o'clock", "'", "12345 ,.;"];
        for (pattern, expected) in literals.iter().zip(expected) {
            assert_eq!(render(&compiler, pattern), expected);
        }
    }

    #[test]
    fn test_compile_is_idempotent() {
        let compiler = Compiler::new();
        let pattern = "EEE, dd MMM yyyy HH:mm:ss Z";
        let messages = LocaleMessages::english();
        let first = compiler.compile(pattern).render(&sample(), &messages).unwrap();
        let second = compiler.compile(pattern).render(&sample(), &messages).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "Thu, 01 Nov 2018 14:03:09 +0100");
    }

    #[test]
    fn test_delayed_format() {
        let compiled = Compiler::new().compile("dd MMMM");
        let messages = LocaleMessages::english();
        let value = sample();
        assert_eq!(format!("{}", compiled.format(&value, &messages)), "01 November");
        assert_eq!(format!("{:>12}", compiled.format(&value, &messages)), " 01 November");
    }

    #[test]
    fn test_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledPattern>();
        assert_send_sync::<Compiler>();

        let compiled = std::sync::Arc::new(Compiler::new().compile("yyyy-MM-dd EEE"));
        let handles: Vec<_> = (1..=7)
            .map(|day| {
                let compiled = std::sync::Arc::clone(&compiled);
                std::thread::spawn(move || {
                    let value = CivilDateTime::from_ymd_opt(2018, 11, day).unwrap();
                    compiled.render(&value, &LocaleMessages::english()).unwrap()
                })
            })
            .collect();
        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(rendered[0], "2018-11-01 Thu");
        assert_eq!(rendered[6], "2018-11-07 Wed");
    }
}
