//! Core tokenizer value.

use crate::dictionary::Dictionary;
use crate::error::{LexicalError, LexicalErrorKind};
use crate::source::Source;

/// Scanning routines positioned at one offset of the input.
///
/// A `Tokenizer` holds no state between calls: each routine recognises a
/// single lexeme (or ignorable region) starting at `offset` and reports
/// where it ends. The [`Lexer`](crate::Lexer) decides which routine to run.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{DialectKind, Source, Tokenizer};
///
/// let source = Source::new("  -- note\nSELECT");
/// let dictionary = DialectKind::Default.dictionary();
///
/// let offset = Tokenizer::new(&source, &dictionary, 0).skip_whitespace();
/// assert_eq!(offset, 2);
/// let offset = Tokenizer::new(&source, &dictionary, offset).skip_comment().unwrap();
/// assert_eq!(offset, 9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'a> {
    pub(crate) input: &'a Source,
    pub(crate) dictionary: &'a Dictionary,
    pub(crate) offset: usize,
}

impl<'a> Tokenizer<'a> {
    /// Position a tokenizer at `offset` (in characters).
    pub fn new(input: &'a Source, dictionary: &'a Dictionary, offset: usize) -> Self {
        Self {
            input,
            dictionary,
            offset,
        }
    }

    /// Character `delta` positions after the tokenizer offset.
    #[inline]
    pub(crate) fn char_at(&self, delta: usize) -> char {
        self.input.char_at((self.offset + delta) as isize)
    }

    /// Returns true once `position` (absolute) is past the last character.
    ///
    /// Loops test this instead of comparing against the EOI sentinel so that
    /// a literal U+001A inside a string or comment is kept as text.
    #[inline]
    pub(crate) fn is_end(&self, position: usize) -> bool {
        position >= self.input.len()
    }

    /// Number of consecutive characters from `delta` matching `predicate`.
    pub(crate) fn run_length(&self, delta: usize, predicate: impl Fn(char) -> bool) -> usize {
        (delta..)
            .take_while(|&d| predicate(self.char_at(d)))
            .count()
    }

    pub(crate) fn error(&self, kind: LexicalErrorKind, offset: usize) -> LexicalError {
        LexicalError::new(kind, self.input.shared_text(), offset)
    }

    /// Source text from the tokenizer offset to `end`.
    pub(crate) fn literals_to(&self, end: usize) -> String {
        self.input.slice(self.offset, end)
    }
}
