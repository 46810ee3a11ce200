//! Indexed statement text.
//!
//! [`Source`] keeps the statement both as a string (for error reporting)
//! and as a character array so that every lookahead and lookbehind is an
//! O(1) index. Offsets throughout the lexer count characters.

use std::fmt;
use std::sync::Arc;

use crate::char_type::EOI;

/// Immutable statement text with character-indexed access.
///
/// Cloning is cheap: both representations are reference counted.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{char_type::EOI, Source};
///
/// let source = Source::new("SELECT 'é'");
/// assert_eq!(source.len(), 10);
/// assert_eq!(source.char_at(8), 'é');
/// assert_eq!(source.char_at(10), EOI);
/// assert_eq!(source.char_at(-1), EOI);
/// assert_eq!(source.slice(0, 6), "SELECT");
/// ```
#[derive(Clone)]
pub struct Source {
    text: Arc<str>,
    chars: Arc<[char]>,
}

impl Source {
    /// Index the given statement text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let chars = text.chars().collect::<Vec<_>>().into();
        Self { text, chars }
    }

    /// Character at `position`, or [`EOI`] outside `[0, len)`.
    #[inline]
    pub fn char_at(&self, position: isize) -> char {
        usize::try_from(position)
            .ok()
            .and_then(|i| self.chars.get(i).copied())
            .unwrap_or(EOI)
    }

    /// Characters in `start..end`, clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true for an empty statement.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The original text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Shared handle to the original text.
    #[inline]
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Arc<str>> for Source {
    fn from(text: Arc<str>) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("text", &self.text)
            .field("len", &self.len())
            .finish()
    }
}
