//! Character classification for SQL scanning.
//!
//! Every predicate is a pure function of one `char`. The end of the input is
//! represented by the [`EOI`] sentinel so that lookahead past the last
//! character never needs a bounds check at the call site.
//!
//! # Examples
//!
//! ```
//! use shardlex_lex::char_type::{self, EOI};
//!
//! assert!(char_type::is_identifier_begin('`'));
//! assert!(!char_type::is_identifier_char('`'));
//! assert!(char_type::is_symbol('#'));
//! assert!(char_type::is_end_of_input(EOI));
//! ```

/// End-of-input sentinel (ASCII SUB).
///
/// Returned by every bounded accessor for positions outside the input.
pub const EOI: char = '\u{1A}';

/// ASCII letter.
#[inline]
pub fn is_alphabet(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// ASCII hexadecimal digit, either case.
#[inline]
pub fn is_hex(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Characters that may start an operator or punctuation token.
#[inline]
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '^'
            | '='
            | '>'
            | '<'
            | '~'
            | '!'
            | '?'
            | '&'
            | '|'
            | '.'
            | ':'
            | '#'
            | ','
            | ';'
    )
}

/// Whitespace skipped between tokens.
///
/// Other control characters are not whitespace. They match no token rule
/// and surface as lexical errors.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{A0}'
    )
}

/// Returns true for the [`EOI`] sentinel.
#[inline]
pub fn is_end_of_input(ch: char) -> bool {
    ch == EOI
}

/// Characters that may start an identifier or keyword.
#[inline]
pub fn is_identifier_begin(ch: char) -> bool {
    is_alphabet(ch) || matches!(ch, '`' | '_' | '$')
}

/// Characters that may continue an identifier.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    is_alphabet(ch) || is_digit(ch) || matches!(ch, '_' | '$')
}
