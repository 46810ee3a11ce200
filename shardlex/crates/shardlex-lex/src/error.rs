//! Lexical errors.
//!
//! Scanning stops at the first problem. The error keeps the whole input
//! and the offending character offset so callers can point at it.

use std::sync::Arc;

use shardlex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceFile, Span};
use thiserror::Error;

use crate::token::{Assist, Token};

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    /// No token rule matches this character
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    /// End of input inside a quoted literal opened with the given quote
    #[error("unterminated quoted literal, missing closing {0}")]
    UnterminatedChars(char),

    /// End of input inside `/* ... */`
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// End of input inside a dialect hint
    #[error("unterminated hint")]
    UnterminatedHint,

    /// `0x` followed by no hex digit
    #[error("missing hex digits after `0x`")]
    MissingHexDigits,
}

impl LexicalErrorKind {
    /// Diagnostic code for this kind of error.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexicalErrorKind::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexicalErrorKind::UnterminatedChars(_) => DiagnosticCode::E_LEXER_UNTERMINATED_CHARS,
            LexicalErrorKind::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexicalErrorKind::UnterminatedHint => DiagnosticCode::E_LEXER_UNTERMINATED_HINT,
            LexicalErrorKind::MissingHexDigits => DiagnosticCode::E_LEXER_MISSING_HEX_DIGITS,
        }
    }

    fn help(self) -> String {
        match self {
            LexicalErrorKind::UnexpectedChar(_) => {
                "remove the character or quote it inside a string literal".to_string()
            },
            LexicalErrorKind::UnterminatedChars(quote) => {
                format!("add the closing {quote}; write {quote}{quote} for a literal {quote}")
            },
            LexicalErrorKind::UnterminatedComment | LexicalErrorKind::UnterminatedHint => {
                "close it with `*/`".to_string()
            },
            LexicalErrorKind::MissingHexDigits => {
                "write at least one hex digit, e.g. `0x0`".to_string()
            },
        }
    }
}

/// A fatal scanning error.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{DialectKind, Lexer, LexicalErrorKind};
///
/// let mut lexer = Lexer::for_dialect("SELECT 'abc", DialectKind::MySql);
/// lexer.next_token().unwrap();
/// let err = lexer.next_token().unwrap_err();
/// assert_eq!(err.kind(), LexicalErrorKind::UnterminatedChars('\''));
/// assert_eq!(err.offset(), 7);
/// assert_eq!(err.to_string(), "unterminated quoted literal, missing closing ' at offset 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct LexicalError {
    kind: LexicalErrorKind,
    input: Arc<str>,
    offset: usize,
}

impl LexicalError {
    /// Create an error at a character offset of `input`.
    pub fn new(kind: LexicalErrorKind, input: impl Into<Arc<str>>, offset: usize) -> Self {
        Self {
            kind,
            input: input.into(),
            offset,
        }
    }

    /// What went wrong.
    #[inline]
    pub fn kind(&self) -> LexicalErrorKind {
        self.kind
    }

    /// The full statement text.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Character offset of the problem.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The ERROR token a parser would see at this position.
    ///
    /// Its text is the offending character, or empty at end of input.
    pub fn error_token(&self) -> Token {
        let literals = self
            .input
            .chars()
            .nth(self.offset)
            .map(String::from)
            .unwrap_or_default();
        Token::new(Assist::Error, literals, self.offset)
    }

    /// Build a pointer diagnostic for this error.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let file = SourceFile::new(0, "<input>", Arc::clone(&self.input));
        let byte = file.char_to_byte(self.offset);
        let (line, column) = file.offset_to_line_col(byte);
        DiagnosticBuilder::error(self.kind.to_string())
            .code(self.kind.code())
            .span(Span::point(byte, line as u32, column as u32))
            .snippet(file.point_snippet(byte))
            .help(self.kind.help())
            .build()
    }

    /// Render the diagnostic for a terminal, naming the source `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_lex::{DialectKind, Lexer};
    ///
    /// let err = Lexer::for_dialect("SELECT *\nFROM t WHERE a = \u{1}", DialectKind::Default)
    ///     .tokenize()
    ///     .unwrap_err();
    /// let text = err.render("orders.sql");
    /// assert!(text.starts_with("error[E1001]: unexpected character '\\u{1}'\n  --> orders.sql:2:18\n"));
    /// ```
    pub fn render(&self, origin: &str) -> String {
        self.to_diagnostic().render(origin)
    }
}

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, LexicalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn test_display_includes_offset() {
        let err = LexicalError::new(LexicalErrorKind::MissingHexDigits, "SELECT 0x", 9);
        assert_eq!(err.to_string(), "missing hex digits after `0x` at offset 9");
    }

    #[test]
    fn test_error_token() {
        let err = LexicalError::new(LexicalErrorKind::UnexpectedChar('\u{1}'), "a \u{1}", 2);
        let token = err.error_token();
        assert_eq!(token.token_type(), TokenType::Assist(Assist::Error));
        assert_eq!(token.literals(), "\u{1}");
        assert_eq!(token.end_offset(), 2);
    }

    #[test]
    fn test_error_token_at_end_of_input() {
        let err = LexicalError::new(LexicalErrorKind::UnterminatedComment, "/*", 2);
        assert_eq!(err.error_token().literals(), "");
    }

    #[test]
    fn test_diagnostic_uses_char_offsets() {
        // `'日本'` is 8 bytes but 4 characters
        let err = LexicalError::new(LexicalErrorKind::UnexpectedChar('\u{7}'), "'日本' \u{7}", 5);
        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diagnostic.span.start, 9);
        assert_eq!(diagnostic.span.line, 1);
        assert_eq!(diagnostic.span.column, 6);
        assert_eq!(diagnostic.snippets[0].column, 6);
    }

    #[test]
    fn test_codes_per_kind() {
        assert_eq!(LexicalErrorKind::UnterminatedChars('"').code().number, 1002);
        assert_eq!(LexicalErrorKind::UnterminatedComment.code().number, 1003);
        assert_eq!(LexicalErrorKind::UnterminatedHint.code().number, 1004);
        assert_eq!(LexicalErrorKind::MissingHexDigits.code().number, 1005);
    }

    #[test]
    fn test_render_points_at_column() {
        let err = LexicalError::new(LexicalErrorKind::UnterminatedChars('\''), "SELECT 'abc", 7);
        let text = err.render("<stdin>");
        assert!(text.contains("  --> <stdin>:1:8\n"));
        assert!(text.contains("  1 | SELECT 'abc\n    |        ^"));
        assert!(text.contains("= help: add the closing '"));
    }
}
