//! Diagnostic codes for categorizing scanning problems.
//!
//! Codes are rendered as `{prefix}{number:04}`, e.g. `E1001`, so they can be
//! grepped for in tool output and documentation.
//!
//! # Examples
//!
//! ```
//! use shardlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix, "E");
//! assert_eq!(code.number, 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// - `E0xxx` - input problems (unreadable statement sources)
/// - `E1xxx` - lexical errors
/// - `W0xxx` - suspicious input
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E0001: Statement source could not be read
    pub const E_INPUT_UNREADABLE: Self = Self::new("E", 1);
    /// W0001: Statement source holds no tokens
    pub const W_INPUT_EMPTY: Self = Self::new("W", 1);

    /// E1001: Character that cannot begin any token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Quoted literal without closing quote
    pub const E_LEXER_UNTERMINATED_CHARS: Self = Self::new("E", 1002);
    /// E1003: Block comment without closing `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: Dialect hint without closing `*/`
    pub const E_LEXER_UNTERMINATED_HINT: Self = Self::new("E", 1004);
    /// E1005: `0x` prefix not followed by a hex digit
    pub const E_LEXER_MISSING_HEX_DIGITS: Self = Self::new("E", 1005);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
