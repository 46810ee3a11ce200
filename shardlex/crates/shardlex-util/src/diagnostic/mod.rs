//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics describe a problem found in statement text: a severity, a
//! message, an optional [`DiagnosticCode`], and source snippets to show
//! where it happened. A [`Handler`] collects them for a whole run.
//!
//! # Examples
//!
//! ```
//! use shardlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unterminated quoted literal")
//!         .code(DiagnosticCode::E_LEXER_UNTERMINATED_CHARS)
//!         .build(),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use shardlex_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the input unusable
    Error,
    /// Suspicious input that can still be processed
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(self) -> bool {
        self == Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Render the diagnostic for a terminal
    ///
    /// `origin` is the display name of the source (a path, `<stdin>`, ...)
    /// and is printed with the span's line and column when the span has a
    /// known position.
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
    /// use shardlex_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unexpected character '~'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .span(Span::point(7, 1, 8))
    ///     .snippet(SourceSnippet::point("SELECT ~", 1, 8))
    ///     .build();
    /// let text = diag.render("q.sql");
    /// assert!(text.starts_with("error[E1001]: unexpected character '~'\n  --> q.sql:1:8\n"));
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };
        if self.span.line > 0 {
            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                origin, self.span.line, self.span.column
            ));
        } else {
            out.push_str(&format!("  --> {}\n", origin));
        }
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for help in &self.helps {
            out.push_str(&format!("    = help: {}\n", help));
        }
        out
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// Collects diagnostics emitted during a run
///
/// Not thread-safe: parallel workers hand their results back to a single
/// thread which then emits into the handler.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
