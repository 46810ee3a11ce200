//! Diagnostic builder and source snippets.
//!
//! [`DiagnosticBuilder`] assembles a [`Diagnostic`] step by step;
//! [`SourceSnippet`] carries the offending source line and the column to
//! point at.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// A source line with one marked column
///
/// # Examples
///
/// ```
/// use shardlex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("SELECT 0x FROM t", 1, 10);
/// let text = snippet.format();
/// assert!(text.contains("  1 | SELECT 0x FROM t"));
/// assert!(text.ends_with("         ^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column under the caret (1-based)
    pub column: usize,
}

impl SourceSnippet {
    /// Create a snippet that points at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
        }
    }

    /// Format the snippet as a numbered source line plus a caret line
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let indent = self.column.saturating_sub(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(indent));
        result.push('^');
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use shardlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::error("unterminated block comment")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
///     .help("close the comment with `*/`")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add an actionable suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_format_point() {
        let snippet = SourceSnippet::point("SELECT ~~", 1, 8);
        assert_eq!(snippet.format(), "  1 | SELECT ~~\n    |        ^");
    }

    #[test]
    fn test_snippet_wide_line_number() {
        let snippet = SourceSnippet::point("WHERE a = 'x", 1200, 11);
        assert_eq!(
            snippet.format(),
            "1200 | WHERE a = 'x\n     |           ^"
        );
    }

    #[test]
    fn test_snippet_column_zero_marks_first() {
        let snippet = SourceSnippet::point("x", 1, 0);
        assert!(snippet.format().ends_with("| ^"));
    }

    #[test]
    fn test_builder_fluent() {
        let snippet = SourceSnippet::point("SELECT \u{1}", 1, 8);
        let diag = DiagnosticBuilder::error("unexpected character")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::point(7, 1, 8))
            .help("remove the character")
            .snippet(snippet.clone())
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.span.start, 7);
        assert_eq!(diag.helps.len(), 1);
        assert_eq!(diag.snippets, vec![snippet]);
    }

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("unterminated literal").build();
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.helps.is_empty());
        assert!(diag.snippets.is_empty());
    }
}
