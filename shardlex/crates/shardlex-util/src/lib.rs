//! shardlex-util - Diagnostics and Source Location Support
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by the shardlex scanning engine and its tooling.
//! Nothing in here knows about SQL: it only knows how to locate a position in
//! a piece of text and how to describe a problem found there.
//!
//! - [`span`] - byte spans, source files with precomputed line starts, and a
//!   map of named sources (one per statement file checked by the tooling).
//! - [`diagnostic`] - severity levels, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`], caret snippets and the collecting [`Handler`].
//!
//! # Example
//!
//! ```
//! use shardlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile};
//!
//! let file = SourceFile::new(0, "stmt.sql", "SELECT \u{1}");
//! let diagnostic = DiagnosticBuilder::error("unexpected character")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .snippet(file.point_snippet(7))
//!     .build();
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(diagnostic);
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::{FileId, SourceFile, SourceMap, Span};
