//! Span module - Source location tracking.
//!
//! This module provides types for representing locations inside SQL
//! statement text: byte ranges with their line/column, and the file (or
//! statement source) they belong to.
//!
//! # Examples
//!
//! ```
//! use shardlex_util::span::{FileId, Span};
//!
//! // `FROM` in "SELECT * FROM t"
//! let span = Span::new(9, 13, 1, 10);
//! assert_eq!(span.end - span.start, 4);
//!
//! let span = span.with_file_id(FileId(2));
//! assert_eq!(span.file_id, FileId(2));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source registered in a [`SourceMap`]
///
/// FileIds are assigned sequentially as sources are added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FileId(pub usize);

/// Source location span
///
/// A `Span` covers the byte range `start..end` and remembers the 1-based
/// line and column (in characters) where it starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for diagnostics without a location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId(0),
    };

    /// Create a new span in the default file
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::Span;
    ///
    /// let span = Span::new(0, 6, 1, 1);
    /// assert_eq!(span.start, 0);
    /// assert_eq!(span.end, 6);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::default(),
        }
    }

    /// Create a zero-width span at a byte offset
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Attach the span to a file
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}
