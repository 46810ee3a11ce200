//! Source map for statement text and line/column lookup.
//!
//! A [`SourceFile`] is one piece of SQL text (a statement file, or an inline
//! statement given on the command line). Line starts are computed once so
//! that turning an offset into a position is a binary search.

use std::sync::Arc;

use super::FileId;
use crate::diagnostic::SourceSnippet;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use shardlex_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "orders.sql", "SELECT * FROM t_order");
/// assert_eq!(file.name(), "orders.sql");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    /// Byte offsets where each line begins
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or display name (`<stdin>`, `<inline>`)
    /// * `content` - Statement text
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(
                content
                    .char_indices()
                    .filter(|&(_, ch)| ch == '\n')
                    .map(|(i, _)| i + 1),
            )
            .collect::<Vec<_>>()
            .into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "q.sql", "SELECT 1;\nSELECT 2;");
    /// assert_eq!(file.line_start(0), Some(0));
    /// assert_eq!(file.line_start(1), Some(10));
    /// assert_eq!(file.line_start(2), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Both are 1-indexed. The column counts characters, not bytes, so
    /// that carets line up under multi-byte text. Offsets past the end of
    /// the content are clamped to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "q.sql", "SELECT 'é', x");
    /// // `x` sits at byte 13 but is the 13th character
    /// assert_eq!(file.offset_to_line_col(13), (1, 13));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = self.floor_char_boundary(offset);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let col = self.content[line_start..offset].chars().count() + 1;
        (line + 1, col)
    }

    /// Convert a character offset into a byte offset
    ///
    /// Offsets past the last character map to the content length.
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "q.sql", "'日本' x");
    /// assert_eq!(file.char_to_byte(5), 9);
    /// assert_eq!(file.char_to_byte(100), 10);
    /// ```
    pub fn char_to_byte(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "q.sql", "SELECT 1;\r\nSELECT 2;");
    /// assert_eq!(file.line_at(1), Some("SELECT 1;"));
    /// assert_eq!(file.line_at(2), Some("SELECT 2;"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Build a one-caret snippet pointing at a byte offset
    ///
    /// Used for lexical errors, which always describe a single position.
    ///
    /// # Examples
    ///
    /// ```
    /// use shardlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "q.sql", "SELECT *\nFROM t WHERE a = \u{1}");
    /// let snippet = file.point_snippet(26);
    /// assert_eq!(snippet.line_number, 2);
    /// assert_eq!(snippet.column, 18);
    /// ```
    pub fn point_snippet(&self, offset: usize) -> SourceSnippet {
        let (line, col) = self.offset_to_line_col(offset);
        let text = self.line_at(line).unwrap_or_default();
        SourceSnippet::point(text, line, col)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A set of named statement sources
///
/// # Examples
///
/// ```
/// use shardlex_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("orders.sql", "SELECT * FROM t_order");
/// assert_eq!(map.get(id).map(|f| f.name().to_string()), Some("orders.sql".into()));
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Register a source and return its [`FileId`]
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let file = SourceFile::new(self.files.len(), name, content);
        let id = file.id();
        self.files.push(Arc::new(file));
        id
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }
}
