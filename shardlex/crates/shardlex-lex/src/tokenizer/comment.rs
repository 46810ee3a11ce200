//! Whitespace, comment and hint skipping.

use tracing::trace;

use super::Tokenizer;
use crate::char_type::is_whitespace;
use crate::error::{LexicalErrorKind, Result};

impl<'a> Tokenizer<'a> {
    /// Offset after a maximal run of whitespace.
    pub fn skip_whitespace(&self) -> usize {
        self.offset + self.run_length(0, is_whitespace)
    }

    /// Offset after the comment starting here.
    ///
    /// `/* ... */` ends after the closing marker. Line comments (`//`, `--`,
    /// `#`) end before the line feed, or at end of input.
    ///
    /// # Errors
    ///
    /// [`LexicalErrorKind::UnterminatedComment`] at the comment start when a
    /// block comment is never closed.
    pub fn skip_comment(&self) -> Result<usize> {
        let end = if self.char_at(0) == '/' && self.char_at(1) == '*' {
            self.skip_block(LexicalErrorKind::UnterminatedComment)?
        } else {
            self.skip_line()
        };
        trace!(start = self.offset, end, "skipped comment");
        Ok(end)
    }

    /// Offset after the hint block starting here.
    ///
    /// # Errors
    ///
    /// [`LexicalErrorKind::UnterminatedHint`] at the hint start when the
    /// block is never closed.
    pub fn skip_hint(&self) -> Result<usize> {
        let end = self.skip_block(LexicalErrorKind::UnterminatedHint)?;
        trace!(start = self.offset, end, "skipped hint");
        Ok(end)
    }

    fn skip_line(&self) -> usize {
        let mut position = self.offset;
        while !self.is_end(position) && self.input.char_at(position as isize) != '\n' {
            position += 1;
        }
        position
    }

    /// The opening `/*` is never reused as part of the closing `*/`.
    fn skip_block(&self, unterminated: LexicalErrorKind) -> Result<usize> {
        let mut position = self.offset + 2;
        loop {
            if self.is_end(position) {
                return Err(self.error(unterminated, self.offset));
            }
            if self.input.char_at(position as isize) == '*'
                && self.input.char_at(position as isize + 1) == '/'
            {
                return Ok(position + 2);
            }
            position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::keyword::DEFAULT_KEYWORDS;
    use crate::{Dictionary, LexicalErrorKind, Source, Tokenizer};

    fn skip_comment(input: &str, offset: usize) -> crate::Result<usize> {
        let source = Source::new(input);
        let dictionary = Dictionary::new(DEFAULT_KEYWORDS.iter().copied());
        Tokenizer::new(&source, &dictionary, offset).skip_comment()
    }

    #[test]
    fn test_skip_whitespace() {
        let source = Source::new(" \t\r\n\u{0B}\u{0C}\u{A0}x");
        let dictionary = Dictionary::new(DEFAULT_KEYWORDS.iter().copied());
        assert_eq!(Tokenizer::new(&source, &dictionary, 0).skip_whitespace(), 7);
        assert_eq!(Tokenizer::new(&source, &dictionary, 7).skip_whitespace(), 7);
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(skip_comment("/* c */ SELECT", 0), Ok(7));
        assert_eq!(skip_comment("/**/", 0), Ok(4));
        assert_eq!(skip_comment("/* a * b / c */x", 0), Ok(15));
    }

    #[test]
    fn test_block_comment_not_closed_by_its_opening() {
        let err = skip_comment("/*/", 0).unwrap_err();
        assert_eq!(err.kind(), LexicalErrorKind::UnterminatedComment);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_unterminated_block_reports_start() {
        let err = skip_comment("SELECT /* never closed", 7).unwrap_err();
        assert_eq!(err.kind(), LexicalErrorKind::UnterminatedComment);
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_line_comments_stop_before_newline() {
        assert_eq!(skip_comment("-- x\nSELECT", 0), Ok(4));
        assert_eq!(skip_comment("// x\r\nSELECT", 0), Ok(5));
        assert_eq!(skip_comment("# x\nSELECT", 0), Ok(3));
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        assert_eq!(skip_comment("SELECT 1 -- trailing", 9), Ok(20));
    }

    #[test]
    fn test_skip_hint() {
        let source = Source::new("/*+ INDEX(t idx) */ SELECT");
        let dictionary = Dictionary::new(DEFAULT_KEYWORDS.iter().copied());
        assert_eq!(Tokenizer::new(&source, &dictionary, 0).skip_hint(), Ok(19));

        let source = Source::new("/*! STRAIGHT_JOIN");
        let err = Tokenizer::new(&source, &dictionary, 0).skip_hint().unwrap_err();
        assert_eq!(err.kind(), LexicalErrorKind::UnterminatedHint);
        assert_eq!(err.offset(), 0);
    }
}
