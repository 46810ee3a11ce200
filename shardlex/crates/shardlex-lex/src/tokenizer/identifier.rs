//! Identifier and keyword scanning.

use super::Tokenizer;
use crate::char_type::is_identifier_char;
use crate::error::{LexicalErrorKind, Result};
use crate::token::{Literal, Token};

impl<'a> Tokenizer<'a> {
    /// Scan an identifier or keyword.
    ///
    /// A backtick-quoted name is always an IDENTIFIER and keeps its quotes;
    /// a doubled backtick inside it does not close it. Any other run of
    /// identifier characters is looked up in the dictionary.
    ///
    /// # Errors
    ///
    /// [`LexicalErrorKind::UnterminatedChars`] when a backtick name is not
    /// closed.
    pub fn scan_identifier(&self) -> Result<Token> {
        if self.char_at(0) == '`' {
            let end = self.quoted_end('`')?;
            return Ok(Token::new(Literal::Identifier, self.literals_to(end), end));
        }
        let end = self.offset + self.run_length(0, is_identifier_char);
        let literals = self.literals_to(end);
        let token_type = self.dictionary.find_token_type(&literals, Literal::Identifier);
        Ok(Token::new(token_type, literals, end))
    }

    /// Offset just past the closing `quote` of a literal opened here.
    pub(crate) fn quoted_end(&self, quote: char) -> Result<usize> {
        let mut position = self.offset + 1;
        loop {
            if self.is_end(position) {
                return Err(self.error(LexicalErrorKind::UnterminatedChars(quote), self.offset));
            }
            if self.input.char_at(position as isize) == quote {
                if self.input.char_at(position as isize + 1) != quote {
                    return Ok(position + 1);
                }
                position += 1;
            }
            position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::keyword::{Keyword, DEFAULT_KEYWORDS};
    use crate::token::{Literal, TokenType};
    use crate::{Dictionary, LexicalErrorKind, Source, Token, Tokenizer};

    fn scan(input: &str) -> crate::Result<Token> {
        let source = Source::new(input);
        let dictionary = Dictionary::new(DEFAULT_KEYWORDS.iter().copied());
        Tokenizer::new(&source, &dictionary, 0).scan_identifier()
    }

    #[test]
    fn test_keyword_keeps_source_case() {
        let token = scan("select * from t").unwrap();
        assert_eq!(token.token_type(), TokenType::Keyword(Keyword::Select));
        assert_eq!(token.literals(), "select");
        assert_eq!(token.end_offset(), 6);
    }

    #[test]
    fn test_identifier_chars() {
        let token = scan("t_order$2.id").unwrap();
        assert_eq!(token.token_type(), TokenType::Literal(Literal::Identifier));
        assert_eq!(token.literals(), "t_order$2");
        assert_eq!(token.end_offset(), 9);
    }

    #[test]
    fn test_backtick_identifier_is_never_a_keyword() {
        let token = scan("`select` x").unwrap();
        assert_eq!(token.token_type(), TokenType::Literal(Literal::Identifier));
        assert_eq!(token.literals(), "`select`");
        assert_eq!(token.end_offset(), 8);
    }

    #[test]
    fn test_backtick_with_doubled_backtick() {
        let token = scan("`a``b`.c").unwrap();
        assert_eq!(token.literals(), "`a``b`");
        assert_eq!(token.end_offset(), 6);
    }

    #[test]
    fn test_unterminated_backtick() {
        let err = scan("`t_order").unwrap_err();
        assert_eq!(err.kind(), LexicalErrorKind::UnterminatedChars('`'));
        assert_eq!(err.offset(), 0);
    }
}
