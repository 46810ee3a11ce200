//! Quoted string scanning.

use super::Tokenizer;
use crate::error::Result;
use crate::token::{Literal, Token};

impl<'a> Tokenizer<'a> {
    /// Scan a string opened by the quote at the tokenizer offset.
    ///
    /// The token text is the decoded content: the delimiters are dropped and
    /// each doubled quote becomes one. The end offset is one past the
    /// closing quote.
    ///
    /// # Errors
    ///
    /// [`LexicalErrorKind::UnterminatedChars`](crate::LexicalErrorKind::UnterminatedChars)
    /// at the opening quote when the input ends first.
    pub fn scan_chars(&self) -> Result<Token> {
        let quote = self.char_at(0);
        let end = self.quoted_end(quote)?;
        let body = self.input.slice(self.offset + 1, end - 1);
        let mut doubled = String::with_capacity(2);
        doubled.push(quote);
        doubled.push(quote);
        let literals = body.replace(&doubled, &quote.to_string());
        Ok(Token::new(Literal::Chars, literals, end))
    }
}
