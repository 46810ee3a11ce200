//! Operator and punctuation scanning.

use super::Tokenizer;
use crate::char_type::is_symbol;
use crate::token::{Assist, Token};

impl<'a> Tokenizer<'a> {
    /// Scan the longest symbol in the dictionary starting here.
    ///
    /// Takes the run of symbol characters and shortens it until the
    /// dictionary knows it, so `<=>` beats `<=` beats `<`. Returns an
    /// [`Assist::Error`] token holding the first character when no prefix
    /// is a symbol.
    pub fn scan_symbol(&self) -> Token {
        let run = self.run_length(0, is_symbol);
        (1..=run)
            .rev()
            .find_map(|length| {
                let end = self.offset + length;
                let literals = self.literals_to(end);
                self.dictionary
                    .find_symbol(&literals)
                    .map(|symbol| Token::new(symbol, literals, end))
            })
            .unwrap_or_else(|| {
                Token::new(Assist::Error, self.char_at(0).to_string(), self.offset)
            })
    }
}
