//! Session and bind variable scanning.

use super::Tokenizer;
use crate::char_type::is_identifier_char;
use crate::token::{Literal, Token};

impl<'a> Tokenizer<'a> {
    /// Scan `@name` or `@@scope.name`.
    ///
    /// The name may contain `.` so that `@@session.autocommit` is one token.
    pub fn scan_variable(&self) -> Token {
        let mut delta = 1;
        if self.char_at(delta) == '@' {
            delta += 1;
        }
        delta += self.run_length(delta, |ch| is_identifier_char(ch) || ch == '.');
        let end = self.offset + delta;
        Token::new(Literal::Variable, self.literals_to(end), end)
    }
}
