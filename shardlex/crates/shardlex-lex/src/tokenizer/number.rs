//! Numeric literal scanning.

use super::Tokenizer;
use crate::char_type::{is_digit, is_hex, is_identifier_char};
use crate::error::{LexicalErrorKind, Result};
use crate::token::{Literal, Token};

impl<'a> Tokenizer<'a> {
    /// Returns true if `0x` starts here. The prefix is lowercase only.
    #[inline]
    pub fn is_hex_decimal_begin(&self) -> bool {
        self.char_at(0) == '0' && self.char_at(1) == 'x'
    }

    /// Returns true if a decimal number starts here.
    ///
    /// A digit always does. A leading `.` needs a digit after it and a
    /// leading `-` needs a digit or `.` after it; both also need a preceding
    /// character that cannot end a name, so `t.5` keeps its dot and `a-1`
    /// keeps its minus.
    pub fn is_number_begin(&self) -> bool {
        let begins = match self.char_at(0) {
            ch if is_digit(ch) => return true,
            '.' => is_digit(self.char_at(1)),
            '-' => is_digit(self.char_at(1)) || self.char_at(1) == '.',
            _ => false,
        };
        begins && !self.follows_name()
    }

    fn follows_name(&self) -> bool {
        let previous = self.input.char_at(self.offset as isize - 1);
        is_identifier_char(previous) || previous == '`'
    }

    /// Scan `0x` followed by hex digits.
    ///
    /// # Errors
    ///
    /// [`LexicalErrorKind::MissingHexDigits`] at the position after the
    /// prefix when no hex digit follows it.
    pub fn scan_hex_decimal(&self) -> Result<Token> {
        let digits = self.run_length(2, is_hex);
        if digits == 0 {
            return Err(self.error(LexicalErrorKind::MissingHexDigits, self.offset + 2));
        }
        let end = self.offset + 2 + digits;
        Ok(Token::new(Literal::Hex, self.literals_to(end), end))
    }

    /// Scan an integer or float starting here.
    ///
    /// Accepts an optional `-`, integer digits, a fraction, an exponent and
    /// one of the suffixes `f`, `F`, `d`, `D`. The result is FLOAT when any
    /// of the last three is present. A `.` directly followed by another `.`
    /// is left for the range symbol, and an exponent or suffix that would
    /// run into a name is left alone.
    pub fn scan_number(&self) -> Token {
        let mut delta = 0;
        let mut is_float = false;
        if self.char_at(delta) == '-' {
            delta += 1;
        }
        delta += self.run_length(delta, is_digit);
        if self.char_at(delta) == '.' && self.char_at(delta + 1) != '.' {
            is_float = true;
            delta += 1;
            delta += self.run_length(delta, is_digit);
        }
        if matches!(self.char_at(delta), 'e' | 'E') {
            let sign = usize::from(matches!(self.char_at(delta + 1), '+' | '-'));
            if is_digit(self.char_at(delta + 1 + sign)) {
                is_float = true;
                delta += 1 + sign;
                delta += self.run_length(delta, is_digit);
            }
        }
        if matches!(self.char_at(delta), 'f' | 'F' | 'd' | 'D')
            && !is_identifier_char(self.char_at(delta + 1))
        {
            is_float = true;
            delta += 1;
        }
        let end = self.offset + delta;
        let literal = if is_float { Literal::Float } else { Literal::Int };
        Token::new(literal, self.literals_to(end), end)
    }
}
