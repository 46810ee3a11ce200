//! The token-at-a-time SQL lexer.
//!
//! A [`Lexer`] owns one statement and a shared dialect [`Dictionary`].
//! Each [`Lexer::next_token`] call skips whitespace, hints and comments,
//! picks one [`Tokenizer`] routine by a fixed priority, and moves the
//! cursor to the end of the produced token.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::char_type::{is_identifier_begin, is_symbol};
use crate::dialect::{DialectKind, Syntax};
use crate::dictionary::Dictionary;
use crate::error::{LexicalErrorKind, Result};
use crate::source::Source;
use crate::token::{Assist, Token};
use crate::tokenizer::Tokenizer;

/// Lexer over one SQL statement.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{DialectKind, Keyword, Lexer, Literal, TokenType};
///
/// let mut lexer = Lexer::for_dialect("SELECT id FROM t_order", DialectKind::MySql);
/// assert_eq!(lexer.next_token().unwrap().token_type(), TokenType::Keyword(Keyword::Select));
/// assert_eq!(lexer.next_token().unwrap().literals(), "id");
/// assert_eq!(lexer.offset(), 9);
///
/// let types: Vec<_> = lexer.map(|token| token.unwrap().token_type()).collect();
/// assert_eq!(types.len(), 3);
/// assert_eq!(types[1], TokenType::Literal(Literal::Identifier));
/// assert!(types[2].is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Source,
    dictionary: Arc<Dictionary>,
    syntax: Syntax,
    offset: usize,
    current_token: Option<Token>,
    /// Set once the iterator has yielded END or an error
    halted: bool,
}

impl Lexer {
    /// Create a lexer with an explicit dictionary and syntax.
    pub fn new(input: impl Into<Source>, dictionary: Arc<Dictionary>, syntax: Syntax) -> Self {
        Self {
            input: input.into(),
            dictionary,
            syntax,
            offset: 0,
            current_token: None,
            halted: false,
        }
    }

    /// Create a lexer using a built-in dialect.
    pub fn for_dialect(input: impl Into<Source>, dialect: DialectKind) -> Self {
        Self::new(input, dialect.dictionary(), dialect.syntax())
    }

    /// Scan the next token and make it current.
    ///
    /// Once END has been produced, further calls return it again without
    /// moving. A failed call leaves the lexer where it was, so calling
    /// again reports the same error.
    ///
    /// # Errors
    ///
    /// Returns a [`LexicalError`](crate::LexicalError) when no token rule
    /// matches, or when a string, comment or hint runs to end of input.
    pub fn next_token(&mut self) -> Result<&Token> {
        let token = match self.current_token.take() {
            Some(token) if token.token_type().is_end() => token,
            previous => match self.scan_next() {
                Ok(token) => token,
                Err(err) => {
                    debug!(offset = err.offset(), kind = %err.kind(), "lexical error");
                    self.current_token = previous;
                    return Err(err);
                },
            },
        };
        trace!(
            token_type = %token.token_type(),
            literals = token.literals(),
            end = token.end_offset(),
            "scanned token"
        );
        self.offset = token.end_offset();
        Ok(self.current_token.insert(token))
    }

    fn scan_next(&self) -> Result<Token> {
        let offset = self.skip_ignored()?;
        let tokenizer = self.tokenizer_at(offset);
        let current = self.input.char_at(offset as isize);

        if self.syntax.is_variable_begin(&self.input, offset) {
            return Ok(tokenizer.scan_variable());
        }
        if self.is_nchars_begin(offset) {
            return self.tokenizer_at(offset + 1).scan_chars();
        }
        if is_identifier_begin(current) {
            return tokenizer.scan_identifier();
        }
        if tokenizer.is_hex_decimal_begin() {
            return tokenizer.scan_hex_decimal();
        }
        if tokenizer.is_number_begin() {
            return Ok(tokenizer.scan_number());
        }
        if is_symbol(current) {
            let token = tokenizer.scan_symbol();
            if token.token_type().is_error() {
                return Err(tokenizer.error(LexicalErrorKind::UnexpectedChar(current), offset));
            }
            return Ok(token);
        }
        if current == '\'' || current == '"' {
            return tokenizer.scan_chars();
        }
        if self.is_end(offset) {
            return Ok(Token::new(Assist::End, "", offset));
        }
        Err(tokenizer.error(LexicalErrorKind::UnexpectedChar(current), offset))
    }

    /// Offset of the next significant character.
    fn skip_ignored(&self) -> Result<usize> {
        let mut offset = self.tokenizer_at(self.offset).skip_whitespace();
        while self.syntax.is_hint_begin(&self.input, offset) {
            offset = self.tokenizer_at(offset).skip_hint()?;
            offset = self.tokenizer_at(offset).skip_whitespace();
        }
        while self.is_comment_begin(offset) {
            offset = self.tokenizer_at(offset).skip_comment()?;
            offset = self.tokenizer_at(offset).skip_whitespace();
        }
        Ok(offset)
    }

    fn is_comment_begin(&self, offset: usize) -> bool {
        let position = offset as isize;
        let current = self.input.char_at(position);
        let next = self.input.char_at(position + 1);
        matches!((current, next), ('/', '/') | ('-', '-') | ('/', '*'))
            || (self.syntax.hash_comment && current == '#')
    }

    fn is_nchars_begin(&self, offset: usize) -> bool {
        let position = offset as isize;
        self.syntax.nchars
            && self.input.char_at(position) == 'N'
            && self.input.char_at(position + 1) == '\''
    }

    fn is_end(&self, offset: usize) -> bool {
        offset >= self.input.len()
    }

    fn tokenizer_at(&self, offset: usize) -> Tokenizer<'_> {
        Tokenizer::new(&self.input, &self.dictionary, offset)
    }

    /// Character `delta` positions from the cursor; [`EOI`](crate::char_type::EOI)
    /// outside the input, including before its start.
    #[inline]
    pub fn char_at(&self, delta: isize) -> char {
        self.input.char_at(self.offset as isize + delta)
    }

    /// The last token produced, if any.
    #[inline]
    pub fn current_token(&self) -> Option<&Token> {
        self.current_token.as_ref()
    }

    /// The statement text.
    #[inline]
    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// The statement as scanned, with character indexing.
    #[inline]
    pub fn source(&self) -> &Source {
        &self.input
    }

    /// Cursor position in characters; the end offset of the current token.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The dictionary shared with other lexers of this dialect.
    #[inline]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Optional syntaxes enabled for this lexer.
    #[inline]
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Scan the rest of the input, END token included.
    ///
    /// # Errors
    ///
    /// Stops at the first [`LexicalError`](crate::LexicalError).
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.token_type().is_end();
            tokens.push(token.clone());
            if done {
                return Ok(tokens);
            }
        }
    }
}

/// Yields every token up to and including END, or up to the first error.
impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let result = self.next_token().cloned();
        self.halted = result.as_ref().map_or(true, |token| token.token_type().is_end());
        Some(result)
    }
}
