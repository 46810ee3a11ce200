//! Token value model.
//!
//! A [`Token`] is an immutable triple of classification, lexeme text and the
//! exclusive end offset of the lexeme in the input (in characters).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::keyword::Keyword;

/// Literal token classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Integer, optionally signed: `42`, `-7`
    Int,
    /// Decimal or scientific number: `1.5`, `.5`, `2e10`, `3f`
    Float,
    /// Hex literal: `0x1F`
    Hex,
    /// Quoted string, decoded: `'it''s'` has text `it's`
    Chars,
    /// Unreserved name or backtick-quoted name
    Identifier,
    /// Session or bind variable: `@id`, `@@session.autocommit`
    Variable,
}

/// Marker tokens that carry no source text of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Assist {
    /// End of input
    End,
    /// Input that matches no token rule
    Error,
}

macro_rules! symbols {
    ($($variant:ident => $text:literal,)*) => {
        /// Operators and punctuation.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Symbol {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Symbol {
            /// Every symbol in table order.
            pub const ALL: &'static [Symbol] = &[$(Symbol::$variant,)*];

            /// Source text of the symbol.
            pub const fn literals(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $text,)*
                }
            }

            /// Exact lookup by source text.
            pub fn from_literals(text: &str) -> Option<Symbol> {
                match text {
                    $($text => Some(Symbol::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

symbols! {
    LeftParen => "(",
    RightParen => ")",
    LeftBrace => "{",
    RightBrace => "}",
    LeftBracket => "[",
    RightBracket => "]",
    Semi => ";",
    Comma => ",",
    Dot => ".",
    DoubleDot => "..",
    Plus => "+",
    Sub => "-",
    Star => "*",
    Slash => "/",
    Question => "?",
    Eq => "=",
    Gt => ">",
    Lt => "<",
    Bang => "!",
    Tilde => "~",
    Caret => "^",
    Percent => "%",
    Colon => ":",
    DoubleColon => "::",
    ColonEq => ":=",
    LtEq => "<=",
    GtEq => ">=",
    LtEqGt => "<=>",
    LtGt => "<>",
    BangEq => "!=",
    BangGt => "!>",
    BangLt => "!<",
    Amp => "&",
    Bar => "|",
    DoubleAmp => "&&",
    DoubleBar => "||",
    DoubleLt => "<<",
    DoubleGt => ">>",
    DoubleEq => "==",
    Pound => "#",
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Literal value or name
    Literal(Literal),
    /// Reserved word of the active dialect
    Keyword(Keyword),
    /// Operator or punctuation
    Symbol(Symbol),
    /// End of input or failure marker
    Assist(Assist),
}

impl TokenType {
    /// Returns true for [`Assist::End`].
    #[inline]
    pub fn is_end(self) -> bool {
        self == TokenType::Assist(Assist::End)
    }

    /// Returns true for [`Assist::Error`].
    #[inline]
    pub fn is_error(self) -> bool {
        self == TokenType::Assist(Assist::Error)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Literal::Int => "INT",
            Literal::Float => "FLOAT",
            Literal::Hex => "HEX",
            Literal::Chars => "CHARS",
            Literal::Identifier => "IDENTIFIER",
            Literal::Variable => "VARIABLE",
        })
    }
}

impl fmt::Display for Assist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Assist::End => "END",
            Assist::Error => "ERROR",
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literals())
    }
}

/// Renders the token class: `INT`, `KEYWORD`, `SYMBOL`, `END`, ...
impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Literal(literal) => literal.fmt(f),
            TokenType::Keyword(_) => f.write_str("KEYWORD"),
            TokenType::Symbol(_) => f.write_str("SYMBOL"),
            TokenType::Assist(assist) => assist.fmt(f),
        }
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Literal> for TokenType {
    fn from(literal: Literal) -> Self {
        TokenType::Literal(literal)
    }
}

impl From<Keyword> for TokenType {
    fn from(keyword: Keyword) -> Self {
        TokenType::Keyword(keyword)
    }
}

impl From<Symbol> for TokenType {
    fn from(symbol: Symbol) -> Self {
        TokenType::Symbol(symbol)
    }
}

impl From<Assist> for TokenType {
    fn from(assist: Assist) -> Self {
        TokenType::Assist(assist)
    }
}

/// A classified lexeme.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{Literal, Token, TokenType};
///
/// let token = Token::new(Literal::Int, "42", 9);
/// assert_eq!(token.token_type(), TokenType::Literal(Literal::Int));
/// assert_eq!(token.literals(), "42");
/// assert_eq!(token.end_offset(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    token_type: TokenType,
    literals: String,
    end_offset: usize,
}

impl Token {
    /// Create a token.
    pub fn new(token_type: impl Into<TokenType>, literals: impl Into<String>, end_offset: usize) -> Self {
        Self {
            token_type: token_type.into(),
            literals: literals.into(),
            end_offset,
        }
    }

    /// The token classification.
    #[inline]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Lexeme text; decoded for quoted strings, empty for END.
    #[inline]
    pub fn literals(&self) -> &str {
        &self.literals
    }

    /// Exclusive end offset of the lexeme, in characters.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})@{}", self.token_type, self.literals, self.end_offset)
    }
}
