//! shardlex-lex - SQL lexical analysis for sharding middleware
//!
//! This crate turns one SQL statement into a stream of classified tokens
//! for a downstream parser that rewrites and routes queries across shards.
//! One [`Lexer`] type serves every dialect; dialects differ only by their
//! [`Dictionary`] of reserved words and their [`Syntax`] capability set.
//!
//! # Example Usage
//!
//! ```
//! use shardlex_lex::{DialectKind, Keyword, Lexer, Literal, TokenType};
//!
//! let mut lexer = Lexer::for_dialect("SELECT * FROM t_order WHERE id = -1", DialectKind::MySql);
//!
//! // Pull tokens one at a time
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.token_type(), TokenType::Keyword(Keyword::Select));
//!
//! // Or drain the rest, END included
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens[6].token_type(), TokenType::Literal(Literal::Int));
//! assert_eq!(tokens[6].literals(), "-1");
//! assert!(tokens[7].token_type().is_end());
//! ```
//!
//! # Module Structure
//!
//! - [`char_type`] - Character classification and the end-of-input sentinel
//! - [`source`] - Character-indexed statement text
//! - [`keyword`] - Reserved words and per-dialect keyword sets
//! - [`token`] - Token value model
//! - [`dictionary`] - Keyword and symbol lookup tables
//! - [`dialect`] - Built-in dialects and optional syntaxes
//! - [`tokenizer`] - Offset-positioned scanning routines
//! - [`lexer`] - The stateful driver
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Classes
//!
//! - **Literals**: `INT` (`42`, `-7`), `FLOAT` (`1.5`, `.5`, `2e10`, `3f`),
//!   `HEX` (`0x1F`), `CHARS` (`'it''s'`), `IDENTIFIER` (`t_order`,
//!   `` `order` ``), `VARIABLE` (`@id`, `@@session.autocommit`)
//! - **Keywords**: reserved words of the active dialect, matched ignoring
//!   case
//! - **Symbols**: operators and punctuation, longest match first
//! - **Assist**: `END` at end of input, `ERROR` for unmatched input
//!
//! Offsets count characters, not bytes.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_type;
pub mod dialect;
pub mod dictionary;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod source;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use dialect::{DialectKind, Matcher, Syntax, UnknownDialect};
pub use dictionary::Dictionary;
pub use error::{LexicalError, LexicalErrorKind, Result};
pub use keyword::{Keyword, UnknownKeyword};
pub use lexer::Lexer;
pub use source::Source;
pub use token::{Assist, Literal, Symbol, Token, TokenType};
pub use tokenizer::Tokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect every token before END.
    fn lex_all(sql: &str, dialect: DialectKind) -> Vec<Token> {
        let mut tokens = Lexer::for_dialect(sql, dialect).tokenize().unwrap();
        assert!(tokens.pop().is_some_and(|token| token.token_type().is_end()));
        tokens
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::literals).collect()
    }

    #[test]
    fn test_insert_statement() {
        let sql = "INSERT INTO t_order (order_id, user_id, status) VALUES (?, ?, 'init')";
        let tokens = lex_all(sql, DialectKind::MySql);

        assert_eq!(tokens[0].token_type(), TokenType::Keyword(Keyword::Insert));
        assert_eq!(tokens[1].token_type(), TokenType::Keyword(Keyword::Into));
        assert_eq!(tokens[2].token_type(), TokenType::Literal(Literal::Identifier));
        assert_eq!(
            tokens
                .iter()
                .filter(|token| token.token_type() == TokenType::from(Symbol::Question))
                .count(),
            2
        );
        let last = &tokens[tokens.len() - 2];
        assert_eq!(last.token_type(), TokenType::Literal(Literal::Chars));
        assert_eq!(last.literals(), "init");
    }

    #[test]
    fn test_select_with_join_and_limit() {
        let sql = "SELECT o.order_id, i.item_id FROM t_order o JOIN t_order_item i \
                   ON o.order_id = i.order_id WHERE o.user_id IN (1, 2) ORDER BY o.order_id LIMIT 10";
        let tokens = lex_all(sql, DialectKind::MySql);

        assert!(tokens.iter().any(|token| token.token_type() == TokenType::from(Keyword::Join)));
        assert!(tokens.iter().any(|token| token.token_type() == TokenType::from(Keyword::Limit)));
        assert!(tokens.iter().any(|token| token.token_type() == TokenType::from(Symbol::Dot)));
        assert_eq!(texts(&tokens[1..4]), ["o", ".", "order_id"]);
    }

    #[test]
    fn test_limit_is_an_identifier_in_default_dialect() {
        let tokens = lex_all("SELECT limit FROM t", DialectKind::Default);
        assert_eq!(tokens[1].token_type(), TokenType::Literal(Literal::Identifier));
    }

    #[test]
    fn test_keyword_case_is_preserved() {
        let tokens = lex_all("sElEcT 1", DialectKind::Default);
        assert_eq!(tokens[0].token_type(), TokenType::Keyword(Keyword::Select));
        assert_eq!(tokens[0].literals(), "sElEcT");
    }

    #[test]
    fn test_oracle_hint_and_rownum() {
        let sql = "SELECT /*+ INDEX(t_order idx_user) */ * FROM t_order WHERE ROWNUM <= 10";
        let tokens = lex_all(sql, DialectKind::Oracle);

        assert_eq!(tokens[1].token_type(), TokenType::Symbol(Symbol::Star));
        assert!(tokens.iter().any(|token| token.token_type() == TokenType::from(Keyword::Rownum)));
        assert!(tokens.iter().any(|token| token.token_type() == TokenType::from(Symbol::LtEq)));
    }

    #[test]
    fn test_postgresql_cast_and_range() {
        let tokens = lex_all("SELECT a::int, b[1..5] FROM t", DialectKind::PostgreSql);
        assert_eq!(texts(&tokens[1..4]), ["a", "::", "int"]);
        assert_eq!(texts(&tokens[5..11]), ["b", "[", "1", "..", "5", "]"]);
    }

    #[test]
    fn test_sqlserver_variables_and_nchars() {
        let sql = "SELECT TOP 10 * FROM t WHERE name = N'x' AND id = @id";
        let tokens = lex_all(sql, DialectKind::SqlServer);
        assert_eq!(tokens[1].token_type(), TokenType::Keyword(Keyword::Top));
        let nchars = tokens.iter().find(|token| token.literals() == "x").unwrap();
        assert_eq!(nchars.token_type(), TokenType::Literal(Literal::Chars));
        assert_eq!(tokens.last().map(Token::token_type), Some(TokenType::from(Literal::Variable)));
    }

    #[test]
    fn test_end_offsets_strictly_increase() {
        let sql = "UPDATE t SET a = a - 1, b = 'x''y' /* c */ WHERE id <=> 0x0A";
        let mut lexer = Lexer::for_dialect(sql, DialectKind::MySql);
        let mut previous = 0;
        loop {
            let token = lexer.next_token().unwrap();
            if token.token_type().is_end() {
                assert_eq!(token.end_offset(), sql.chars().count());
                break;
            }
            assert!(token.end_offset() > previous);
            previous = token.end_offset();
        }
    }

    #[test]
    fn test_error_renders_pointer() {
        let err = Lexer::for_dialect("SELECT * FROM t WHERE a = 'x", DialectKind::Default)
            .tokenize()
            .unwrap_err();
        assert_eq!(err.offset(), 26);
        assert_eq!(err.error_token().literals(), "'");
        assert!(err.render("query.sql").contains("--> query.sql:1:27"));
    }

    #[test]
    fn test_dictionary_is_shared_across_threads() {
        let dictionary = DialectKind::MySql.dictionary();
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let dictionary = std::sync::Arc::clone(&dictionary);
                std::thread::spawn(move || {
                    let sql = format!("SELECT {n} FROM t_order_{n}");
                    Lexer::new(sql, dictionary, DialectKind::MySql.syntax())
                        .tokenize()
                        .map(|tokens| tokens.len())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(5));
        }
    }
}
