//! Edge case tests for shardlex-lex

use crate::{
    Assist, DialectKind, Keyword, Lexer, LexicalErrorKind, Literal, Symbol, Token, TokenType,
};

fn lex_all(sql: &str) -> Vec<Token> {
    lex_dialect(sql, DialectKind::Default)
}

fn lex_dialect(sql: &str, dialect: DialectKind) -> Vec<Token> {
    Lexer::for_dialect(sql, dialect).tokenize().unwrap()
}

fn error_at(sql: &str, dialect: DialectKind) -> (LexicalErrorKind, usize) {
    let err = Lexer::for_dialect(sql, dialect).tokenize().unwrap_err();
    (err.kind(), err.offset())
}

// ==================== BOUNDARIES ====================

#[test]
fn test_edge_whitespace_only() {
    let tokens = lex_all(" \t\r\n ");
    assert_eq!(tokens, vec![Token::new(Assist::End, "", 5)]);
}

#[test]
fn test_edge_comment_only() {
    let tokens = lex_all("-- nothing here");
    assert_eq!(tokens, vec![Token::new(Assist::End, "", 15)]);
}

#[test]
fn test_edge_single_char_identifier() {
    assert_eq!(lex_all("x")[0], Token::new(Literal::Identifier, "x", 1));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex_all(&format!("SELECT {name} FROM t"));
    assert_eq!(tokens[1].literals(), name);
    assert_eq!(tokens[1].end_offset(), 10_007);
}

#[test]
fn test_edge_keyword_prefix_is_identifier() {
    let tokens = lex_all("selected fromage");
    assert_eq!(tokens[0].token_type(), TokenType::Literal(Literal::Identifier));
    assert_eq!(tokens[1].token_type(), TokenType::Literal(Literal::Identifier));
}

#[test]
fn test_edge_identifier_with_dollar_and_digits() {
    let tokens = lex_all("$tmp t_order_0 _x9");
    assert_eq!(tokens[0].literals(), "$tmp");
    assert_eq!(tokens[1].literals(), "t_order_0");
    assert_eq!(tokens[2].literals(), "_x9");
}

// ==================== NUMBERS ====================

#[test]
fn test_edge_number_then_identifier() {
    let tokens = lex_all("1a");
    assert_eq!(tokens[0], Token::new(Literal::Int, "1", 1));
    assert_eq!(tokens[1], Token::new(Literal::Identifier, "a", 2));
}

#[test]
fn test_edge_subtraction_of_literals() {
    let types: Vec<_> = lex_all("1-1").iter().map(Token::token_type).collect();
    let expected: Vec<TokenType> = vec![
        Literal::Int.into(),
        Symbol::Sub.into(),
        Literal::Int.into(),
        Assist::End.into(),
    ];
    assert_eq!(types, expected);
}

#[test]
fn test_edge_backtick_then_minus() {
    let tokens = lex_dialect("`a`-1", DialectKind::MySql);
    assert_eq!(tokens[1].token_type(), TokenType::Symbol(Symbol::Sub));
}

#[test]
fn test_edge_double_minus_is_comment() {
    let tokens = lex_all("a --1");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_edge_float_forms() {
    let tokens = lex_all("1.5e3 .5 1. 2E+2 7d");
    for token in &tokens[..5] {
        assert_eq!(token.token_type(), TokenType::Literal(Literal::Float), "{token}");
    }
}

#[test]
fn test_edge_hex_upper_prefix_is_not_hex() {
    let tokens = lex_all("0X1F");
    assert_eq!(tokens[0], Token::new(Literal::Int, "0", 1));
    assert_eq!(tokens[1], Token::new(Literal::Identifier, "X1F", 4));
}

#[test]
fn test_edge_hex_digits_either_case() {
    assert_eq!(lex_all("0xdeadBEEF")[0].literals(), "0xdeadBEEF");
}

#[test]
fn test_edge_hex_without_digits() {
    assert_eq!(
        error_at("SELECT 0x", DialectKind::Default),
        (LexicalErrorKind::MissingHexDigits, 9)
    );
}

// ==================== STRINGS ====================

#[test]
fn test_edge_empty_string() {
    assert_eq!(lex_all("''")[0], Token::new(Literal::Chars, "", 2));
}

#[test]
fn test_edge_string_spans_lines() {
    let tokens = lex_all("'a\nb'");
    assert_eq!(tokens[0], Token::new(Literal::Chars, "a\nb", 5));
}

#[test]
fn test_edge_double_quoted_string() {
    let tokens = lex_all(r#"WHERE "col" = 1"#);
    assert_eq!(tokens[1], Token::new(Literal::Chars, "col", 11));
}

#[test]
fn test_edge_string_with_comment_markers() {
    let tokens = lex_all("'-- not /* a comment'");
    assert_eq!(tokens[0].literals(), "-- not /* a comment");
}

#[test]
fn test_edge_unterminated_strings() {
    assert_eq!(
        error_at("SELECT 'abc", DialectKind::Default),
        (LexicalErrorKind::UnterminatedChars('\''), 7)
    );
    assert_eq!(
        error_at(r#"SELECT "abc"#, DialectKind::Default),
        (LexicalErrorKind::UnterminatedChars('"'), 7)
    );
    assert_eq!(
        error_at("SELECT `abc", DialectKind::MySql),
        (LexicalErrorKind::UnterminatedChars('`'), 7)
    );
    assert_eq!(
        error_at("SELECT N'abc", DialectKind::SqlServer),
        (LexicalErrorKind::UnterminatedChars('\''), 8)
    );
}

// ==================== COMMENTS ====================

#[test]
fn test_edge_unterminated_comment() {
    assert_eq!(
        error_at("SELECT 1 /* open", DialectKind::Default),
        (LexicalErrorKind::UnterminatedComment, 9)
    );
}

#[test]
fn test_edge_adjacent_comments() {
    let tokens = lex_all("/*a*//*b*/-- c\n// d\nSELECT");
    assert_eq!(tokens[0].token_type(), TokenType::Keyword(Keyword::Select));
}

#[test]
fn test_edge_hint_is_a_comment_elsewhere() {
    let tokens = lex_dialect("/*+ FULL(t) */ SELECT", DialectKind::MySql);
    assert_eq!(tokens[0].token_type(), TokenType::Keyword(Keyword::Select));
}

#[test]
fn test_edge_comment_after_hint() {
    let tokens = lex_dialect("/*! a */ /* b */ -- c\n SELECT", DialectKind::MySql);
    assert_eq!(tokens[0].token_type(), TokenType::Keyword(Keyword::Select));
}

#[test]
fn test_edge_division_is_not_comment() {
    let types: Vec<_> = lex_all("a / b").iter().map(Token::token_type).collect();
    assert_eq!(types[1], TokenType::Symbol(Symbol::Slash));
}

// ==================== SYMBOLS ====================

#[test]
fn test_edge_symbol_run_splits() {
    let texts: Vec<_> = lex_all("a<>b>=c!=d")
        .iter()
        .map(|token| token.literals().to_string())
        .collect();
    assert_eq!(texts, ["a", "<>", "b", ">=", "c", "!=", "d", ""]);
}

#[test]
fn test_edge_at_in_default_dialect() {
    assert_eq!(error_at("@", DialectKind::Default), (LexicalErrorKind::UnexpectedChar('@'), 0));
}

#[test]
fn test_edge_non_ascii_letter() {
    assert_eq!(
        error_at("SELECT é", DialectKind::Default),
        (LexicalErrorKind::UnexpectedChar('é'), 7)
    );
}

#[test]
fn test_edge_backslash() {
    assert_eq!(
        error_at("a \\ b", DialectKind::Default),
        (LexicalErrorKind::UnexpectedChar('\\'), 2)
    );
}
