//! Keyword and symbol lookup tables.
//!
//! A [`Dictionary`] is built once per dialect and then only read, so one
//! instance is shared through an `Arc` by every lexer of that dialect,
//! across threads.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use static_assertions::assert_impl_all;
use tracing::debug;

use crate::keyword::Keyword;
use crate::token::{Symbol, TokenType};

/// Immutable keyword and symbol tables of one dialect.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{Dictionary, Keyword, Literal, TokenType};
///
/// let dictionary = Dictionary::new([Keyword::Select, Keyword::From]);
/// assert_eq!(
///     dictionary.find_token_type("select", Literal::Identifier),
///     TokenType::Keyword(Keyword::Select),
/// );
/// assert_eq!(
///     dictionary.find_token_type("t_order", Literal::Identifier),
///     TokenType::Literal(Literal::Identifier),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Upper-case keyword text, in declaration order
    keywords: IndexMap<&'static str, Keyword, FxBuildHasher>,
    symbols: FxHashMap<&'static str, Symbol>,
}

assert_impl_all!(Dictionary: Send, Sync);

impl Dictionary {
    /// Build a dictionary from reserved words; the symbol table is fixed.
    ///
    /// Repeated keywords are kept once, at their first position.
    pub fn new(keywords: impl IntoIterator<Item = Keyword>) -> Self {
        let keywords: IndexMap<_, _, FxBuildHasher> = keywords
            .into_iter()
            .map(|keyword| (keyword.as_str(), keyword))
            .collect();
        let symbols = Symbol::ALL
            .iter()
            .map(|&symbol| (symbol.literals(), symbol))
            .collect();
        debug!(keywords = keywords.len(), "built dictionary");
        Self { keywords, symbols }
    }

    /// Classify `text` as a keyword, or return `fallback`.
    ///
    /// Matching is exact but ignores ASCII case.
    pub fn find_token_type(&self, text: &str, fallback: impl Into<TokenType>) -> TokenType {
        self.find_keyword(text)
            .map_or_else(|| fallback.into(), TokenType::Keyword)
    }

    /// Keyword for `text`, ignoring ASCII case.
    pub fn find_keyword(&self, text: &str) -> Option<Keyword> {
        self.keywords.get(text.to_ascii_uppercase().as_str()).copied()
    }

    /// Symbol whose text is exactly `text`.
    ///
    /// Only exact matches are returned; choosing the longest candidate is
    /// up to the caller.
    pub fn find_symbol(&self, text: &str) -> Option<Symbol> {
        self.symbols.get(text).copied()
    }

    /// Reserved words in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.keywords.values().copied()
    }

    /// Number of reserved words.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{DEFAULT_KEYWORDS, MYSQL_KEYWORDS};
    use crate::token::Literal;

    fn mysql() -> Dictionary {
        Dictionary::new(DEFAULT_KEYWORDS.iter().chain(MYSQL_KEYWORDS).copied())
    }

    #[test]
    fn test_keyword_lookup_ignores_case() {
        let dictionary = mysql();
        for text in ["limit", "LIMIT", "LiMiT"] {
            assert_eq!(
                dictionary.find_token_type(text, Literal::Identifier),
                TokenType::Keyword(Keyword::Limit)
            );
        }
    }

    #[test]
    fn test_unreserved_word_falls_back() {
        let dictionary = Dictionary::new(DEFAULT_KEYWORDS.iter().copied());
        assert_eq!(
            dictionary.find_token_type("LIMIT", Literal::Identifier),
            TokenType::Literal(Literal::Identifier)
        );
        assert_eq!(
            dictionary.find_token_type("id", Literal::Variable),
            TokenType::Literal(Literal::Variable)
        );
    }

    #[test]
    fn test_keyword_match_is_exact() {
        let dictionary = mysql();
        assert_eq!(dictionary.find_keyword("SELECTS"), None);
        assert_eq!(dictionary.find_keyword("SELEC"), None);
        assert_eq!(dictionary.find_keyword(""), None);
    }

    #[test]
    fn test_find_symbol_exact() {
        let dictionary = Dictionary::new([Keyword::Select]);
        assert_eq!(dictionary.find_symbol("<=>"), Some(Symbol::LtEqGt));
        assert_eq!(dictionary.find_symbol("::"), Some(Symbol::DoubleColon));
        assert_eq!(dictionary.find_symbol("=<"), None);
    }

    #[test]
    fn test_keywords_keep_declaration_order() {
        let dictionary = Dictionary::new([Keyword::From, Keyword::Select, Keyword::From]);
        let keywords: Vec<_> = dictionary.keywords().collect();
        assert_eq!(keywords, vec![Keyword::From, Keyword::Select]);
        assert_eq!(dictionary.keyword_count(), 2);
    }
}
