//! SQL dialects and their optional syntaxes.
//!
//! One [`Lexer`](crate::Lexer) type serves every dialect. What differs is
//! a [`Syntax`] value (which optional lexical forms are active) and the
//! shared [`Dictionary`] of reserved words.
//!
//! # Examples
//!
//! ```
//! use shardlex_lex::DialectKind;
//!
//! let mysql: DialectKind = "mysql".parse().unwrap();
//! assert!(mysql.syntax().hash_comment);
//! assert!(mysql.dictionary().find_keyword("limit").is_some());
//! assert!(DialectKind::Default.dictionary().find_keyword("limit").is_none());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::keyword::{
    DEFAULT_KEYWORDS, MYSQL_KEYWORDS, ORACLE_KEYWORDS, POSTGRESQL_KEYWORDS, SQLSERVER_KEYWORDS,
};
use crate::source::Source;

/// Tests whether an optional syntax begins at an offset of the input.
pub type Matcher = fn(&Source, usize) -> bool;

/// Optional lexical forms enabled for a dialect.
///
/// The default value enables none of them.
///
/// # Examples
///
/// ```
/// use shardlex_lex::{Source, Syntax};
///
/// fn dollar_variable(source: &Source, offset: usize) -> bool {
///     source.char_at(offset as isize) == '$' && source.char_at(offset as isize + 1) == '{'
/// }
///
/// let syntax = Syntax::default().with_variable(dollar_variable);
/// assert!(syntax.is_variable_begin(&Source::new("${id}"), 0));
/// assert!(!syntax.is_hint_begin(&Source::new("/*! hint */"), 0));
/// ```
#[derive(Clone, Copy, Default)]
pub struct Syntax {
    /// Start of a vendor hint region (`/*! ... */`, `/*+ ... */`)
    pub hint: Option<Matcher>,
    /// Start of a session or bind variable
    pub variable: Option<Matcher>,
    /// `N'...'` national character literals
    pub nchars: bool,
    /// `#` line comments
    pub hash_comment: bool,
}

impl Syntax {
    /// Enable hint regions recognised by `matcher`.
    pub fn with_hint(mut self, matcher: Matcher) -> Self {
        self.hint = Some(matcher);
        self
    }

    /// Enable variables recognised by `matcher`.
    pub fn with_variable(mut self, matcher: Matcher) -> Self {
        self.variable = Some(matcher);
        self
    }

    /// Enable `N'...'` literals.
    pub fn with_nchars(mut self) -> Self {
        self.nchars = true;
        self
    }

    /// Enable `#` line comments.
    pub fn with_hash_comment(mut self) -> Self {
        self.hash_comment = true;
        self
    }

    /// Returns true if a hint region starts at `offset`.
    #[inline]
    pub fn is_hint_begin(&self, source: &Source, offset: usize) -> bool {
        self.hint.is_some_and(|matcher| matcher(source, offset))
    }

    /// Returns true if a variable starts at `offset`.
    #[inline]
    pub fn is_variable_begin(&self, source: &Source, offset: usize) -> bool {
        self.variable.is_some_and(|matcher| matcher(source, offset))
    }
}

impl fmt::Debug for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("hint", &self.hint.is_some())
            .field("variable", &self.variable.is_some())
            .field("nchars", &self.nchars)
            .field("hash_comment", &self.hash_comment)
            .finish()
    }
}

fn starts_with(source: &Source, offset: usize, prefix: &str) -> bool {
    let offset = offset as isize;
    prefix
        .chars()
        .zip(offset..)
        .all(|(ch, position)| source.char_at(position) == ch)
}

/// MySQL executable comment: `/*! ... */`.
pub fn mysql_hint(source: &Source, offset: usize) -> bool {
    starts_with(source, offset, "/*!")
}

/// Oracle optimizer hint: `/*+ ... */`.
pub fn oracle_hint(source: &Source, offset: usize) -> bool {
    starts_with(source, offset, "/*+")
}

/// `@user_var` and `@@system_var`.
pub fn at_variable(source: &Source, offset: usize) -> bool {
    starts_with(source, offset, "@")
}

/// Supported SQL dialects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Keywords common to all dialects, no optional syntax
    #[default]
    Default,
    /// MySQL
    #[serde(alias = "MySQL")]
    MySql,
    /// Oracle
    Oracle,
    /// PostgreSQL
    #[serde(alias = "postgres", alias = "PostgreSQL")]
    PostgreSql,
    /// Microsoft SQL Server
    #[serde(alias = "mssql", alias = "SQLServer")]
    SqlServer,
    /// H2 (reuses MySQL keywords)
    H2,
}

lazy_static! {
    static ref DEFAULT_DICTIONARY: Arc<Dictionary> =
        Arc::new(Dictionary::new(DEFAULT_KEYWORDS.iter().copied()));
    static ref MYSQL_DICTIONARY: Arc<Dictionary> = Arc::new(Dictionary::new(
        DEFAULT_KEYWORDS.iter().chain(MYSQL_KEYWORDS).copied()
    ));
    static ref ORACLE_DICTIONARY: Arc<Dictionary> = Arc::new(Dictionary::new(
        DEFAULT_KEYWORDS.iter().chain(ORACLE_KEYWORDS).copied()
    ));
    static ref POSTGRESQL_DICTIONARY: Arc<Dictionary> = Arc::new(Dictionary::new(
        DEFAULT_KEYWORDS.iter().chain(POSTGRESQL_KEYWORDS).copied()
    ));
    static ref SQLSERVER_DICTIONARY: Arc<Dictionary> = Arc::new(Dictionary::new(
        DEFAULT_KEYWORDS.iter().chain(SQLSERVER_KEYWORDS).copied()
    ));
}

impl DialectKind {
    /// Every dialect.
    pub const ALL: &'static [DialectKind] = &[
        DialectKind::Default,
        DialectKind::MySql,
        DialectKind::Oracle,
        DialectKind::PostgreSql,
        DialectKind::SqlServer,
        DialectKind::H2,
    ];

    /// Lower-case dialect name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            DialectKind::Default => "default",
            DialectKind::MySql => "mysql",
            DialectKind::Oracle => "oracle",
            DialectKind::PostgreSql => "postgresql",
            DialectKind::SqlServer => "sqlserver",
            DialectKind::H2 => "h2",
        }
    }

    /// Optional syntaxes of this dialect.
    pub fn syntax(self) -> Syntax {
        match self {
            DialectKind::MySql => Syntax::default()
                .with_hint(mysql_hint)
                .with_variable(at_variable)
                .with_hash_comment(),
            DialectKind::Oracle => Syntax::default().with_hint(oracle_hint),
            DialectKind::SqlServer => Syntax::default().with_variable(at_variable).with_nchars(),
            DialectKind::Default | DialectKind::PostgreSql | DialectKind::H2 => Syntax::default(),
        }
    }

    /// Shared dictionary of this dialect, built on first use.
    pub fn dictionary(self) -> Arc<Dictionary> {
        let dictionary: &Arc<Dictionary> = match self {
            DialectKind::Default => &*DEFAULT_DICTIONARY,
            DialectKind::MySql | DialectKind::H2 => &*MYSQL_DICTIONARY,
            DialectKind::Oracle => &*ORACLE_DICTIONARY,
            DialectKind::PostgreSql => &*POSTGRESQL_DICTIONARY,
            DialectKind::SqlServer => &*SQLSERVER_DICTIONARY,
        };
        Arc::clone(dictionary)
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text names no dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect `{0}` (expected one of: default, mysql, oracle, postgresql, sqlserver, h2)")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(DialectKind::Default),
            "mysql" => Ok(DialectKind::MySql),
            "oracle" => Ok(DialectKind::Oracle),
            "postgresql" | "postgres" | "pg" => Ok(DialectKind::PostgreSql),
            "sqlserver" | "mssql" => Ok(DialectKind::SqlServer),
            "h2" => Ok(DialectKind::H2),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
