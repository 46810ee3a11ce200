//! Reserved words.
//!
//! All reserved words of every supported dialect live in one [`Keyword`]
//! enum; each dialect picks its subset through the slices below. Keyword
//! text is always upper case and is matched case-insensitively by the
//! [`Dictionary`](crate::Dictionary).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved word of some SQL dialect.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Upper-case keyword text.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    // DDL objects
    Schema => "SCHEMA",
    Database => "DATABASE",
    Table => "TABLE",
    Column => "COLUMN",
    View => "VIEW",
    Index => "INDEX",
    Trigger => "TRIGGER",
    Procedure => "PROCEDURE",
    Tablespace => "TABLESPACE",
    Function => "FUNCTION",
    Sequence => "SEQUENCE",
    Cursor => "CURSOR",
    Domain => "DOMAIN",
    Role => "ROLE",
    User => "USER",
    Temporary => "TEMPORARY",
    Constraint => "CONSTRAINT",
    Primary => "PRIMARY",
    Key => "KEY",
    Foreign => "FOREIGN",
    References => "REFERENCES",
    Unique => "UNIQUE",
    Check => "CHECK",
    Default => "DEFAULT",
    Cascade => "CASCADE",
    Restrict => "RESTRICT",
    Add => "ADD",
    Rename => "RENAME",
    To => "TO",

    // statements
    Select => "SELECT",
    Insert => "INSERT",
    Update => "UPDATE",
    Delete => "DELETE",
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Truncate => "TRUNCATE",
    Grant => "GRANT",
    Revoke => "REVOKE",
    Begin => "BEGIN",
    Commit => "COMMIT",
    Rollback => "ROLLBACK",
    Savepoint => "SAVEPOINT",
    Transaction => "TRANSACTION",
    Call => "CALL",
    Explain => "EXPLAIN",
    Describe => "DESCRIBE",
    Use => "USE",

    // clauses
    Distinct => "DISTINCT",
    From => "FROM",
    Where => "WHERE",
    Group => "GROUP",
    By => "BY",
    Having => "HAVING",
    Order => "ORDER",
    Asc => "ASC",
    Desc => "DESC",
    Union => "UNION",
    All => "ALL",
    Any => "ANY",
    Some => "SOME",
    Except => "EXCEPT",
    Intersect => "INTERSECT",
    Minus => "MINUS",
    Into => "INTO",
    Values => "VALUES",
    Set => "SET",
    With => "WITH",
    As => "AS",
    On => "ON",
    Using => "USING",
    Join => "JOIN",
    Inner => "INNER",
    Outer => "OUTER",
    Left => "LEFT",
    Right => "RIGHT",
    Full => "FULL",
    Cross => "CROSS",
    Natural => "NATURAL",
    For => "FOR",
    Of => "OF",
    Nowait => "NOWAIT",

    // expressions
    If => "IF",
    Is => "IS",
    Not => "NOT",
    Null => "NULL",
    True => "TRUE",
    False => "FALSE",
    Exists => "EXISTS",
    Between => "BETWEEN",
    In => "IN",
    Like => "LIKE",
    Escape => "ESCAPE",
    And => "AND",
    Or => "OR",
    Xor => "XOR",
    Case => "CASE",
    When => "WHEN",
    Then => "THEN",
    Else => "ELSE",
    End => "END",
    Cast => "CAST",
    Collate => "COLLATE",
    Interval => "INTERVAL",

    // types
    Boolean => "BOOLEAN",
    Char => "CHAR",
    Character => "CHARACTER",
    Varchar => "VARCHAR",
    Integer => "INTEGER",
    Int => "INT",
    Bigint => "BIGINT",
    Decimal => "DECIMAL",
    Numeric => "NUMERIC",
    Double => "DOUBLE",
    Date => "DATE",
    Time => "TIME",
    Timestamp => "TIMESTAMP",

    // aggregates
    Max => "MAX",
    Min => "MIN",
    Sum => "SUM",
    Count => "COUNT",
    Avg => "AVG",

    // paging, locking and windows shared by several dialects
    Limit => "LIMIT",
    Offset => "OFFSET",
    Fetch => "FETCH",
    First => "FIRST",
    Next => "NEXT",
    Last => "LAST",
    Row => "ROW",
    Rows => "ROWS",
    Only => "ONLY",
    Nulls => "NULLS",
    Share => "SHARE",
    Skip => "SKIP",
    Locked => "LOCKED",
    Over => "OVER",
    Partition => "PARTITION",
    Returning => "RETURNING",
    Merge => "MERGE",
    Matched => "MATCHED",
    Pivot => "PIVOT",
    Unpivot => "UNPIVOT",
    Show => "SHOW",

    // MySQL
    Dual => "DUAL",
    Value => "VALUE",
    Force => "FORCE",
    Ignore => "IGNORE",
    Replace => "REPLACE",
    Duplicate => "DUPLICATE",
    HighPriority => "HIGH_PRIORITY",
    LowPriority => "LOW_PRIORITY",
    Delayed => "DELAYED",
    Quick => "QUICK",
    StraightJoin => "STRAIGHT_JOIN",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    SqlSmallResult => "SQL_SMALL_RESULT",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCache => "SQL_CACHE",
    SqlNoCache => "SQL_NO_CACHE",
    Distinctrow => "DISTINCTROW",
    Rollup => "ROLLUP",
    Div => "DIV",
    Mod => "MOD",
    Regexp => "REGEXP",
    Rlike => "RLIKE",
    AutoIncrement => "AUTO_INCREMENT",
    Lock => "LOCK",
    Mode => "MODE",
    Global => "GLOBAL",
    Session => "SESSION",

    // Oracle
    Connect => "CONNECT",
    Start => "START",
    Prior => "PRIOR",
    Nocycle => "NOCYCLE",
    Siblings => "SIBLINGS",
    Rownum => "ROWNUM",
    Sysdate => "SYSDATE",
    Wait => "WAIT",
    Model => "MODEL",
    Keep => "KEEP",
    Versions => "VERSIONS",

    // PostgreSQL
    Ilike => "ILIKE",
    Similar => "SIMILAR",
    Lateral => "LATERAL",
    Window => "WINDOW",
    Recursive => "RECURSIVE",
    Current => "CURRENT",
    Do => "DO",
    Nothing => "NOTHING",
    Conflict => "CONFLICT",
    Analyze => "ANALYZE",
    Verbose => "VERBOSE",

    // SQL Server
    Top => "TOP",
    Percent => "PERCENT",
    Ties => "TIES",
    Output => "OUTPUT",
    Apply => "APPLY",
    Nolock => "NOLOCK",
    Holdlock => "HOLDLOCK",
    Rowlock => "ROWLOCK",
    Tablock => "TABLOCK",
    Readpast => "READPAST",
    Updlock => "UPDLOCK",
    Xlock => "XLOCK",
    Identity => "IDENTITY",
    IdentityInsert => "IDENTITY_INSERT",
    Exec => "EXEC",
    Execute => "EXECUTE",
    Declare => "DECLARE",
    Go => "GO",
}

/// Keywords reserved by every dialect.
pub const DEFAULT_KEYWORDS: &[Keyword] = &[
    Keyword::Schema,
    Keyword::Database,
    Keyword::Table,
    Keyword::Column,
    Keyword::View,
    Keyword::Index,
    Keyword::Trigger,
    Keyword::Procedure,
    Keyword::Tablespace,
    Keyword::Function,
    Keyword::Sequence,
    Keyword::Cursor,
    Keyword::Domain,
    Keyword::Role,
    Keyword::User,
    Keyword::Temporary,
    Keyword::Constraint,
    Keyword::Primary,
    Keyword::Key,
    Keyword::Foreign,
    Keyword::References,
    Keyword::Unique,
    Keyword::Check,
    Keyword::Default,
    Keyword::Cascade,
    Keyword::Restrict,
    Keyword::Add,
    Keyword::Rename,
    Keyword::To,
    Keyword::Select,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Delete,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
    Keyword::Truncate,
    Keyword::Grant,
    Keyword::Revoke,
    Keyword::Begin,
    Keyword::Commit,
    Keyword::Rollback,
    Keyword::Savepoint,
    Keyword::Transaction,
    Keyword::Call,
    Keyword::Explain,
    Keyword::Describe,
    Keyword::Use,
    Keyword::Distinct,
    Keyword::From,
    Keyword::Where,
    Keyword::Group,
    Keyword::By,
    Keyword::Having,
    Keyword::Order,
    Keyword::Asc,
    Keyword::Desc,
    Keyword::Union,
    Keyword::All,
    Keyword::Any,
    Keyword::Some,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Minus,
    Keyword::Into,
    Keyword::Values,
    Keyword::Set,
    Keyword::With,
    Keyword::As,
    Keyword::On,
    Keyword::Using,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Outer,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Cross,
    Keyword::Natural,
    Keyword::For,
    Keyword::Of,
    Keyword::Nowait,
    Keyword::If,
    Keyword::Is,
    Keyword::Not,
    Keyword::Null,
    Keyword::True,
    Keyword::False,
    Keyword::Exists,
    Keyword::Between,
    Keyword::In,
    Keyword::Like,
    Keyword::Escape,
    Keyword::And,
    Keyword::Or,
    Keyword::Xor,
    Keyword::Case,
    Keyword::When,
    Keyword::Then,
    Keyword::Else,
    Keyword::End,
    Keyword::Cast,
    Keyword::Collate,
    Keyword::Interval,
    Keyword::Boolean,
    Keyword::Char,
    Keyword::Character,
    Keyword::Varchar,
    Keyword::Integer,
    Keyword::Int,
    Keyword::Bigint,
    Keyword::Decimal,
    Keyword::Numeric,
    Keyword::Double,
    Keyword::Date,
    Keyword::Time,
    Keyword::Timestamp,
    Keyword::Max,
    Keyword::Min,
    Keyword::Sum,
    Keyword::Count,
    Keyword::Avg,
];

/// Extra MySQL keywords (also used by H2).
pub const MYSQL_KEYWORDS: &[Keyword] = &[
    Keyword::Show,
    Keyword::Dual,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Value,
    Keyword::Force,
    Keyword::Ignore,
    Keyword::Replace,
    Keyword::Duplicate,
    Keyword::HighPriority,
    Keyword::LowPriority,
    Keyword::Delayed,
    Keyword::Quick,
    Keyword::StraightJoin,
    Keyword::SqlCalcFoundRows,
    Keyword::SqlSmallResult,
    Keyword::SqlBigResult,
    Keyword::SqlBufferResult,
    Keyword::SqlCache,
    Keyword::SqlNoCache,
    Keyword::Distinctrow,
    Keyword::Partition,
    Keyword::Rollup,
    Keyword::Div,
    Keyword::Mod,
    Keyword::Regexp,
    Keyword::Rlike,
    Keyword::AutoIncrement,
    Keyword::Lock,
    Keyword::Share,
    Keyword::Mode,
    Keyword::Global,
    Keyword::Session,
];

/// Extra Oracle keywords.
pub const ORACLE_KEYWORDS: &[Keyword] = &[
    Keyword::Connect,
    Keyword::Start,
    Keyword::Prior,
    Keyword::Nocycle,
    Keyword::Siblings,
    Keyword::Rownum,
    Keyword::Sysdate,
    Keyword::Wait,
    Keyword::Skip,
    Keyword::Locked,
    Keyword::Nulls,
    Keyword::First,
    Keyword::Last,
    Keyword::Fetch,
    Keyword::Next,
    Keyword::Only,
    Keyword::Rows,
    Keyword::Row,
    Keyword::Offset,
    Keyword::Model,
    Keyword::Pivot,
    Keyword::Unpivot,
    Keyword::Keep,
    Keyword::Versions,
    Keyword::Returning,
    Keyword::Merge,
    Keyword::Matched,
    Keyword::Over,
    Keyword::Partition,
];

/// Extra PostgreSQL keywords.
pub const POSTGRESQL_KEYWORDS: &[Keyword] = &[
    Keyword::Show,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::First,
    Keyword::Next,
    Keyword::Last,
    Keyword::Row,
    Keyword::Rows,
    Keyword::Only,
    Keyword::Nulls,
    Keyword::Returning,
    Keyword::Ilike,
    Keyword::Similar,
    Keyword::Lateral,
    Keyword::Window,
    Keyword::Over,
    Keyword::Partition,
    Keyword::Recursive,
    Keyword::Skip,
    Keyword::Locked,
    Keyword::Share,
    Keyword::Current,
    Keyword::Do,
    Keyword::Nothing,
    Keyword::Conflict,
    Keyword::Analyze,
    Keyword::Verbose,
];

/// Extra SQL Server keywords.
pub const SQLSERVER_KEYWORDS: &[Keyword] = &[
    Keyword::Top,
    Keyword::Percent,
    Keyword::Ties,
    Keyword::Output,
    Keyword::Apply,
    Keyword::Nolock,
    Keyword::Holdlock,
    Keyword::Rowlock,
    Keyword::Tablock,
    Keyword::Readpast,
    Keyword::Updlock,
    Keyword::Xlock,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Next,
    Keyword::First,
    Keyword::Rows,
    Keyword::Row,
    Keyword::Only,
    Keyword::Merge,
    Keyword::Matched,
    Keyword::Over,
    Keyword::Partition,
    Keyword::Pivot,
    Keyword::Unpivot,
    Keyword::Identity,
    Keyword::IdentityInsert,
    Keyword::Exec,
    Keyword::Execute,
    Keyword::Declare,
    Keyword::Go,
];

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names no keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyword `{0}`")]
pub struct UnknownKeyword(pub String);

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    /// Case-insensitive lookup over every dialect's keywords.
    ///
    /// Use a [`Dictionary`](crate::Dictionary) to ask whether a word is
    /// reserved in a particular dialect.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .iter()
            .copied()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKeyword(s.to_string()))
    }
}
