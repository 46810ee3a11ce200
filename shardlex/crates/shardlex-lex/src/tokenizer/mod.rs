//! Tokenizer module.
//!
//! The scanning routines are split by lexeme class:
//! - `core` - the `Tokenizer` value and shared helpers
//! - `comment` - whitespace, comments and hints
//! - `identifier` - names, keywords and backtick identifiers
//! - `number` - integer, float and hex literals
//! - `chars` - quoted strings
//! - `symbol` - operators and punctuation
//! - `variable` - session and bind variables

mod chars;
mod comment;
mod core;
mod identifier;
mod number;
mod symbol;
mod variable;

pub use core::Tokenizer;
