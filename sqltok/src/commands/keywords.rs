//! Keywords command implementation.
//!
//! Lists the reserved words of a dialect, or tells whether given words are
//! reserved in it.

use shardlex_lex::{DialectKind, Keyword};

use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::{Result, SqltokError};

/// Arguments for the keywords command.
#[derive(Debug, Clone)]
pub struct KeywordsArgs {
    /// Dialect whose dictionary is listed.
    pub dialect: DialectKind,
    /// Words to look up; every keyword is listed when empty.
    pub words: Vec<String>,
}

/// Keywords command handler.
pub struct KeywordsCommand {
    args: KeywordsArgs,
}

impl KeywordsCommand {
    /// Resolve each looked-up word, or every keyword of the dialect.
    pub fn run(&self) -> Result<CommandResult<Vec<(String, Option<Keyword>)>>> {
        let dictionary = self.args.dialect.dictionary();
        let entries: Vec<_> = if self.args.words.is_empty() {
            dictionary
                .keywords()
                .map(|keyword| (keyword.as_str().to_string(), Some(keyword)))
                .collect()
        } else {
            self.args
                .words
                .iter()
                .map(|word| (word.clone(), dictionary.find_keyword(word)))
                .collect()
        };

        let unreserved = entries.iter().filter(|(_, keyword)| keyword.is_none()).count();
        let count = entries.len();
        Ok(CommandResult::new(entries)
            .with_items_processed(count)
            .with_items_failed(unreserved))
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;
    type Output = CommandResult<Vec<(String, Option<Keyword>)>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "keywords"
    }
}

impl CommandDescription for KeywordsCommand {
    fn description() -> &'static str {
        "List the reserved words of a dialect"
    }

    fn help() -> &'static str {
        "Without arguments, prints every reserved word of the dialect in \
         dictionary order. With words, prints whether each one is reserved \
         and fails if any is not."
    }
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs) -> Result<()> {
    let lookup = !args.words.is_empty();
    let dialect = args.dialect;
    let result = KeywordsCommand::new(args).execute()?;

    for (word, keyword) in &result.data {
        match (lookup, keyword) {
            (false, _) => println!("{}", word),
            (true, Some(keyword)) => println!("{}  reserved ({})", word, keyword),
            (true, None) => println!("{}  not reserved", word),
        }
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(SqltokError::Validation(format!(
            "{} word(s) not reserved in {}",
            result.items_failed, dialect
        )))
    }
}
