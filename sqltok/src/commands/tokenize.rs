//! Tokenize command implementation.
//!
//! Scans one statement and prints its tokens, END included.

use shardlex_lex::{DialectKind, Lexer, Token};
use tracing::debug;

use crate::commands::common::{OutputFormat, SqlSource};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Where the statement comes from.
    pub source: SqlSource,
    /// Dialect to scan with.
    pub dialect: DialectKind,
    /// Output format.
    pub format: OutputFormat,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Scan the statement.
    ///
    /// A lexical error is rendered to stderr against the statement before
    /// being returned.
    pub fn run(&self) -> Result<CommandResult<Vec<Token>>> {
        let sql = self.args.source.read()?;
        debug!(dialect = %self.args.dialect, chars = sql.chars().count(), "tokenizing");

        let tokens = Lexer::for_dialect(sql, self.args.dialect)
            .tokenize()
            .inspect_err(|err| eprint!("{}", err.render(&self.args.source.origin())))?;

        let count = tokens.len();
        Ok(CommandResult::new(tokens).with_items_processed(count))
    }
}

/// Format tokens for output.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for token in tokens {
                let literals = token.literals().escape_debug().to_string();
                out.push_str(&format!(
                    "{:<10} {:<24} {}\n",
                    token.token_type().to_string(),
                    literals,
                    token.end_offset()
                ));
            }
            Ok(out)
        },
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = CommandResult<Vec<Token>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl CommandDescription for TokenizeCommand {
    fn description() -> &'static str {
        "Print the tokens of one SQL statement"
    }

    fn help() -> &'static str {
        "Scans the statement given as an argument, with --file, or on stdin, \
         and prints one token per line or a JSON array."
    }
}

/// Run the tokenize command and print its tokens.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let format = args.format;
    let command = TokenizeCommand::new(args);
    let result = command.execute()?;
    print!("{}", render_tokens(&result.data, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
