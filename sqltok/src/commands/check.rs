//! Check command implementation.
//!
//! Lexes every statement file on a rayon pool. All workers share one
//! dialect dictionary; diagnostics are collected back on the calling
//! thread.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use shardlex_lex::{DialectKind, Dictionary, Lexer, LexicalError, Syntax};
use shardlex_util::{Diagnostic, DiagnosticCode, Handler, SourceMap, Span};
use tracing::{debug, info, trace};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::{Result, SqltokError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Statement files to lex.
    pub files: Vec<PathBuf>,
    /// Dialect to scan with.
    pub dialect: DialectKind,
    /// Worker threads.
    pub jobs: usize,
    /// Skip files not yet started once one fails.
    pub fail_fast: bool,
}

/// What happened to one file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Lexed to END
    Passed {
        /// Tokens scanned, END included
        tokens: usize,
    },
    /// Could not be read
    Unreadable(String),
    /// Stopped at a lexical error
    Lexical(LexicalError),
    /// Not started because an earlier file failed
    Skipped,
}

impl FileOutcome {
    /// Returns true for unreadable files and lexical errors.
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Unreadable(_) | FileOutcome::Lexical(_))
    }
}

/// Outcome of one file, in input order.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The checked path
    pub path: PathBuf,
    /// What happened
    pub outcome: FileOutcome,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    handler: Handler,
    sources: SourceMap,
}

impl CheckCommand {
    /// Lex every file and collect one report per file.
    pub fn run(&mut self) -> Result<CommandResult<Vec<FileReport>>> {
        if self.args.files.is_empty() {
            return Err(SqltokError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        if self.args.jobs == 0 {
            return Err(SqltokError::Validation(
                error_messages::INVALID_JOBS.to_string(),
            ));
        }

        let start = Instant::now();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.args.jobs)
            .build()
            .map_err(|e| SqltokError::Config(format!("Failed to start worker pool: {}", e)))?;

        let dictionary = self.args.dialect.dictionary();
        let syntax = self.args.dialect.syntax();
        let fail_fast = self.args.fail_fast;
        let stop = AtomicBool::new(false);
        debug!(
            files = self.args.files.len(),
            jobs = self.args.jobs,
            dialect = %self.args.dialect,
            "checking files"
        );

        let files = &self.args.files;
        let reports: Vec<FileReport> = pool.install(|| {
            files
                .par_iter()
                .map(|path| check_file(path, &dictionary, syntax, fail_fast, &stop))
                .collect()
        });

        for report in &reports {
            if let Some(diagnostic) = self.diagnose(report) {
                self.handler.emit_diagnostic(diagnostic);
            }
        }

        // one error per failed file
        let failed = self.handler.error_count();
        let warnings = self.handler.warning_count();
        let elapsed = start.elapsed().as_millis() as u64;
        info!(files = reports.len(), failed, warnings, elapsed_ms = elapsed, "check finished");

        Ok(CommandResult::new(reports)
            .with_items_processed(self.args.files.len())
            .with_items_failed(failed)
            .with_execution_time_ms(elapsed))
    }

    /// Diagnostics emitted so far, in input order.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Files that received a diagnostic, by the id their spans carry.
    pub fn sources(&self) -> &SourceMap {
        &self.sources
    }

    fn diagnose(&mut self, report: &FileReport) -> Option<Diagnostic> {
        match &report.outcome {
            FileOutcome::Passed { tokens } if *tokens > 1 => None,
            FileOutcome::Passed { .. } => {
                let file_id = self.sources.add_file(report.path.display().to_string(), "");
                let span = Span::DUMMY.with_file_id(file_id);
                Some(
                    Diagnostic::warning("file contains no statement", span)
                        .with_code(DiagnosticCode::W_INPUT_EMPTY),
                )
            },
            FileOutcome::Skipped => None,
            FileOutcome::Unreadable(message) => {
                let file_id = self.sources.add_file(report.path.display().to_string(), "");
                let span = Span::DUMMY.with_file_id(file_id);
                Some(
                    Diagnostic::error(format!("cannot read file: {}", message), span)
                        .with_code(DiagnosticCode::E_INPUT_UNREADABLE),
                )
            },
            FileOutcome::Lexical(err) => {
                let file_id = self
                    .sources
                    .add_file(report.path.display().to_string(), err.input());
                let mut diagnostic = err.to_diagnostic();
                diagnostic.span = diagnostic.span.with_file_id(file_id);
                Some(diagnostic)
            },
        }
    }
}

fn check_file(
    path: &Path,
    dictionary: &Arc<Dictionary>,
    syntax: Syntax,
    fail_fast: bool,
    stop: &AtomicBool,
) -> FileReport {
    if fail_fast && stop.load(Ordering::Relaxed) {
        return FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Skipped,
        };
    }

    let outcome = match std::fs::read_to_string(path) {
        Err(e) => FileOutcome::Unreadable(e.to_string()),
        Ok(sql) => match Lexer::new(sql, Arc::clone(dictionary), syntax).tokenize() {
            Ok(tokens) => FileOutcome::Passed {
                tokens: tokens.len(),
            },
            Err(err) => FileOutcome::Lexical(err),
        },
    };
    if outcome.is_failure() {
        stop.store(true, Ordering::Relaxed);
    }
    trace!(path = %path.display(), failed = outcome.is_failure(), "checked file");

    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<Vec<FileReport>>;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            handler: Handler::new(),
            sources: SourceMap::new(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        // diagnostics need a fresh handler per run
        let mut command = Self::new(self.args.clone());
        command.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Lex statement files in parallel and report lexical errors"
    }

    fn help() -> &'static str {
        "Each file is lexed to the end. Files that cannot be read or that \
         stop at a lexical error are reported with a pointer diagnostic; \
         the command fails if any file fails."
    }
}

/// Run the check command and print a per-file report.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut command = CheckCommand::new(args);
    let result = command.run()?;

    for report in &result.data {
        match &report.outcome {
            FileOutcome::Passed { tokens } => {
                println!(
                    "{} {} ({} tokens)",
                    output_messages::FILE_OK,
                    report.path.display(),
                    tokens
                );
            },
            FileOutcome::Skipped => {
                println!("{} {} skipped", output_messages::INFO, report.path.display());
            },
            FileOutcome::Unreadable(_) | FileOutcome::Lexical(_) => {
                println!("{} {}", output_messages::FILE_FAILED, report.path.display());
            },
        }
    }

    let handler = command.handler();
    let sources = command.sources();
    for diagnostic in handler.diagnostics() {
        let origin = sources
            .get(diagnostic.span.file_id)
            .map(|file| file.name().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        eprint!("{}", diagnostic.render(&origin));
    }

    println!(
        "{} {} file(s) checked, {} failed, {} warning(s) in {}ms",
        output_messages::SUMMARY,
        result.items_processed,
        result.items_failed,
        handler.warning_count(),
        result.execution_time_ms
    );

    if !handler.has_errors() {
        Ok(())
    } else {
        Err(SqltokError::Validation(format!(
            "{} {}",
            result.items_failed,
            error_messages::FILES_FAILED
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardlex_lex::LexicalErrorKind;
    use shardlex_util::{FileId, Level};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, sql: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, sql).unwrap();
        path
    }

    fn args(files: Vec<PathBuf>) -> CheckArgs {
        CheckArgs {
            files,
            dialect: DialectKind::MySql,
            jobs: 2,
            fail_fast: false,
        }
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
        assert!(!<CheckCommand as CommandDescription>::help().is_empty());
    }

    #[test]
    fn test_check_all_pass() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write(&temp_dir, "a.sql", "SELECT * FROM t_order LIMIT 10"),
            write(&temp_dir, "b.sql", "INSERT INTO t (a) VALUES (@id, 'x')"),
        ];

        let mut command = CheckCommand::new(args(files.clone()));
        let result = command.run().unwrap();
        assert!(result.is_success());
        assert_eq!(result.items_processed, 2);
        assert_eq!(result.data[0].path, files[0]);
        assert!(matches!(result.data[0].outcome, FileOutcome::Passed { tokens: 7 }));
        assert!(command.handler().diagnostics().is_empty());
        assert!(command.sources().get(FileId(0)).is_none());
    }

    #[test]
    fn test_check_reports_lexical_error() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write(&temp_dir, "ok.sql", "SELECT 1"),
            write(&temp_dir, "bad.sql", "SELECT 'open"),
        ];

        let mut command = CheckCommand::new(args(files));
        let result = command.run().unwrap();
        assert_eq!(result.items_failed, 1);

        match &result.data[1].outcome {
            FileOutcome::Lexical(err) => {
                assert_eq!(err.kind(), LexicalErrorKind::UnterminatedChars('\''));
                assert_eq!(err.offset(), 7);
            },
            other => panic!("expected lexical error, got {:?}", other),
        }

        let diagnostics = command.handler().diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_CHARS));
        let file = command.sources().get(diagnostics[0].span.file_id).unwrap();
        assert!(file.name().ends_with("bad.sql"));
        assert_eq!(file.line_at(1), Some("SELECT 'open"));
    }

    #[test]
    fn test_check_warns_on_file_without_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write(&temp_dir, "blank.sql", "  /* nothing here */\n"),
            write(&temp_dir, "ok.sql", "SELECT 1"),
        ];

        let mut command = CheckCommand::new(args(files));
        let result = command.run().unwrap();
        assert!(result.is_success());
        assert!(matches!(result.data[0].outcome, FileOutcome::Passed { tokens: 1 }));

        let handler = command.handler();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.warning_count(), 1);
        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics[0].level, Level::Warning);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::W_INPUT_EMPTY));
        let file = command.sources().get(diagnostics[0].span.file_id).unwrap();
        assert!(file.name().ends_with("blank.sql"));
    }

    #[test]
    fn test_failed_count_matches_errors_not_warnings() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write(&temp_dir, "empty.sql", ""),
            write(&temp_dir, "bad.sql", "SELECT 0x"),
        ];

        let mut command = CheckCommand::new(args(files));
        let result = command.run().unwrap();
        assert_eq!(result.items_failed, 1);
        assert_eq!(command.handler().error_count(), 1);
        assert_eq!(command.handler().warning_count(), 1);
    }

    #[test]
    fn test_run_check_passes_with_warnings_only() {
        let temp_dir = TempDir::new().unwrap();
        assert!(run_check(args(vec![write(&temp_dir, "empty.sql", "")])).is_ok());
    }

    #[test]
    fn test_check_unreadable_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut command = CheckCommand::new(args(vec![temp_dir.path().join("missing.sql")]));
        let result = command.run().unwrap();

        assert!(matches!(result.data[0].outcome, FileOutcome::Unreadable(_)));
        let diagnostics = command.handler().diagnostics();
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::E_INPUT_UNREADABLE));
        let file = command.sources().get(diagnostics[0].span.file_id).unwrap();
        assert!(file.name().ends_with("missing.sql"));
    }

    #[test]
    fn test_check_fail_fast_single_worker() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            write(&temp_dir, "bad.sql", "SELECT 0x"),
            write(&temp_dir, "later.sql", "SELECT 1"),
        ];

        let mut command = CheckCommand::new(CheckArgs {
            files,
            dialect: DialectKind::Default,
            jobs: 1,
            fail_fast: true,
        });
        let result = command.run().unwrap();
        assert!(result.data[0].outcome.is_failure());
        assert!(matches!(result.data[1].outcome, FileOutcome::Skipped));
        assert_eq!(result.items_failed, 1);
    }

    #[test]
    fn test_check_rejects_empty_input() {
        let mut command = CheckCommand::new(args(Vec::new()));
        assert!(matches!(command.run(), Err(SqltokError::Validation(_))));
    }

    #[test]
    fn test_check_rejects_zero_jobs() {
        let mut command = CheckCommand::new(CheckArgs {
            jobs: 0,
            ..args(vec![PathBuf::from("a.sql")])
        });
        assert!(matches!(command.run(), Err(SqltokError::Validation(_))));
    }

    #[test]
    fn test_execute_uses_fresh_handler() {
        let temp_dir = TempDir::new().unwrap();
        let command = CheckCommand::new(args(vec![write(&temp_dir, "bad.sql", "/* open")]));
        let first = command.execute().unwrap();
        let second = command.execute().unwrap();
        assert_eq!(first.items_failed, 1);
        assert_eq!(second.items_failed, 1);
    }

    #[test]
    fn test_run_check_fails_on_bad_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_check(args(vec![write(&temp_dir, "bad.sql", "SELECT `x")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Validation error: 1 {}", error_messages::FILES_FAILED)
        );
    }
}
