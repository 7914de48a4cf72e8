//! CLI module for the TNSL front end
//!
//! ```text
//! tnsl <INPUT> [-o, --out <FILE>] [-w, --write-level tokens|tree] [--format text|json] [--max-depth N]
//! ```
//!
//! The tool lexes `INPUT`, builds its syntax tree, and writes the requested level of output to
//! `--out` (default `out.tnt`). `--write-level` also accepts the numeric aliases `0` (tokens) and
//! `1` (tree).
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tnsl_syntax::parser::DEFAULT_MAX_DEPTH;

use crate::version::TNSL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and parser front end for the TNSL language
#[derive(Parser, Debug)]
#[command(name = "tnsl")]
#[command(version = TNSL_VERSION)]
#[command(about = "Lex and parse a TNSL source file", long_about = None)]
pub struct Cli {
    /// Source file to process
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "out.tnt")]
    pub out: PathBuf,

    /// What to write: the token stream or the syntax tree
    #[arg(short = 'w', long = "write-level", value_enum, default_value_t = WriteLevel::Tree)]
    pub write_level: WriteLevel,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Deepest nesting of blocks, values, and types the parser accepts
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// How far the front end runs before writing its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteLevel {
    /// The token stream
    #[value(alias = "0")]
    Tokens,
    /// The syntax tree
    #[value(alias = "1")]
    Tree,
}

/// Serialization of the written output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = commands::WriteOptions {
        level: cli.write_level,
        format: cli.format,
        max_depth: cli.max_depth,
    };
    commands::process_file(&cli.input, &cli.out, options)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tnsl", "main.tnsl"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("main.tnsl"));
        assert_eq!(cli.out, PathBuf::from("out.tnt"));
        assert_eq!(cli.write_level, WriteLevel::Tree);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_cli_write_level_aliases() {
        let cli = Cli::try_parse_from(["tnsl", "a.tnsl", "-w", "0"]).unwrap();
        assert_eq!(cli.write_level, WriteLevel::Tokens);
        let cli = Cli::try_parse_from(["tnsl", "a.tnsl", "--write-level", "1"]).unwrap();
        assert_eq!(cli.write_level, WriteLevel::Tree);
        let cli = Cli::try_parse_from(["tnsl", "a.tnsl", "-w", "tokens"]).unwrap();
        assert_eq!(cli.write_level, WriteLevel::Tokens);
    }

    #[test]
    fn test_cli_output_flags() {
        let cli = Cli::try_parse_from(["tnsl", "a.tnsl", "-o", "tree.json", "--format", "json", "--max-depth", "16"])
            .unwrap();
        assert_eq!(cli.out, PathBuf::from("tree.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_depth, 16);
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["tnsl", "a.tnsl", "-w", "2"]).is_err());
        assert!(Cli::try_parse_from(["tnsl"]).is_err());
    }
}
