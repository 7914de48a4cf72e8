//! Command implementations for the CLI.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use tnsl_syntax::diagnostics::CompileError;
use tnsl_syntax::lexer::{self, Token};
use tnsl_syntax::parser::{self, ParserConfig};
use tnsl_syntax::render;

use super::{CliError, CliResult, ExitCode, OutputFormat, WriteLevel};

/// Maximum source file size (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// What `process_file` writes and how.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    pub level: WriteLevel,
    pub format: OutputFormat,
    pub max_depth: usize,
}

/// Read a source file with size validation.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let bytes =
        fs::read(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lex `input`, build its tree if asked, and write the result to `out`.
#[tracing::instrument(skip_all, fields(input = %input.display(), out = %out.display()))]
pub fn process_file(input: &Path, out: &Path, options: WriteOptions) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let label = input.to_string_lossy();
    let rendered = render_source(&source, &label, options)?;

    fs::write(out, rendered)
        .map_err(|e| CliError::failure(format!("Error writing output file '{}': {}", out.display(), e)))?;
    tracing::info!(write_level = ?options.level, format = ?options.format, "wrote output");
    Ok(ExitCode::SUCCESS)
}

/// Render `source` at the requested write level and format.
///
/// Grammar violations are rendered with `miette` against the source, labelled `label`.
pub fn render_source(source: &str, label: &str, options: WriteOptions) -> CliResult<String> {
    let tokens = lexer::lex(source);

    match options.level {
        WriteLevel::Tokens => render_tokens(&tokens, options.format),
        WriteLevel::Tree => {
            let config = ParserConfig {
                max_depth: options.max_depth,
                ..ParserConfig::default()
            };
            let root = parser::build_tree_with_config(&tokens, label, config)
                .map_err(|err| report_error(label, source, err))?;
            match options.format {
                OutputFormat::Text => Ok(render::tree_text(&root)),
                OutputFormat::Json => to_json(&render::tree_json(&root)),
            }
        }
    }
}

fn render_tokens(tokens: &[Token], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render::tokens_text(tokens)),
        OutputFormat::Json => to_json(&render::tokens_json(tokens)),
    }
}

fn to_json(value: &serde_json::Value) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| CliError::failure(format!("Error serializing output: {}", e)))
}

/// Turn a syntax error into a CLI error carrying the rendered diagnostic.
fn report_error(label: &str, source: &str, err: CompileError) -> CliError {
    tracing::debug!(kind = %err.kind, position = ?err.position, "syntax error");
    let report = Report::new(err).with_source_code(NamedSource::new(label, source.to_string()));
    CliError::failure(format!("{report:?}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn options(level: WriteLevel, format: OutputFormat) -> WriteOptions {
        WriteOptions {
            level,
            format,
            max_depth: parser::DEFAULT_MAX_DEPTH,
        }
    }

    #[test]
    fn test_render_tokens_text() {
        let out = render_source(";x\n", "a.tnsl", options(WriteLevel::Tokens, OutputFormat::Text)).unwrap();
        assert_eq!(out, "1:1 LINESEP ;\n1:2 DEFWORD x\n");
    }

    #[test]
    fn test_render_tree_json() {
        let out = render_source(";x\n", "a.tnsl", options(WriteLevel::Tree, OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tag"], "root");
        assert_eq!(value["text"], "a.tnsl");
        assert_eq!(value["children"][0]["tag"], "value");
    }

    #[test]
    fn test_syntax_error_names_token() {
        let err = render_source(";a = b }\n", "a.tnsl", options(WriteLevel::Tree, OutputFormat::Text)).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unexpected closing delimiter"), "{}", err.message);
    }

    #[test]
    fn test_token_level_skips_parsing() {
        // Not a valid tree, but a valid token stream.
        let out = render_source("}", "a.tnsl", options(WriteLevel::Tokens, OutputFormat::Text)).unwrap();
        assert_eq!(out, "1:1 DELIMIT }\n");
    }

    #[test]
    fn test_comment_only_source_is_empty_root() {
        let out = render_source("# nothing here\n", "a.tnsl", options(WriteLevel::Tree, OutputFormat::Text)).unwrap();
        assert_eq!(out, "root a.tnsl\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.tnsl")).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
    }
}
