//! Diagnostics for the TNSL front end.
//!
//! Every grammar violation aborts the parse with a single [`CompileError`]. The error names the
//! offending token and its position in the message, and implements [`miette::Diagnostic`] so the
//! CLI can render it against the source with a labelled span.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

/// A front-end error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    /// Line and column of the offending token, when there is one.
    pub position: Option<(usize, usize)>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            position: None,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            ..Self::new(message, span)
        }
    }

    /// Syntax error at `token`; the message is suffixed with the token and its position.
    pub fn at_token(message: impl fmt::Display, token: &Token) -> Self {
        let message = format!(
            "{message}: `{}` at line {}, column {}",
            token.text, token.line, token.column
        );
        Self {
            position: Some((token.line, token.column)),
            ..Self::syntax(message, token.span)
        }
    }

    /// Syntax error for input that ended while the parser still expected `what`.
    pub fn unexpected_end(what: &str, last: Option<&Token>) -> Self {
        let span = last.map(|t| Span::new(t.span.end, t.span.end)).unwrap_or_default();
        Self {
            position: last.map(|t| (t.line, t.column)),
            ..Self::syntax(format!("unexpected end of input, expected {what}"), span)
        }
    }

    /// Nesting exceeded the configured depth limit.
    pub fn depth_limit(limit: usize, token: &Token) -> Self {
        Self {
            kind: ErrorKind::Limit,
            ..Self::at_token(format!("nesting deeper than {limit} levels"), token)
        }
        .with_hint("raise the limit with `--max-depth`")
    }

    /// Too many binary operators were folded into chains along one path of the tree.
    pub fn chain_limit(limit: usize, token: &Token) -> Self {
        Self {
            kind: ErrorKind::Limit,
            ..Self::at_token(format!("more than {limit} chained binary operators"), token)
        }
        .with_note("operators of equal binding order fold into one left-leaning chain")
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
    Limit,
}

impl ErrorKind {
    /// Diagnostic code shown by `miette`.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Error => "tnsl::error",
            ErrorKind::Syntax => "tnsl::syntax",
            ErrorKind::Limit => "tnsl::limit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Limit => write!(f, "limit exceeded"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() && self.notes.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .notes
            .iter()
            .map(|n| format!("note: {n}"))
            .chain(self.hints.iter().cloned())
            .collect();
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), (self.span.start, self.span.len()));
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tnsl_core::lang::TokenClass;

    #[test]
    fn test_at_token_names_token_and_position() {
        let tok = Token::new(TokenClass::Delimiter, "}", 3, 7, Span::new(20, 21));
        let err = CompileError::at_token("unexpected closing delimiter", &tok);
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.position, Some((3, 7)));
        assert_eq!(
            err.to_string(),
            "syntax error: unexpected closing delimiter: `}` at line 3, column 7"
        );
    }

    #[test]
    fn test_diagnostic_code_and_label() {
        let tok = Token::new(TokenClass::DefWord, "x", 1, 1, Span::new(0, 1));
        let err = CompileError::depth_limit(4, &tok);
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("tnsl::limit"));
        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 1);
        assert!(err.help().is_some());
    }

    #[test]
    fn test_chain_limit_carries_note() {
        let tok = Token::new(TokenClass::Augment, "+", 1, 3, Span::new(2, 3));
        let err = CompileError::chain_limit(8, &tok);
        assert_eq!(err.kind, ErrorKind::Limit);
        assert_eq!(err.notes.len(), 1);
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.starts_with("note: "), "{help}");
    }

    #[test]
    fn test_unexpected_end_points_past_last_token() {
        let tok = Token::new(TokenClass::Delimiter, "/;", 2, 1, Span::new(5, 7));
        let err = CompileError::unexpected_end("`;/`", Some(&tok));
        assert_eq!(err.span, Span::new(7, 7));
        assert!(err.message.contains("expected `;/`"));
    }
}
