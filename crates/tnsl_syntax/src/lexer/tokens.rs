//! Token type for the TNSL lexer.
//!
//! Tokens are stringly by nature: the language's consumers compare token text, so the lexer keeps
//! the exact source spelling and records the [`TokenClass`] chosen by the classifier.
//!
//! ## Notes
//! - Use `crate::token_helpers` for registry-backed matching (`is_group`, `keyword_id`, ...).
//! - `Root` and `Tag` tokens never come out of the lexer; the parser synthesizes them.

use crate::ast::Span;
use tnsl_core::lang::TokenClass;

/// A token with its class, spelling, and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
    /// 1-based line. `0` on synthetic tokens without a source anchor.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(class: TokenClass, text: impl Into<String>, line: usize, column: usize, span: Span) -> Self {
        Self {
            class,
            text: text.into(),
            line,
            column,
            span,
        }
    }

    /// Construct a synthetic tag token positioned at `anchor`.
    pub fn tag(text: &str, anchor: &Token) -> Self {
        Self {
            class: TokenClass::Tag,
            text: text.to_string(),
            line: anchor.line,
            column: anchor.column,
            span: anchor.span,
        }
    }

    /// Construct a tree root token carrying `label` (usually the file path).
    pub fn root(label: &str) -> Self {
        Self {
            class: TokenClass::Root,
            text: label.to_string(),
            line: 0,
            column: 0,
            span: Span::default(),
        }
    }

    /// Copy of this token with a different class and spelling, keeping the position.
    ///
    /// Used when the lexer re-emits block markers around stripped comments and when the parser
    /// merges `else if` into `elif`.
    pub fn respelled(&self, class: TokenClass, text: &str) -> Self {
        Self {
            class,
            text: text.to_string(),
            line: self.line,
            column: self.column,
            span: self.span,
        }
    }

    /// Return `true` if the token has a source position.
    pub fn has_position(&self) -> bool {
        self.line > 0
    }
}
