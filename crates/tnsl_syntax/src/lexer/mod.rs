//! Lexer for the TNSL language.
//!
//! Handles tokenization including:
//! - User words, keywords, built-in types, and preprocessor words (context dependent)
//! - Numeric, string, and character literals
//! - Runs of reserved runes, split greedily into the longest rune groups
//! - Line comments (`#`) and block comments (`/# ... #/` and the hybrid markers)
//!
//! ## Module Structure
//!
//! - `tokens` - Token type
//! - `literals` - Numeric and quoted literal scanning
//! - `comments` - Block comment stripping pass
//!
//! ## Notes
//! - The lexer never fails: malformed input produces odd tokens, and the parser rejects them.
//! - Positions are 1-based; columns count characters, spans count bytes.

mod comments;
mod literals;
pub mod tokens;

pub use tokens::Token;

use std::path::Path;

use crate::ast::Span;
use tnsl_core::lang::TokenClass;
use tnsl_core::lang::classify;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// The lexer accumulates word runes in `word` until whitespace, a quote, or a
// reserved rune ends the word. Reserved runes are collected into a run, split
// into groups, and the last context marker in the run decides whether the
// following words are read in preprocessor context:
//
//   `:include "x"`   -> `:` enters preprocessor context, `include` is a PREWORD
//   `;include = 1`   -> `;` leaves it, `include` is a DEFWORD
// ============================================================================

/// Lexer for TNSL source code.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset of the next unread character.
    current_pos: usize,
    line: usize,
    column: usize,
    in_preprocessor: bool,
    max_group: usize,
    word: String,
    /// Byte offset, line, and column of the first rune in `word`.
    word_start: (usize, usize, usize),
    tokens: Vec<Token>,
}

/// A reserved rune inside a run, with its position.
#[derive(Debug, Clone, Copy)]
struct RunRune {
    ch: char,
    pos: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            in_preprocessor: false,
            max_group: classify::max_group_len(),
            word: String::new(),
            word_start: (0, 1, 1),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Block comments are stripped before the tokens are returned.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.peek() {
            self.scan(c);
        }
        self.flush_word();

        comments::strip_block_comments(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn push(&mut self, class: TokenClass, text: String, start: usize, line: usize, column: usize) {
        let span = Span::new(start, start + text.len());
        self.tokens.push(Token::new(class, text, line, column, span));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan(&mut self, c: char) {
        if c.is_whitespace() {
            self.flush_word();
            self.advance();
            return;
        }

        if c.is_ascii_digit() && self.word.is_empty() {
            self.scan_number();
            return;
        }

        if c == '"' || c == '\'' {
            self.flush_word();
            self.scan_quoted(c);
            return;
        }

        if classify::classify_rune(c).is_some() {
            self.flush_word();
            self.scan_rune_run();
            return;
        }

        if self.word.is_empty() {
            self.word_start = (self.current_pos, self.line, self.column);
        }
        self.word.push(c);
        self.advance();
    }

    /// Emit the buffered word, classified in the current context.
    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.word);
        let class = classify::classify_word(&text, self.in_preprocessor);
        let (start, line, column) = self.word_start;
        self.push(class, text, start, line, column);
    }

    // ========================================================================
    // Reserved rune runs
    // ========================================================================

    fn scan_rune_run(&mut self) {
        let mut run = Vec::new();
        while let Some(ch) = self.peek() {
            if classify::classify_rune(ch).is_none() {
                break;
            }
            run.push(RunRune {
                ch,
                pos: self.current_pos,
                column: self.column,
            });
            self.advance();
        }

        let line = self.line;
        let mut context = None;
        for (text, first) in split_run(&run, self.max_group) {
            if text == "#" {
                self.skip_line();
                break;
            }
            if let Some(pre) = classify::preprocessor_context_after(&text) {
                context = Some(pre);
            }
            let class = classify::classify_group(&text).unwrap_or(TokenClass::Augment);
            self.push(class, text, first.pos, line, first.column);
        }

        if let Some(pre) = context {
            self.in_preprocessor = pre;
        }
    }

    /// Discard everything up to (not including) the next newline.
    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }
}

/// Split a run of reserved runes into groups, longest match first.
///
/// Each position tries the widest window (up to `max`) and shrinks it until the text is a known
/// group; a single rune always matches.
fn split_run(run: &[RunRune], max: usize) -> Vec<(String, RunRune)> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < run.len() {
        let mut width = max.min(run.len() - start).max(1);
        loop {
            let text: String = run[start..start + width].iter().map(|r| r.ch).collect();
            if width == 1 || classify::classify_group(&text).is_some() {
                out.push((text, run[start]));
                break;
            }
            width -= 1;
        }
        start += width;
    }
    out
}

// ============================================================================
// Public API
// ============================================================================

/// Tokenize in-memory source text.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::debug!(token_count = tokens.len(), "lexed source");
    tokens
}

/// Read and tokenize a file.
///
/// Returns an empty vector if the file cannot be read; the failure is logged, not surfaced.
/// Invalid UTF-8 is replaced rather than rejected.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn tokenize(path: impl AsRef<Path>) -> Vec<Token> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => lex(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            tracing::warn!(error = %err, "could not read source file");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        lex(source).into_iter().map(|t| t.text).collect()
    }

    fn classes(source: &str) -> Vec<TokenClass> {
        lex(source).into_iter().map(|t| t.class).collect()
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(lex("").is_empty());
        assert!(lex("  \n\t\r\n  ").is_empty());
    }

    #[test]
    fn test_words_and_positions() {
        let tokens = lex("int  x\n  y");
        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 6));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
        assert_eq!(tokens[0].class, TokenClass::KeyType);
        assert_eq!(tokens[1].class, TokenClass::DefWord);
        assert_eq!(tokens[2].span, Span::new(9, 10));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = lex("é x");
        assert_eq!(tokens[1].column, 3);
        assert_eq!(tokens[1].span, Span::new(3, 4));
    }

    #[test]
    fn test_rune_runs_split_greedily() {
        assert_eq!(texts("a>==b"), vec!["a", ">==", "b"]);
        assert_eq!(texts("a=-1"), vec!["a", "=", "-", "1"]);
        assert_eq!(texts("/;;/"), vec!["/;", ";/"]);
        assert_eq!(texts("x++;"), vec!["x", "++", ";"]);
        assert_eq!(texts("f(a,b)"), vec!["f", "(", "a", ",", "b", ")"]);
    }

    #[test]
    fn test_group_classes() {
        assert_eq!(
            classes("/; ;; ( , + ;"),
            vec![
                TokenClass::Delimiter,
                TokenClass::Delimiter,
                TokenClass::Delimiter,
                TokenClass::InlineSeparator,
                TokenClass::Augment,
                TokenClass::LineSeparator,
            ]
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(texts("a # b c ;\nd"), vec!["a", "d"]);
        assert_eq!(texts("a+ #=;\nb"), vec!["a", "+", "b"]);
        let tokens = lex("# note\nx");
        assert_eq!((tokens[0].line, tokens[0].column), (2, 1));
    }

    #[test]
    fn test_hybrid_markers_are_not_line_comments() {
        // `;#` is one group that closes a code section and opens a comment.
        assert_eq!(texts("a;#\nb"), vec!["a", ";/"]);
        assert_eq!(texts("a;# b #;c"), vec!["a", ";/", "/;", "c"]);
    }

    #[test]
    fn test_preprocessor_context() {
        let tokens = lex(":include \"a.tnsl\"\n;include");
        assert_eq!(tokens[1].class, TokenClass::PreWord);
        assert_eq!(tokens[4].class, TokenClass::DefWord);

        let tokens = lex("/: if x :/ ;if");
        assert_eq!(tokens[1].class, TokenClass::PreWord);
        assert_eq!(tokens[5].class, TokenClass::Keyword);
    }

    #[test]
    fn test_trailing_word_is_flushed() {
        assert_eq!(texts("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_quote_ends_word() {
        assert_eq!(texts("x\"s\""), vec!["x", "\"s\""]);
    }
}
