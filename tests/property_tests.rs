//! Property-based tests for the TNSL front end
//!
//! These tests use proptest to verify lexer and parser invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use tnsl::lexer;
use tnsl::parser;
use tnsl_core::lang::TokenClass;
use tnsl_core::lang::keywords;

/// Source text without `#`, so no token is dropped or respelled by comment handling.
fn plain_source() -> impl Strategy<Value = String> {
    "[a-z0-9 _;:(){}\\[\\],.+*=<>!~`\"'\n-]{0,60}"
}

proptest! {
    /// Property: whitespace-only input produces no tokens
    #[test]
    fn whitespace_lexes_to_nothing(source in "[ \t\r\n]{0,40}") {
        prop_assert!(lexer::lex(&source).is_empty());
    }

    /// Property: every token's span covers exactly its text
    #[test]
    fn spans_cover_token_text(source in plain_source()) {
        for tok in lexer::lex(&source) {
            prop_assert_eq!(&source[tok.span.start..tok.span.end], tok.text.as_str());
        }
    }

    /// Property: tokens come out in source order
    #[test]
    fn tokens_are_ordered(source in plain_source()) {
        let tokens = lexer::lex(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
            prop_assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
        }
    }

    /// Property: no token is empty and every token has a lexical class
    #[test]
    fn tokens_are_lexical(source in "\\PC{0,60}") {
        for tok in lexer::lex(&source) {
            prop_assert!(!tok.text.is_empty());
            prop_assert!(tok.class.is_lexical());
            prop_assert!(tok.line >= 1 && tok.column >= 1);
        }
    }

    /// Property: an unsigned decimal is a single literal token
    #[test]
    fn decimals_are_single_literals(int in 0u32..1_000_000, frac in 0u32..1000) {
        let text = format!("{int}.{frac}");
        let tokens = lexer::lex(&text);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].class, TokenClass::Literal);
        prop_assert_eq!(&tokens[0].text, &text);
    }

    /// Property: an unreserved word is a single user word
    #[test]
    fn words_are_defwords(word in "[a-z_][a-z0-9_]{0,10}") {
        prop_assume!(keywords::from_str(&word).is_none());
        let tokens = lexer::lex(&word);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].class, TokenClass::DefWord);
    }

    /// Property: the parser returns (tree or error) on any input without panicking
    #[test]
    fn parser_never_panics(source in "\\PC{0,80}") {
        let tokens = lexer::lex(&source);
        let _ = parser::build_tree(&tokens, "fuzz.tnsl");
    }

    /// Property: the parser never panics on token-dense input either
    #[test]
    fn parser_never_panics_on_structure(source in plain_source()) {
        let tokens = lexer::lex(&source);
        if let Err(err) = parser::build_tree(&tokens, "fuzz.tnsl") {
            prop_assert!(!err.message.is_empty());
        }
    }
}
