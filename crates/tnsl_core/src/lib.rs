//! Provide the canonical TNSL vocabulary and the pure token classifier.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed tables the lexer and
//! parser agree on: reserved words, reserved runes, multi-rune groups, preprocessor words, and
//! operator binding orders.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - Classification is a pure lookup; context (such as “inside a preprocessor directive”) is passed in by the caller.
//!
//! ## Examples
//! ```rust
//! use tnsl_core::lang::{classify, TokenClass};
//!
//! assert_eq!(classify::classify_rune(';'), Some(TokenClass::LineSeparator));
//! assert_eq!(classify::classify_group("/;"), Some(TokenClass::Delimiter));
//! assert_eq!(classify::classify_word("int", false), TokenClass::KeyType);
//! ```

pub mod lang;
