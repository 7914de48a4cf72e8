//! Token classes.
//!
//! Every lexical token belongs to exactly one of nine classes. Two further classes exist only on
//! synthetic tokens created by the parser (the tree root marker and tag tokens such as `block`).

use std::fmt;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `;`, `:` and `#`.
    LineSeparator,
    /// `,`.
    InlineSeparator,
    /// Brackets and the block/comment/redefinition rune groups.
    Delimiter,
    /// Operators (“augments”), including the word operators `is` and `len`.
    Augment,
    /// Numbers, strings, characters, and the literal words `true`, `false`, `self`, `super`.
    Literal,
    /// Built-in type keywords such as `int` or `void`.
    KeyType,
    /// Preprocessor directive words (only inside preprocessor context).
    PreWord,
    /// Reserved keywords.
    Keyword,
    /// User-defined words: variables, methods, types, modules.
    DefWord,

    // ========== Synthetic (never produced by the lexer) ==========
    /// Marker class of the tree root token.
    Root,
    /// Class of parser-created tag tokens (`block`, `bdef`, `value`, ...).
    Tag,
}

impl TokenClass {
    /// Stable short name used when tokens are serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::LineSeparator => "LINESEP",
            TokenClass::InlineSeparator => "INLNSEP",
            TokenClass::Delimiter => "DELIMIT",
            TokenClass::Augment => "AUGMENT",
            TokenClass::Literal => "LITERAL",
            TokenClass::KeyType => "KEYTYPE",
            TokenClass::PreWord => "PREWORD",
            TokenClass::Keyword => "KEYWORD",
            TokenClass::DefWord => "DEFWORD",
            TokenClass::Root => "ROOT",
            TokenClass::Tag => "TAG",
        }
    }

    /// Return `true` for the classes the lexer can produce.
    pub fn is_lexical(self) -> bool {
        !matches!(self, TokenClass::Root | TokenClass::Tag)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
