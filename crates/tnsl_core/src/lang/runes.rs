//! Reserved single runes.
//!
//! A reserved rune always terminates the word being accumulated by the lexer. Consecutive reserved
//! runes form a run that is re-segmented into rune groups (see [`crate::lang::groups`] and
//! [`crate::lang::operators`]).

use super::classes::TokenClass;

/// Metadata for a reserved rune.
#[derive(Debug, Clone, Copy)]
pub struct RuneInfo {
    pub rune: char,
    pub class: TokenClass,
    pub role: &'static str,
}

/// Registry of all reserved runes.
pub const RUNES: &[RuneInfo] = &[
    // Delimiters
    rune('(', TokenClass::Delimiter, "starting condition open"),
    rune(')', TokenClass::Delimiter, "starting condition close"),
    rune('[', TokenClass::Delimiter, "ending condition open"),
    rune(']', TokenClass::Delimiter, "ending condition close"),
    rune('{', TokenClass::Delimiter, "array/set open"),
    rune('}', TokenClass::Delimiter, "array/set close"),
    // Line separators
    rune(':', TokenClass::LineSeparator, "preprocessor directive"),
    rune(';', TokenClass::LineSeparator, "statement"),
    rune('#', TokenClass::LineSeparator, "line comment"),
    // Inline separator
    rune(',', TokenClass::InlineSeparator, "argument separator"),
    // Augments
    rune('=', TokenClass::Augment, "assignment"),
    rune('.', TokenClass::Augment, "member access"),
    rune('&', TokenClass::Augment, "bitwise and"),
    rune('|', TokenClass::Augment, "bitwise or"),
    rune('^', TokenClass::Augment, "bitwise xor"),
    rune('>', TokenClass::Augment, "greater than"),
    rune('<', TokenClass::Augment, "less than"),
    rune('!', TokenClass::Augment, "not"),
    rune('+', TokenClass::Augment, "addition"),
    rune('-', TokenClass::Augment, "subtraction"),
    rune('*', TokenClass::Augment, "multiplication"),
    rune('/', TokenClass::Augment, "division"),
    rune('%', TokenClass::Augment, "modulo"),
    rune('~', TokenClass::Augment, "address of"),
    rune('`', TokenClass::Augment, "dereference"),
];

/// Look up a reserved rune.
pub fn info(ch: char) -> Option<&'static RuneInfo> {
    RUNES.iter().find(|r| r.rune == ch)
}

const fn rune(rune: char, class: TokenClass, role: &'static str) -> RuneInfo {
    RuneInfo { rune, class, role }
}
