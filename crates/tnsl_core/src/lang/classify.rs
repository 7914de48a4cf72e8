//! Token classification.
//!
//! Pure lookups mapping a rune, a rune group, or a word to its [`TokenClass`]. The lexer calls
//! these while scanning; nothing here keeps state.

use super::classes::TokenClass;
use super::groups::{self, GroupRole, SectionKind};
use super::keywords;
use super::operators::{self, OPERATORS};
use super::preproc;
use super::runes;

/// Classify a single reserved rune.
///
/// ## Returns
/// - `Some(class)` if `ch` is reserved, `None` if it may be part of a word.
pub fn classify_rune(ch: char) -> Option<TokenClass> {
    runes::info(ch).map(|r| r.class)
}

/// Classify a rune group by exact match.
///
/// A one-rune text falls back to [`classify_rune`]. Longer texts must be a structural group
/// (always [`TokenClass::Delimiter`]) or a multi-rune operator ([`TokenClass::Augment`]).
pub fn classify_group(text: &str) -> Option<TokenClass> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return None,
        (Some(ch), None) => return classify_rune(ch),
        _ => {}
    }

    if groups::from_str(text).is_some() {
        return Some(TokenClass::Delimiter);
    }

    match operators::from_str(text) {
        Some(id) if !operators::info_for(id).is_word => Some(TokenClass::Augment),
        _ => None,
    }
}

/// Classify an accumulated word.
///
/// ## Notes
/// - Reserved words resolve through the keyword registry, which records their class.
/// - In preprocessor context a preprocessor word wins over a reserved word of the same spelling,
///   so `:if` and `:else` are directives.
/// - Anything else is a user-defined word.
pub fn classify_word(text: &str, in_preprocessor_context: bool) -> TokenClass {
    if in_preprocessor_context && preproc::from_str(text).is_some() {
        return TokenClass::PreWord;
    }

    match keywords::from_str(text) {
        Some(id) => keywords::class(id),
        None => TokenClass::DefWord,
    }
}

/// Length, in runes, of the longest multi-rune group.
///
/// The lexer uses this as its scan window when splitting a run of reserved runes.
pub fn max_group_len() -> usize {
    let structural = groups::GROUPS.iter().map(|g| g.canonical.chars().count());
    let operators = OPERATORS
        .iter()
        .filter(|o| !o.is_word)
        .map(|o| o.spelling.chars().count());
    structural.chain(operators).max().unwrap_or(1)
}

/// Effect of a separator or group on the lexer's preprocessor context.
///
/// ## Returns
/// - `Some(true)` if the marker enters preprocessor context (`:`, `/:`, `::`, `;:`, `#:`).
/// - `Some(false)` if it returns to code context (`;`, `/;`, `;;`, `:;`, `#;`, and the closers).
/// - `None` if it does not affect the context.
pub fn preprocessor_context_after(text: &str) -> Option<bool> {
    match text {
        ":" => return Some(true),
        ";" => return Some(false),
        _ => {}
    }

    let info = groups::info_for(groups::from_str(text)?);
    match (info.role, info.opens) {
        (_, Some(SectionKind::Preprocessor)) => Some(true),
        (_, Some(SectionKind::Code)) => Some(false),
        (GroupRole::Close, _) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runes() {
        assert_eq!(classify_rune('('), Some(TokenClass::Delimiter));
        assert_eq!(classify_rune(','), Some(TokenClass::InlineSeparator));
        assert_eq!(classify_rune('#'), Some(TokenClass::LineSeparator));
        assert_eq!(classify_rune('`'), Some(TokenClass::Augment));
        assert_eq!(classify_rune('a'), None);
        assert_eq!(classify_rune('"'), None);
    }

    #[test]
    fn test_groups() {
        assert_eq!(classify_group(";/"), Some(TokenClass::Delimiter));
        assert_eq!(classify_group("#:"), Some(TokenClass::Delimiter));
        assert_eq!(classify_group("!=="), Some(TokenClass::Augment));
        assert_eq!(classify_group("++"), Some(TokenClass::Augment));
        assert_eq!(classify_group("="), Some(TokenClass::Augment));
        assert_eq!(classify_group("=+"), None);
        assert_eq!(classify_group("len"), None);
        assert_eq!(classify_group(""), None);
    }

    #[test]
    fn test_words() {
        assert_eq!(classify_word("uint64", false), TokenClass::KeyType);
        assert_eq!(classify_word("return", false), TokenClass::Keyword);
        assert_eq!(classify_word("true", false), TokenClass::Literal);
        assert_eq!(classify_word("len", false), TokenClass::Augment);
        assert_eq!(classify_word("counter", false), TokenClass::DefWord);
        assert_eq!(classify_word("include", false), TokenClass::DefWord);
        assert_eq!(classify_word("include", true), TokenClass::PreWord);
        assert_eq!(classify_word("if", false), TokenClass::Keyword);
        assert_eq!(classify_word("if", true), TokenClass::PreWord);
        assert_eq!(classify_word("int", true), TokenClass::KeyType);
    }

    #[test]
    fn test_max_group_len() {
        assert_eq!(max_group_len(), 3);
    }

    #[test]
    fn test_preprocessor_context() {
        assert_eq!(preprocessor_context_after(":"), Some(true));
        assert_eq!(preprocessor_context_after("/:"), Some(true));
        assert_eq!(preprocessor_context_after(";:"), Some(true));
        assert_eq!(preprocessor_context_after(";"), Some(false));
        assert_eq!(preprocessor_context_after(":/"), Some(false));
        assert_eq!(preprocessor_context_after(":;"), Some(false));
        assert_eq!(preprocessor_context_after("/#"), None);
        assert_eq!(preprocessor_context_after("+"), None);
    }
}
