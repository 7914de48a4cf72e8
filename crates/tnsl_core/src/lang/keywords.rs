//! Define the reserved word vocabulary for TNSL.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records the spelling, the
//! token class the word lexes to, and a documentation category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Not every reserved word lexes as [`TokenClass::Keyword`]: built-in types are
//!   [`TokenClass::KeyType`], `true`/`false`/`self`/`super` are literals, and `is`/`len` are
//!   word operators ([`TokenClass::Augment`]).
//! - `elif` is reserved so the parser can name the merged `else if` header token.
//!
//! ## Examples
//! ```rust
//! use tnsl_core::lang::keywords::{self, KeywordId};
//! use tnsl_core::lang::TokenClass;
//!
//! assert_eq!(keywords::from_str("loop"), Some(KeywordId::Loop));
//! assert_eq!(keywords::class(KeywordId::Uint8), TokenClass::KeyType);
//! assert_eq!(keywords::as_str(KeywordId::SelfKw), "self");
//! ```

use super::classes::TokenClass;

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Built-in types
    Bool,
    Char,
    Charp,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Float32,
    Float64,
    Void,
    Type,

    // Declarations
    Struct,
    Interface,
    Enum,
    Extends,

    // Control flow
    Loop,
    Continue,
    Break,
    Return,
    Match,
    Case,
    Default,
    Label,
    Goto,
    If,
    Else,
    Elif,

    // Qualifiers
    Const,
    Static,
    Volatile,

    // Methods / structure
    Method,
    Override,
    Operator,
    Raw,
    Asm,
    Inline,
    Module,
    Export,

    // Memory
    Alloc,
    Salloc,
    Realloc,
    Delete,

    // Literal words
    True,
    False,
    SelfKw,
    Super,

    // Word operators
    Is,
    Len,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    BuiltinType,
    Declaration,
    ControlFlow,
    Qualifier,
    Structure,
    Memory,
    Literal,
    Operator,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub class: TokenClass,
    pub category: KeywordCategory,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Built-in types
    keytype(KeywordId::Bool, "bool"),
    keytype(KeywordId::Char, "char"),
    keytype(KeywordId::Charp, "charp"),
    keytype(KeywordId::Int, "int"),
    keytype(KeywordId::Int8, "int8"),
    keytype(KeywordId::Int16, "int16"),
    keytype(KeywordId::Int32, "int32"),
    keytype(KeywordId::Int64, "int64"),
    keytype(KeywordId::Uint, "uint"),
    keytype(KeywordId::Uint8, "uint8"),
    keytype(KeywordId::Uint16, "uint16"),
    keytype(KeywordId::Uint32, "uint32"),
    keytype(KeywordId::Uint64, "uint64"),
    keytype(KeywordId::Float, "float"),
    keytype(KeywordId::Float32, "float32"),
    keytype(KeywordId::Float64, "float64"),
    keytype(KeywordId::Void, "void"),
    keytype(KeywordId::Type, "type"),
    // Declarations
    keyword(KeywordId::Struct, "struct", KeywordCategory::Declaration),
    keyword(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    keyword(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    keyword(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    // Control flow
    keyword(KeywordId::Loop, "loop", KeywordCategory::ControlFlow),
    keyword(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    keyword(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    keyword(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    keyword(KeywordId::Match, "match", KeywordCategory::ControlFlow),
    keyword(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    keyword(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    keyword(KeywordId::Label, "label", KeywordCategory::ControlFlow),
    keyword(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    keyword(KeywordId::If, "if", KeywordCategory::ControlFlow),
    keyword(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    keyword(KeywordId::Elif, "elif", KeywordCategory::ControlFlow),
    // Qualifiers
    keyword(KeywordId::Const, "const", KeywordCategory::Qualifier),
    keyword(KeywordId::Static, "static", KeywordCategory::Qualifier),
    keyword(KeywordId::Volatile, "volatile", KeywordCategory::Qualifier),
    // Methods / structure
    keyword(KeywordId::Method, "method", KeywordCategory::Structure),
    keyword(KeywordId::Override, "override", KeywordCategory::Structure),
    keyword(KeywordId::Operator, "operator", KeywordCategory::Structure),
    keyword(KeywordId::Raw, "raw", KeywordCategory::Structure),
    keyword(KeywordId::Asm, "asm", KeywordCategory::Structure),
    keyword(KeywordId::Inline, "inline", KeywordCategory::Structure),
    keyword(KeywordId::Module, "module", KeywordCategory::Structure),
    keyword(KeywordId::Export, "export", KeywordCategory::Structure),
    // Memory
    keyword(KeywordId::Alloc, "alloc", KeywordCategory::Memory),
    keyword(KeywordId::Salloc, "salloc", KeywordCategory::Memory),
    keyword(KeywordId::Realloc, "realloc", KeywordCategory::Memory),
    keyword(KeywordId::Delete, "delete", KeywordCategory::Memory),
    // Literal words
    literal(KeywordId::True, "true"),
    literal(KeywordId::False, "false"),
    literal(KeywordId::SelfKw, "self"),
    literal(KeywordId::Super, "super"),
    // Word operators
    word_operator(KeywordId::Is, "is"),
    word_operator(KeywordId::Len, "len"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Token class the word lexes to.
pub fn class(id: KeywordId) -> TokenClass {
    info_for(id).class
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` for the type qualifiers `const`, `volatile` and `static`.
pub fn is_qualifier(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Qualifier
}

/// Return `true` for keywords that name a control-flow block (`/; if`, `/; loop`, ...).
///
/// The parenthesized and bracketed lists of these blocks hold statements rather than parameters
/// and return types.
pub fn is_control_block(id: KeywordId) -> bool {
    matches!(
        id,
        KeywordId::If
            | KeywordId::Elif
            | KeywordId::Else
            | KeywordId::Loop
            | KeywordId::Match
            | KeywordId::Case
            | KeywordId::Default
    )
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, class: TokenClass, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        class,
        category,
    }
}

const fn keytype(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    info(id, canonical, TokenClass::KeyType, KeywordCategory::BuiltinType)
}

const fn keyword(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    info(id, canonical, TokenClass::Keyword, category)
}

const fn literal(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    info(id, canonical, TokenClass::Literal, KeywordCategory::Literal)
}

const fn word_operator(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    info(id, canonical, TokenClass::Augment, KeywordCategory::Operator)
}
