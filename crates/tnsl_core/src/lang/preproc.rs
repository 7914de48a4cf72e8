//! Preprocessor directive words.
//!
//! These words only have meaning inside preprocessor context (after `:` or inside a `/: ... :/`
//! block). Outside that context they lex as ordinary user words or, for `if`/`else`, as keywords.

/// Stable identifier for preprocessor directive words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreWordId {
    Include,
    Define,
    Extern,
    Size,
    Align,
    Address,
    Rootfile,
    If,
    Else,
    Abi,
    Using,
}

/// Registry of preprocessor words: `(id, spelling)`.
pub const PREWORDS: &[(PreWordId, &str)] = &[
    (PreWordId::Include, "include"),
    (PreWordId::Define, "define"),
    (PreWordId::Extern, "extern"),
    (PreWordId::Size, "size"),
    (PreWordId::Align, "align"),
    (PreWordId::Address, "address"),
    (PreWordId::Rootfile, "rootfile"),
    (PreWordId::If, "if"),
    (PreWordId::Else, "else"),
    (PreWordId::Abi, "abi"),
    (PreWordId::Using, "using"),
];

/// Resolve a spelling to its preprocessor word id.
pub fn from_str(s: &str) -> Option<PreWordId> {
    PREWORDS.iter().find(|(_, sp)| *sp == s).map(|(id, _)| *id)
}

/// Return the spelling of a preprocessor word.
pub fn as_str(id: PreWordId) -> &'static str {
    PREWORDS
        .iter()
        .find(|(p, _)| *p == id)
        .map(|(_, sp)| *sp)
        .unwrap_or_default()
}
