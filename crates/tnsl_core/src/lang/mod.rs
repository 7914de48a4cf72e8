//! TNSL language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved words, reserved runes and
//! rune groups, preprocessor words, and operators.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser.
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`, `GroupId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no tree types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings, token classes, and binding orders.

pub mod classes;
pub mod classify;
pub mod groups;
pub mod keywords;
pub mod operators;
pub mod preproc;
pub mod runes;

pub use classes::TokenClass;
