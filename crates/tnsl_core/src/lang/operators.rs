//! Operator vocabulary.
//!
//! This module defines the canonical operator set (rune operators like `+` and the word operators
//! `is` and `len`) along with their binding order and fixity.
//!
//! ## Notes
//! - `order` is the binary binding order: **lower binds tighter**. Member access (`.`) is `1` and
//!   assignment is `8`. Operators without an order never split a value into two operands.
//! - An operator may be usable in several positions: `-` is both binary subtraction and prefix
//!   negation, `++` is both a prefix and a postfix increment.
//!
//! ## Examples
//! ```rust
//! use tnsl_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::order(OperatorId::Star), Some(3));
//! assert!(operators::order(OperatorId::Plus) > operators::order(OperatorId::Star));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Access / type test
    Dot,
    Is,

    // Arithmetic
    Star,
    Slash,
    Plus,
    Minus,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    NotAmp,
    NotPipe,
    NotCaret,

    // Logic / comparison
    AndAnd,
    OrOr,
    EqEq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    NotEqEq,
    NotAndAnd,
    NotOrOr,
    NotGt,
    NotLt,

    // Assignment
    Assign,
    AmpEq,
    PipeEq,
    CaretEq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    TildeEq,
    BacktickEq,

    // Unary
    Bang,
    Tilde,
    Backtick,
    Inc,
    Dec,
    Len,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binary binding order; lower binds tighter.
    pub order: Option<u8>,
    pub prefix: bool,
    pub postfix: bool,
    pub is_word: bool,
}

/// Binding order of member access.
pub const ORDER_ACCESS: u8 = 1;
/// Binding order of the `is` type test.
pub const ORDER_TYPE_TEST: u8 = 2;
/// Binding order of multiplication and division.
pub const ORDER_MULTIPLICATIVE: u8 = 3;
/// Binding order of addition and subtraction.
pub const ORDER_ADDITIVE: u8 = 4;
/// Binding order of modulo.
pub const ORDER_MODULO: u8 = 5;
/// Binding order of the bitwise operators.
pub const ORDER_BITWISE: u8 = 6;
/// Binding order of logic, equality, and relational operators.
pub const ORDER_LOGIC: u8 = 7;
/// Binding order of assignment (loosest).
pub const ORDER_ASSIGN: u8 = 8;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Access / type test
    binary(OperatorId::Dot, ".", ORDER_ACCESS),
    word(OperatorId::Is, "is", Some(ORDER_TYPE_TEST), false),
    // Arithmetic
    binary(OperatorId::Star, "*", ORDER_MULTIPLICATIVE),
    binary(OperatorId::Slash, "/", ORDER_MULTIPLICATIVE),
    binary(OperatorId::Plus, "+", ORDER_ADDITIVE),
    op(OperatorId::Minus, "-", Some(ORDER_ADDITIVE), true, false),
    binary(OperatorId::Percent, "%", ORDER_MODULO),
    // Bitwise
    binary(OperatorId::Amp, "&", ORDER_BITWISE),
    binary(OperatorId::Pipe, "|", ORDER_BITWISE),
    binary(OperatorId::Caret, "^", ORDER_BITWISE),
    binary(OperatorId::Shl, "<<", ORDER_BITWISE),
    binary(OperatorId::Shr, ">>", ORDER_BITWISE),
    binary(OperatorId::NotAmp, "!&", ORDER_BITWISE),
    binary(OperatorId::NotPipe, "!|", ORDER_BITWISE),
    binary(OperatorId::NotCaret, "!^", ORDER_BITWISE),
    // Logic / comparison
    binary(OperatorId::AndAnd, "&&", ORDER_LOGIC),
    binary(OperatorId::OrOr, "||", ORDER_LOGIC),
    binary(OperatorId::EqEq, "==", ORDER_LOGIC),
    binary(OperatorId::NotEq, "!=", ORDER_LOGIC),
    binary(OperatorId::Gt, ">", ORDER_LOGIC),
    binary(OperatorId::Lt, "<", ORDER_LOGIC),
    binary(OperatorId::GtEq, ">==", ORDER_LOGIC),
    binary(OperatorId::LtEq, "<==", ORDER_LOGIC),
    binary(OperatorId::NotEqEq, "!==", ORDER_LOGIC),
    binary(OperatorId::NotAndAnd, "!&&", ORDER_LOGIC),
    binary(OperatorId::NotOrOr, "!||", ORDER_LOGIC),
    binary(OperatorId::NotGt, "!>", ORDER_LOGIC),
    binary(OperatorId::NotLt, "!<", ORDER_LOGIC),
    // Assignment
    binary(OperatorId::Assign, "=", ORDER_ASSIGN),
    binary(OperatorId::AmpEq, "&=", ORDER_ASSIGN),
    binary(OperatorId::PipeEq, "|=", ORDER_ASSIGN),
    binary(OperatorId::CaretEq, "^=", ORDER_ASSIGN),
    binary(OperatorId::PlusEq, "+=", ORDER_ASSIGN),
    binary(OperatorId::MinusEq, "-=", ORDER_ASSIGN),
    binary(OperatorId::StarEq, "*=", ORDER_ASSIGN),
    binary(OperatorId::SlashEq, "/=", ORDER_ASSIGN),
    binary(OperatorId::PercentEq, "%=", ORDER_ASSIGN),
    binary(OperatorId::TildeEq, "~=", ORDER_ASSIGN),
    binary(OperatorId::BacktickEq, "`=", ORDER_ASSIGN),
    // Unary
    op(OperatorId::Bang, "!", None, true, false),
    op(OperatorId::Tilde, "~", None, true, false),
    op(OperatorId::Backtick, "`", None, false, true),
    op(OperatorId::Inc, "++", None, true, true),
    op(OperatorId::Dec, "--", None, true, true),
    word(OperatorId::Len, "len", None, true),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Binary binding order (lower binds tighter), if the operator is binary.
pub fn order(id: OperatorId) -> Option<u8> {
    info_for(id).order
}

/// Return `true` if the operator may prefix an operand.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Return `true` if the operator may follow an operand.
pub fn is_postfix(id: OperatorId) -> bool {
    info_for(id).postfix
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve a spelling to its operator id.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, order: Option<u8>, prefix: bool, postfix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        order,
        prefix,
        postfix,
        is_word: false,
    }
}

const fn binary(id: OperatorId, spelling: &'static str, order: u8) -> OperatorInfo {
    op(id, spelling, Some(order), false, false)
}

const fn word(id: OperatorId, spelling: &'static str, order: Option<u8>, prefix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        order,
        prefix,
        postfix: false,
        is_word: true,
    }
}
