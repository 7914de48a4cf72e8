//! Small helper APIs for working with [`Token`].
//!
//! These helpers resolve token text against the `tnsl_core` registries so the parser can match on
//! stable ids instead of raw strings.

use crate::lexer::Token;
use tnsl_core::lang::groups::{self, GroupId};
use tnsl_core::lang::keywords::{self, KeywordId};
use tnsl_core::lang::operators::{self, OperatorId};
use tnsl_core::lang::TokenClass;

impl Token {
    /// Return `true` if the token has the given class.
    pub fn is_class(&self, class: TokenClass) -> bool {
        self.class == class
    }

    /// Return the keyword id, if this is a reserved word of any class.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.class {
            TokenClass::Keyword | TokenClass::KeyType | TokenClass::Literal | TokenClass::Augment => {
                keywords::from_str(&self.text)
            }
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.class == TokenClass::Keyword && self.text == keywords::as_str(id)
    }

    /// Return the operator id, if this is an augment token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.class {
            TokenClass::Augment => operators::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the structural group id, if this is a multi-rune delimiter.
    pub fn group_id(&self) -> Option<GroupId> {
        match self.class {
            TokenClass::Delimiter => groups::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given structural group.
    pub fn is_group(&self, id: GroupId) -> bool {
        self.group_id() == Some(id)
    }

    /// Return `true` for block markers (open, close, and redefinition groups).
    pub fn is_block_marker(&self) -> bool {
        self.group_id().is_some_and(groups::is_block_marker)
    }

    /// Return `true` if this is the single-rune delimiter `ch`.
    pub fn is_delim(&self, ch: char) -> bool {
        self.class == TokenClass::Delimiter && self.text.len() == 1 && self.text.starts_with(ch)
    }

    /// Return `true` for the line separators `;` (`ch == ';'`) or `:` (`ch == ':'`).
    pub fn is_line_sep(&self, ch: char) -> bool {
        self.class == TokenClass::LineSeparator && self.text.len() == 1 && self.text.starts_with(ch)
    }

    /// Return `true` for `(`, `[` and `{`.
    pub fn is_opener(&self) -> bool {
        self.is_delim('(') || self.is_delim('[') || self.is_delim('{')
    }

    /// Return `true` for `)`, `]` and `}`.
    pub fn is_closer(&self) -> bool {
        self.is_delim(')') || self.is_delim(']') || self.is_delim('}')
    }

    /// Return `true` if the token can end an operand, so an operator after it is binary.
    pub fn ends_operand(&self) -> bool {
        match self.class {
            TokenClass::Literal | TokenClass::DefWord | TokenClass::KeyType => true,
            TokenClass::Delimiter => self.is_closer(),
            TokenClass::Augment => self.operator_id().is_some_and(operators::is_postfix),
            _ => false,
        }
    }
}

/// Closing delimiter matching an opener.
pub fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}
