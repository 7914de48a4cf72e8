//! Parser for the TNSL language.
//!
//! Builds the homogeneous syntax tree from a token stream. Blocks and statements are parsed by
//! recursive descent over a cursor; values and types are parsed over bounded token ranges, with
//! binary operators split at the loosest-binding operator in range.
//!
//! ## Examples
//!
//! ```rust
//! use tnsl_syntax::ast::NodeKind;
//! use tnsl_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex(";int x = 1 + 2\n");
//! let root = parser::build_tree(&tokens, "demo.tnsl").unwrap();
//! assert_eq!(root.children[0].kind, NodeKind::Define);
//! ```

use crate::ast::{Node, NodeKind};
use crate::diagnostics::CompileError;
use crate::lexer::Token;
use tnsl_core::lang::TokenClass;
use tnsl_core::lang::groups::{self, GroupId, GroupRole, SectionKind};
use tnsl_core::lang::keywords::{self, KeywordId};
use tnsl_core::lang::operators::{self, OperatorId};
use tnsl_core::lang::preproc::{self, PreWordId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/types.rs");
include!("parser/lists.rs");
include!("parser/stmts.rs");
include!("parser/blocks.rs");
include!("parser/preproc.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
