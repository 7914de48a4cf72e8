//! Syntax tree for TNSL.
//!
//! The tree is homogeneous: every element is a [`Node`] made of a closed [`NodeKind`], the token the
//! node was built from, and ordered children. Consumers dispatch on the kind; the tag strings
//! (`block`, `bdef`, `vlist`, ...) only appear through [`NodeKind::tag`] and the renderers.
//!
//! ## Notes
//! - A `Block` node's first child is always its `Bdef` header.
//! - Chained sections (`;;`, `;:`, `::`, `:;`) are extra `Block`/`PreBlock` children of the first
//!   section's node, never siblings.
//! - Nodes are built bottom-up once per parse and are not mutated afterwards.

use crate::lexer::Token;
use tnsl_core::lang::keywords;

/// Byte range of a token in its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Kind of a syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // ========== Structure ==========
    /// File root; the token text is the file label.
    Root,
    /// `/; ... ;/` code block or one chained code section.
    Block,
    /// Block header.
    Bdef,
    /// `/: ... :/` preprocessor block or one chained preprocessor section.
    PreBlock,
    /// `:word args` preprocessor directive; the token is the directive word.
    Directive,
    /// Directive argument leaf.
    Argument,
    /// Header keyword: modifiers (`export`, `inline`, `raw`, `override`), control names (`if`,
    /// `loop`, ...), and `operator`/`module`/`method` carrying their operand as a child.
    Keyword,
    /// Operator overloaded by an `operator` block.
    OperatorName,

    // ========== Statements ==========
    /// `type name, name = value`.
    Define,
    /// Bare value used as a statement.
    ValueStatement,
    Return,
    Break,
    Continue,
    Struct,
    Enum,
    Goto,
    Label,
    Alloc,
    Salloc,
    Realloc,
    Delete,
    Asm,

    // ========== Values ==========
    /// Binary operator; children `[lhs, rhs]`.
    Binary,
    /// Prefix operator; child is the operand.
    PreOp,
    /// Postfix operator; child is the operand.
    PostOp,
    /// `callee(args)`; children `[callee, ValueList]`.
    Call,
    /// `target{value}`; children `[target, value]`.
    Index,
    /// `value[types]`; children `[value, TypeList]`.
    Cast,
    /// `{a, b}` composite literal.
    Composite,
    /// User-defined word used as a value or a name.
    Ident,
    /// Number, string, character, or literal word.
    Literal,

    // ========== Types ==========
    /// Type descriptor.
    Type,
    /// `const`, `volatile`, or `static`.
    Qualifier,
    /// `~` prefix.
    Pointer,
    /// `{}` or `{len}` prefix.
    Array,
    /// Leading module segment of a dotted type path.
    PathSegment,
    /// Base type name (built-in or user-defined).
    TypeName,
    /// Trailing `` ` `` on a parameter type.
    BackRef,

    // ========== Lists ==========
    ValueList,
    ParamList,
    TypeList,
    /// Statements inside the `(...)`/`[...]` of a control block header.
    StatementList,
}

impl NodeKind {
    /// Stable tag string for the kind.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Block => "block",
            NodeKind::Bdef => "bdef",
            NodeKind::PreBlock => "preblock",
            NodeKind::Directive => "directive",
            NodeKind::Argument => "arg",
            NodeKind::Keyword => "keyword",
            NodeKind::OperatorName => "opname",
            NodeKind::Define => "define",
            NodeKind::ValueStatement => "value",
            NodeKind::Return => "return",
            NodeKind::Break => "break",
            NodeKind::Continue => "continue",
            NodeKind::Struct => "struct",
            NodeKind::Enum => "enum",
            NodeKind::Goto => "goto",
            NodeKind::Label => "label",
            NodeKind::Alloc => "alloc",
            NodeKind::Salloc => "salloc",
            NodeKind::Realloc => "realloc",
            NodeKind::Delete => "delete",
            NodeKind::Asm => "asm",
            NodeKind::Binary => "binary",
            NodeKind::PreOp => "preop",
            NodeKind::PostOp => "postop",
            NodeKind::Call => "call",
            NodeKind::Index => "index",
            NodeKind::Cast => "cast",
            NodeKind::Composite => "comp",
            NodeKind::Ident => "ident",
            NodeKind::Literal => "literal",
            NodeKind::Type => "type",
            NodeKind::Qualifier => "qualifier",
            NodeKind::Pointer => "~",
            NodeKind::Array => "{}",
            NodeKind::PathSegment => "path",
            NodeKind::TypeName => "typename",
            NodeKind::BackRef => "`",
            NodeKind::ValueList => "vlist",
            NodeKind::ParamList => "plist",
            NodeKind::TypeList => "tlist",
            NodeKind::StatementList => "slist",
        }
    }

    /// Return `true` if the node's token is source text worth showing next to the tag.
    ///
    /// Structural kinds carry a synthetic tag token whose text equals the tag.
    pub fn shows_text(self) -> bool {
        matches!(
            self,
            NodeKind::Root
                | NodeKind::Directive
                | NodeKind::Argument
                | NodeKind::Keyword
                | NodeKind::OperatorName
                | NodeKind::Binary
                | NodeKind::PreOp
                | NodeKind::PostOp
                | NodeKind::Ident
                | NodeKind::Literal
                | NodeKind::Qualifier
                | NodeKind::PathSegment
                | NodeKind::TypeName
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub token: Token,
    pub children: Vec<Node>,
}

impl Node {
    /// Construct a node without children.
    pub fn new(kind: NodeKind, token: Token) -> Self {
        Self {
            kind,
            token,
            children: Vec::new(),
        }
    }

    /// Construct a node with children.
    pub fn with_children(kind: NodeKind, token: Token, children: Vec<Node>) -> Self {
        Self { kind, token, children }
    }

    /// Construct a structural node whose token is the tag of `kind`, positioned at `anchor`.
    pub fn tagged(kind: NodeKind, anchor: &Token) -> Self {
        Self::new(kind, Token::tag(kind.tag(), anchor))
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Tag string of the node's kind.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Spelling of the node's token.
    pub fn text(&self) -> &str {
        &self.token.text
    }

    /// Return `true` if the node is of `kind`.
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// All children of `kind`.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Header of a `Block` node.
    pub fn header(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Block => self.children.first().filter(|c| c.kind == NodeKind::Bdef),
            _ => None,
        }
    }

    /// Name of a block: the user word naming it, its control keyword, or the operand of
    /// `operator`/`module`/`method`.
    pub fn block_name(&self) -> Option<&str> {
        self.header()?.children.iter().find_map(|c| match c.kind {
            NodeKind::Ident => Some(c.text()),
            NodeKind::Keyword if c.children.len() == 1 => Some(c.children[0].text()),
            NodeKind::Keyword => keywords::from_str(c.text())
                .filter(|id| keywords::is_control_block(*id))
                .map(|_| c.text()),
            _ => None,
        })
    }
}
