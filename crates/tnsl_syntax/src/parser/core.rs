// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, its configuration, and the tree root driver.
// It is `include!`'d into `crate::parser` to keep all parser methods in a single module
// while avoiding a single "god file".

/// Default nesting limit for values, types, and blocks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on binary operators chained at one binding order, summed over enclosing chains.
pub const DEFAULT_MAX_CHAIN: usize = 4096;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting of blocks, values, types, and unary operators before the parse is aborted.
    pub max_depth: usize,
    /// Most binary operators folded into left-leaning chains along one path of the tree.
    pub max_chain: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_chain: DEFAULT_MAX_CHAIN,
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser stops at the first violation; there is no recovery.
/// - `pos` is the cursor for block and statement parsing. Value and type parsing work on explicit
///   `[lo, hi)` token ranges and leave the cursor alone.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    chain: usize,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `tnsl_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Create a parser with explicit settings.
    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            chain: 0,
            config,
        }
    }

    /// Parse the whole token stream into a root node labelled `label`.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] found; no partial tree is produced.
    pub fn build_tree(mut self, label: &str) -> Result<Node, CompileError> {
        let mut root = Node::new(NodeKind::Root, Token::root(label));

        while self.peek().is_some() {
            if let Some(item) = self.item("unexpected token in file root")? {
                root.push(item);
            }
        }

        Ok(root)
    }

    /// Parse one top-level or block-body item at the cursor.
    ///
    /// Returns `None` for an empty statement.
    fn item(&mut self, context: &str) -> Result<Option<Node>, CompileError> {
        let Some(tok) = self.peek() else {
            return Err(self.expected(self.pos, "an item"));
        };

        if tok.is_group(GroupId::BlockOpen) {
            return self.section_chain(SectionKind::Code).map(Some);
        }
        if tok.is_group(GroupId::PreOpen) {
            return self.section_chain(SectionKind::Preprocessor).map(Some);
        }
        if tok.is_line_sep(';') {
            self.pos += 1;
            return self.statement();
        }
        if tok.is_line_sep(':') {
            self.pos += 1;
            return self.directive().map(Some);
        }
        if tok.is_closer() {
            return Err(self.fail(self.pos, "unexpected closing delimiter"));
        }

        Err(self.fail(self.pos, context))
    }
}
