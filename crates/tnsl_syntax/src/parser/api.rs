/// Build the syntax tree of a whole file.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `tnsl_syntax::lexer`.
/// - `label`: Text of the root token, usually the file path.
///
/// ## Errors
/// Returns the first grammar violation as a [`CompileError`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), label = label))]
pub fn build_tree(tokens: &[Token], label: &str) -> Result<Node, CompileError> {
    build_tree_with_config(tokens, label, ParserConfig::default())
}

/// [`build_tree`] with explicit parser settings.
pub fn build_tree_with_config(tokens: &[Token], label: &str, config: ParserConfig) -> Result<Node, CompileError> {
    let root = Parser::with_config(tokens, config).build_tree(label)?;
    tracing::debug!(items = root.children.len(), nodes = root.size(), "built syntax tree");
    Ok(root)
}

/// Parse the value starting at `start`, searching no further than `end`.
///
/// The value stops at a line separator, a block marker, a depth-0 `,`, or an unmatched closer.
/// An unmatched closer is not an error here: `a }` yields `a` and the index of `}`, and the caller
/// decides whether that closer belongs to an enclosing construct. `build_tree` rejects it at
/// statement level.
///
/// ## Returns
/// - The value node and the index of the token that ended it (or `end`).
#[tracing::instrument(level = "trace", skip(tokens))]
pub fn parse_value(tokens: &[Token], start: usize, end: usize) -> Result<(Node, usize), CompileError> {
    let mut parser = Parser::new(tokens);
    let stop = parser.value_extent(start, end)?;
    let node = parser.value(start, stop)?;
    Ok((node, stop))
}

/// Parse the type starting at `start`, not reading past `end`.
///
/// ## Returns
/// - The `Type` node and the index of the first token after it.
#[tracing::instrument(level = "trace", skip(tokens))]
pub fn parse_type(
    tokens: &[Token],
    start: usize,
    end: usize,
    in_parameter_context: bool,
) -> Result<(Node, usize), CompileError> {
    Parser::new(tokens).type_at(start, end.min(tokens.len()), in_parameter_context)
}

/// Return `true` if a type parses at `start` and is immediately followed by a user word.
///
/// `int x = 1` is a definition; `x = 1` is not.
pub fn is_definition(tokens: &[Token], start: usize, end: usize) -> bool {
    Parser::new(tokens).is_definition_at(start, end.min(tokens.len()))
}
