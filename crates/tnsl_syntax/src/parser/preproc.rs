/// Preprocessor directives and blocks.
///
/// - `:include "io.tnsl"` is a single directive: the directive word and its argument tokens.
/// - `/: include "a" define DEBUG 1 :/` is a block of directives, each starting at a
///   preprocessor word.
///
/// Arguments are kept as leaves; the world builder interprets them.
impl<'a> Parser<'a> {
    /// Parse the directive at the cursor (after its `:`).
    fn directive(&mut self) -> Result<Node, CompileError> {
        let i = self.pos;
        let Some(word) = self.tok(i).filter(|t| t.class == TokenClass::PreWord) else {
            return Err(self.expected(i, "a preprocessor directive after `:`"));
        };
        self.pos += 1;

        let mut node = Node::new(NodeKind::Directive, word.clone());
        while let Some(arg) = self.peek() {
            if arg.class == TokenClass::LineSeparator || arg.class == TokenClass::PreWord || arg.is_block_marker() {
                break;
            }
            node.push(Node::new(NodeKind::Argument, arg.clone()));
            self.pos += 1;
        }

        tracing::trace!(directive = %word.text, args = node.children.len(), "parsed directive");
        Ok(node)
    }

    /// Directives up to a terminator.
    fn pre_section(&mut self, anchor: usize) -> Result<Node, CompileError> {
        let mut block = Node::tagged(NodeKind::PreBlock, &self.tokens[anchor]);

        while !self.is_terminator(self.pos) {
            let Some(t) = self.peek() else {
                return Err(self.expected(self.pos, "`:/` to close the preprocessor block"));
            };
            if t.is_line_sep(':') {
                self.pos += 1;
                continue;
            }
            if t.class != TokenClass::PreWord {
                return Err(self.fail(self.pos, "expected a preprocessor directive"));
            }
            block.push(self.directive()?);
        }

        Ok(block)
    }
}

/// Unquoted `include` paths of the file's top-level directives, in source order.
///
/// Directives inside top-level preprocessor blocks count as top level.
pub fn include_paths(root: &Node) -> Vec<String> {
    let mut out = Vec::new();
    collect_includes(root, &mut out);
    out
}

fn collect_includes(node: &Node, out: &mut Vec<String>) {
    for child in &node.children {
        match child.kind {
            NodeKind::Directive if preproc::from_str(child.text()) == Some(PreWordId::Include) => {
                out.extend(
                    child
                        .children
                        .iter()
                        .filter(|arg| arg.token.class == TokenClass::Literal && arg.text().starts_with('"'))
                        .map(|arg| unquote(arg.text())),
                );
            }
            NodeKind::PreBlock => collect_includes(child, out),
            _ => {}
        }
    }
}

fn unquote(text: &str) -> String {
    let inner = text.strip_prefix('"').unwrap_or(text);
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}
