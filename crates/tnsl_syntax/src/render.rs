//! Rendering of token streams and syntax trees.
//!
//! This is the serialization boundary: node kinds become their tag strings here and nowhere else.
//!
//! ## Formats
//! - Text: one entry per line. Trees are indented two spaces per level and each line reads
//!   `tag [text] [@line:column]`.
//! - JSON: `serde_json` values. Tree nodes are `{tag, class, text, line, column, children}`,
//!   tokens are `{class, text, line, column}`.
//!
//! ## Examples
//! ```rust
//! use tnsl_syntax::{lexer, parser, render};
//!
//! let tokens = lexer::lex(";x = 1\n");
//! let root = parser::build_tree(&tokens, "a.tnsl").unwrap();
//! assert!(render::tree_text(&root).starts_with("root a.tnsl\n"));
//! ```

use serde_json::{Value, json};

use crate::ast::Node;
use crate::lexer::Token;

/// Output writer that tracks indentation.
struct TextWriter {
    output: String,
    indent_level: usize,
}

impl TextWriter {
    const INDENT_WIDTH: usize = 2;

    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write one indented line.
    fn writeln(&mut self, line: &str) {
        self.output.push_str(&" ".repeat(self.indent_level * Self::INDENT_WIDTH));
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn finish(self) -> String {
        self.output
    }
}

// ============================================================================
// Trees
// ============================================================================

/// Render a tree as indented text.
pub fn tree_text(root: &Node) -> String {
    let mut w = TextWriter::new();
    write_node(&mut w, root);
    w.finish()
}

fn write_node(w: &mut TextWriter, node: &Node) {
    let mut line = node.tag().to_string();
    if node.kind.shows_text() {
        line.push(' ');
        line.push_str(node.text());
    }
    if node.token.has_position() {
        line.push_str(&format!(" @{}:{}", node.token.line, node.token.column));
    }
    w.writeln(&line);

    w.indent();
    for child in &node.children {
        write_node(w, child);
    }
    w.dedent();
}

/// Render a tree as a JSON value.
pub fn tree_json(root: &Node) -> Value {
    let children: Vec<Value> = root.children.iter().map(tree_json).collect();
    json!({
        "tag": root.tag(),
        "class": root.token.class.as_str(),
        "text": root.text(),
        "line": root.token.line,
        "column": root.token.column,
        "children": children,
    })
}

// ============================================================================
// Tokens
// ============================================================================

/// Render tokens as text, one per line: `line:column CLASS text`.
pub fn tokens_text(tokens: &[Token]) -> String {
    let mut w = TextWriter::new();
    for t in tokens {
        w.writeln(&format!("{}:{} {} {}", t.line, t.column, t.class, t.text));
    }
    w.finish()
}

/// Render tokens as a JSON array.
pub fn tokens_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|t| {
                json!({
                    "class": t.class.as_str(),
                    "text": t.text,
                    "line": t.line,
                    "column": t.column,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer, parser};

    fn tree(source: &str) -> Node {
        parser::build_tree(&lexer::lex(source), "t.tnsl").unwrap()
    }

    #[test]
    fn test_tree_text_indents_children() {
        let text = tree_text(&tree(";x = 1"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root t.tnsl",
                "  value @1:2",
                "    binary = @1:4",
                "      ident x @1:2",
                "      literal 1 @1:6",
            ]
        );
    }

    #[test]
    fn test_tree_text_block() {
        let text = tree_text(&tree("/; main\n;return\n;/"));
        insta::assert_snapshot!(text, @r"
        root t.tnsl
          block @1:1
            bdef @1:1
              ident main @1:4
            return @2:2
        ");
    }

    #[test]
    fn test_tree_json_shape() {
        let value = tree_json(&tree(";int a"));
        assert_eq!(value["tag"], "root");
        assert_eq!(value["class"], "ROOT");
        assert_eq!(value["line"], 0);

        let define = &value["children"][0];
        assert_eq!(define["tag"], "define");
        assert_eq!(define["class"], "TAG");
        assert_eq!(define["children"][0]["tag"], "type");
        assert_eq!(define["children"][0]["children"][0]["text"], "int");
        assert_eq!(define["children"][1]["children"][0]["text"], "a");
        assert_eq!(define["children"][1]["children"][0]["column"], 6);
    }

    #[test]
    fn test_tokens_text() {
        let text = tokens_text(&lexer::lex(";int x\n"));
        assert_eq!(text, "1:1 LINESEP ;\n1:2 KEYTYPE int\n1:6 DEFWORD x\n");
    }

    #[test]
    fn test_tokens_json() {
        let value = tokens_json(&lexer::lex("a+1"));
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], json!({"class": "AUGMENT", "text": "+", "line": 1, "column": 2}));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(tokens_text(&[]), "");
        assert_eq!(tokens_json(&[]), json!([]));
    }
}
