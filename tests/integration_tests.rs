//! Integration tests for the TNSL front end

use std::fs;
use std::path::{Path, PathBuf};

use tnsl::ast::{Node, NodeKind};
use tnsl::diagnostics::CompileError;
use tnsl::{lexer, parser, render};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "tnsl"))
        .collect();
    paths.sort();
    paths
}

fn fixture(kind: &str, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(kind)
        .join(name)
}

/// Helper to run the whole front end on a source file
fn parse_file(path: &Path) -> Result<Node, CompileError> {
    let tokens = lexer::tokenize(path);
    parser::build_tree(&tokens, &path.to_string_lossy())
}

/// Test that all valid fixtures parse
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = parse_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse, got: {}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce a positioned syntax error
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let Err(err) = parse_file(&path) else {
            panic!("Expected {} to fail, but it parsed", path.display());
        };
        assert!(
            err.position.is_some(),
            "Expected a position in the error for {}: {}",
            path.display(),
            err
        );
    }
}

mod tree_shape_tests {
    use super::*;

    #[test]
    fn test_hello_main_block() {
        let root = parse_file(&fixture("valid", "hello.tnsl")).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].kind, NodeKind::Directive);

        let main = &root.children[1];
        assert_eq!(main.block_name(), Some("main"));
        let body: Vec<NodeKind> = main.children.iter().skip(1).map(|c| c.kind).collect();
        assert_eq!(body, vec![NodeKind::Define, NodeKind::Block, NodeKind::Return]);

        let lp = &main.children[2];
        assert_eq!(lp.block_name(), Some("loop"));
        let header = lp.header().unwrap();
        assert_eq!(header.children_of(NodeKind::StatementList).count(), 2);
    }

    #[test]
    fn test_if_chain_is_single_block() {
        let root = parse_file(&fixture("valid", "control.tnsl")).unwrap();
        let check = &root.children[0];
        let chain = &check.children[1];
        assert_eq!(chain.block_name(), Some("if"));

        let sections: Vec<Option<&str>> = chain.children_of(NodeKind::Block).map(Node::block_name).collect();
        assert_eq!(sections, vec![Some("elif"), Some("else")]);
    }

    #[test]
    fn test_method_block_contains_operator() {
        let root = parse_file(&fixture("valid", "structs.tnsl")).unwrap();
        let kinds: Vec<NodeKind> = root.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Struct, NodeKind::Enum, NodeKind::Block]);

        let method = &root.children[2];
        assert_eq!(method.block_name(), Some("Vec2"));
        let names: Vec<Option<&str>> = method.children_of(NodeKind::Block).map(Node::block_name).collect();
        assert_eq!(names, vec![Some("add"), Some("+")]);
    }

    #[test]
    fn test_block_comments_removed() {
        let root = parse_file(&fixture("valid", "comments.tnsl")).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].kind, NodeKind::Define);
        assert_eq!(root.children[1].block_name(), Some("main"));
    }

    #[test]
    fn test_preprocessor_chain_markers() {
        let root = parse_file(&fixture("valid", "chains.tnsl")).unwrap();
        assert_eq!(root.children.len(), 1);

        let head = &root.children[0];
        assert_eq!(head.kind, NodeKind::PreBlock);
        let kinds: Vec<NodeKind> = head.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Directive, NodeKind::PreBlock, NodeKind::Block]);
        assert_eq!(head.children[2].block_name(), Some("main"));
        assert_eq!(parser::include_paths(&root), vec!["a.tnsl"]);
    }

    #[test]
    fn test_long_unary_run_is_rejected_not_overflowed() {
        let source = format!(";x = {}a\n", "!".repeat(200_000));
        let tokens = lexer::lex(&source);
        let err = parser::build_tree(&tokens, "unary.tnsl").unwrap_err();
        assert_eq!(err.kind, tnsl::diagnostics::ErrorKind::Limit);
    }

    #[test]
    fn test_include_paths() {
        let root = parse_file(&fixture("valid", "preproc.tnsl")).unwrap();
        assert_eq!(parser::include_paths(&root), vec!["a.tnsl", "b.tnsl"]);

        let root = parse_file(&fixture("valid", "hello.tnsl")).unwrap();
        assert_eq!(parser::include_paths(&root), vec!["io.tnsl"]);
    }

    #[test]
    fn test_rendered_tree() {
        let tokens = lexer::lex(";int x = a + b * c\n");
        let root = parser::build_tree(&tokens, "snippet.tnsl").unwrap();
        insta::assert_snapshot!(render::tree_text(&root), @r"
        root snippet.tnsl
          define @1:2
            type @1:2
              typename int @1:2
            vlist @1:6
              binary = @1:8
                ident x @1:6
                binary + @1:12
                  ident a @1:10
                  binary * @1:16
                    ident b @1:14
                    ident c @1:18
        ");
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_stray_closer_names_token_and_position() {
        let err = parse_file(&fixture("invalid", "stray_closer.tnsl")).unwrap_err();
        assert!(err.message.contains("`}`"), "{}", err.message);
        assert!(err.message.contains("line 1, column 8"), "{}", err.message);
    }

    #[test]
    fn test_unclosed_block_reports_end_of_input() {
        let err = parse_file(&fixture("invalid", "unclosed_block.tnsl")).unwrap_err();
        assert!(err.message.contains("unexpected end of input"), "{}", err.message);
    }

    #[test]
    fn test_missing_parameter_type() {
        let err = parse_file(&fixture("invalid", "missing_param_type.tnsl")).unwrap_err();
        assert!(err.message.contains("expected type before first parameter"), "{}", err.message);
    }

    #[test]
    fn test_missing_file_lexes_to_nothing() {
        let tokens = lexer::tokenize(fixture("valid", "does_not_exist.tnsl"));
        assert!(tokens.is_empty());
    }
}

mod cli_tests {
    use super::*;
    use tnsl::cli::commands::{self, WriteOptions};
    use tnsl::cli::{OutputFormat, WriteLevel};

    fn out_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tnsl_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_process_file_writes_tree() {
        let out = out_path("tree.tnt");
        let options = WriteOptions {
            level: WriteLevel::Tree,
            format: OutputFormat::Text,
            max_depth: parser::DEFAULT_MAX_DEPTH,
        };
        commands::process_file(&fixture("valid", "memory.tnsl"), &out, options).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let _ = fs::remove_file(&out);
        assert!(written.starts_with("root "));
        assert!(written.contains("  block @1:1\n"));
        assert!(written.contains("asm @7:6\n"));
    }

    #[test]
    fn test_process_file_writes_token_json() {
        let out = out_path("tokens.json");
        let options = WriteOptions {
            level: WriteLevel::Tokens,
            format: OutputFormat::Json,
            max_depth: parser::DEFAULT_MAX_DEPTH,
        };
        commands::process_file(&fixture("invalid", "stray_closer.tnsl"), &out, options).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let _ = fs::remove_file(&out);
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        let tokens = value.as_array().unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[4]["text"], "}");
        assert_eq!(tokens[4]["class"], "DELIMIT");
    }

    #[test]
    fn test_process_file_reports_syntax_error() {
        let out = out_path("never_written.tnt");
        let options = WriteOptions {
            level: WriteLevel::Tree,
            format: OutputFormat::Text,
            max_depth: parser::DEFAULT_MAX_DEPTH,
        };
        let err = commands::process_file(&fixture("invalid", "bad_directive.tnsl"), &out, options).unwrap_err();
        assert_eq!(err.exit_code, tnsl::cli::ExitCode::FAILURE);
        assert!(!out.exists());
    }
}
