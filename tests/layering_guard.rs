//! Layering guardrails between the workspace members.
//!
//! - `tnsl_core` holds pure tables and must stay dependency-free.
//! - `tnsl_syntax` is a library; CLI and logging-backend crates belong to the root package only.

/// Crate names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/tnsl_core/Cargo.toml"));
    assert!(deps.is_empty(), "`tnsl_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_cli_crates() {
    let deps = dependencies(include_str!("../crates/tnsl_syntax/Cargo.toml"));
    for forbidden in ["tnsl", "clap", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in tnsl_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "tnsl_core"));
}

#[test]
fn root_uses_syntax_through_path_dependency() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tnsl_syntax"));
    assert!(deps.iter().any(|d| d == "tnsl_core"));
}
