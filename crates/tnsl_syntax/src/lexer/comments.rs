//! Block comment stripping.
//!
//! Comments are removed after scanning so the scanner itself stays context free. The hybrid
//! markers close or open a block section in the same breath, so they leave the matching block
//! marker behind:
//!
//! | marker | emitted | effect |
//! |---|---|---|
//! | `/#` | nothing | open comment |
//! | `;#` | `;/` before | open comment |
//! | `:#` | `:/` before | open comment |
//! | `#/` | nothing | close comment |
//! | `#;` | `/;` after | close comment |
//! | `#:` | `/:` after | close comment |

use super::Token;
use tnsl_core::lang::groups::{self, GroupId};

pub(super) fn strip_block_comments(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut in_comment = false;

    for tok in tokens {
        let Some(id) = tok.group_id() else {
            if !in_comment {
                out.push(tok);
            }
            continue;
        };

        if groups::opens_comment(id) {
            match marker_before(id) {
                Some(closer) if !in_comment => out.push(tok.respelled(tok.class, groups::as_str(closer))),
                _ => {}
            }
            in_comment = true;
        } else if groups::closes_comment(id) {
            match marker_after(id) {
                Some(opener) => {
                    out.push(tok.respelled(tok.class, groups::as_str(opener)));
                    in_comment = false;
                }
                None if in_comment => in_comment = false,
                None => out.push(tok),
            }
        } else if !in_comment {
            out.push(tok);
        }
    }

    out
}

/// Block closer emitted in place of a hybrid comment opener.
fn marker_before(id: GroupId) -> Option<GroupId> {
    match id {
        GroupId::CodeCommentOpen => Some(GroupId::BlockClose),
        GroupId::PreCommentOpen => Some(GroupId::PreClose),
        _ => None,
    }
}

/// Block opener emitted in place of a hybrid comment closer.
fn marker_after(id: GroupId) -> Option<GroupId> {
    match id {
        GroupId::CodeCommentClose => Some(GroupId::BlockOpen),
        GroupId::PreCommentClose => Some(GroupId::PreOpen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;

    fn texts(source: &str) -> Vec<String> {
        lex(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_block_comment_removed() {
        assert_eq!(texts("a /# b c\n d #/ e"), vec!["a", "e"]);
    }

    #[test]
    fn test_nested_opener_is_dropped() {
        assert_eq!(texts("a /# b /# c #/ d"), vec!["a", "d"]);
        assert_eq!(texts("a /# b ;# c #/ d"), vec!["a", "d"]);
    }

    #[test]
    fn test_hybrid_markers() {
        assert_eq!(texts("x ;# note #; y"), vec!["x", ";/", "/;", "y"]);
        assert_eq!(texts("x :# note #: y"), vec!["x", ":/", "/:", "y"]);
    }

    #[test]
    fn test_stray_plain_closer_is_kept() {
        assert_eq!(texts("a #/ b"), vec!["a", "#/", "b"]);
    }

    #[test]
    fn test_reemitted_marker_keeps_position() {
        let tokens = lex("a\n  ;# c #;");
        assert_eq!(tokens[1].text, ";/");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn test_unclosed_comment_runs_to_end() {
        assert_eq!(texts("a /# b c"), vec!["a"]);
    }
}
