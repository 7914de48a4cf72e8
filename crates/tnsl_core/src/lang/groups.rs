//! Structural rune groups.
//!
//! TNSL delimits code blocks, preprocessor blocks, and block comments with two-rune groups rather
//! than keywords or braces. The groups also express *redefinition*: closing one block section and
//! opening the next section of the same logical block in a single marker (`;;` joins an `if` to its
//! `else`).
//!
//! ## Examples
//! ```rust
//! use tnsl_core::lang::groups::{self, GroupId, GroupRole};
//!
//! assert_eq!(groups::from_str(";;"), Some(GroupId::CodeRedef));
//! assert_eq!(groups::role(GroupId::BlockClose), GroupRole::Close);
//! ```

/// Stable identifier for each structural group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    /// `/;`
    BlockOpen,
    /// `;/`
    BlockClose,
    /// `/:`
    PreOpen,
    /// `:/`
    PreClose,
    /// `/#`
    CommentOpen,
    /// `#/`
    CommentClose,
    /// `;;`
    CodeRedef,
    /// `::`
    PreRedef,
    /// `;:`
    CodeToPre,
    /// `:;`
    PreToCode,
    /// `;#`: close a code section and open a comment.
    CodeCommentOpen,
    /// `:#`: close a preprocessor section and open a comment.
    PreCommentOpen,
    /// `#;`: close a comment and open a code section.
    CodeCommentClose,
    /// `#:`: close a comment and open a preprocessor section.
    PreCommentClose,
}

/// What a group does to the block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRole {
    Open,
    Close,
    Redefine,
    Comment,
}

/// Which kind of section a group opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Code,
    Preprocessor,
    Comment,
}

/// Metadata for a structural group.
#[derive(Debug, Clone, Copy)]
pub struct GroupInfo {
    pub id: GroupId,
    pub canonical: &'static str,
    pub role: GroupRole,
    /// Section kind closed by the group, if any.
    pub closes: Option<SectionKind>,
    /// Section kind opened by the group, if any.
    pub opens: Option<SectionKind>,
}

/// Registry of all structural groups.
pub const GROUPS: &[GroupInfo] = &[
    group(GroupId::BlockOpen, "/;", GroupRole::Open, None, Some(SectionKind::Code)),
    group(GroupId::BlockClose, ";/", GroupRole::Close, Some(SectionKind::Code), None),
    group(GroupId::PreOpen, "/:", GroupRole::Open, None, Some(SectionKind::Preprocessor)),
    group(GroupId::PreClose, ":/", GroupRole::Close, Some(SectionKind::Preprocessor), None),
    group(GroupId::CommentOpen, "/#", GroupRole::Comment, None, Some(SectionKind::Comment)),
    group(GroupId::CommentClose, "#/", GroupRole::Comment, Some(SectionKind::Comment), None),
    group(
        GroupId::CodeRedef,
        ";;",
        GroupRole::Redefine,
        Some(SectionKind::Code),
        Some(SectionKind::Code),
    ),
    group(
        GroupId::PreRedef,
        "::",
        GroupRole::Redefine,
        Some(SectionKind::Preprocessor),
        Some(SectionKind::Preprocessor),
    ),
    group(
        GroupId::CodeToPre,
        ";:",
        GroupRole::Redefine,
        Some(SectionKind::Code),
        Some(SectionKind::Preprocessor),
    ),
    group(
        GroupId::PreToCode,
        ":;",
        GroupRole::Redefine,
        Some(SectionKind::Preprocessor),
        Some(SectionKind::Code),
    ),
    group(
        GroupId::CodeCommentOpen,
        ";#",
        GroupRole::Comment,
        Some(SectionKind::Code),
        Some(SectionKind::Comment),
    ),
    group(
        GroupId::PreCommentOpen,
        ":#",
        GroupRole::Comment,
        Some(SectionKind::Preprocessor),
        Some(SectionKind::Comment),
    ),
    group(
        GroupId::CodeCommentClose,
        "#;",
        GroupRole::Comment,
        Some(SectionKind::Comment),
        Some(SectionKind::Code),
    ),
    group(
        GroupId::PreCommentClose,
        "#:",
        GroupRole::Comment,
        Some(SectionKind::Comment),
        Some(SectionKind::Preprocessor),
    ),
];

/// Canonical spelling.
pub fn as_str(id: GroupId) -> &'static str {
    info_for(id).canonical
}

/// Role of the group.
pub fn role(id: GroupId) -> GroupRole {
    info_for(id).role
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: GroupId) -> &'static GroupInfo {
    GROUPS.iter().find(|g| g.id == id).expect("group info missing")
}

/// Resolve a spelling to its group id.
pub fn from_str(s: &str) -> Option<GroupId> {
    GROUPS.iter().find(|g| g.canonical == s).map(|g| g.id)
}

/// Return `true` for groups that structure code/preprocessor blocks (everything but comment markers).
///
/// Values and statements always end before one of these.
pub fn is_block_marker(id: GroupId) -> bool {
    role(id) != GroupRole::Comment
}

/// Return `true` if the group opens a block comment (`/#`, `;#`, `:#`).
pub fn opens_comment(id: GroupId) -> bool {
    info_for(id).opens == Some(SectionKind::Comment)
}

/// Return `true` if the group closes a block comment (`#/`, `#;`, `#:`).
pub fn closes_comment(id: GroupId) -> bool {
    info_for(id).closes == Some(SectionKind::Comment)
}

const fn group(
    id: GroupId,
    canonical: &'static str,
    role: GroupRole,
    closes: Option<SectionKind>,
    opens: Option<SectionKind>,
) -> GroupInfo {
    GroupInfo {
        id,
        canonical,
        role,
        closes,
        opens,
    }
}
