//! Command vocabulary tables — the closed set of recognized comment
//! commands and their classification.

use crate::enums::InlineCommandRenderKind;

/// Block commands introducing a paragraph of text.
pub const BLOCK_COMMANDS: &[&str] = &[
    "attention",
    "author",
    "authors",
    "brief",
    "bug",
    "copyright",
    "date",
    "deprecated",
    "details",
    "invariant",
    "note",
    "par",
    "post",
    "pre",
    "remark",
    "result",
    "return",
    "returns",
    "sa",
    "see",
    "short",
    "since",
    "todo",
    "version",
    "warning",
];

/// Block commands that consume one word argument before their paragraph.
pub const ARG_BLOCK_COMMANDS: &[&str] = &["exception", "throw", "throws"];

/// Commands whose paragraph serves as the comment abstract.
pub const BRIEF_COMMANDS: &[&str] = &["brief", "short"];

/// Commands whose paragraph documents the return value.
pub const RETURNS_COMMANDS: &[&str] = &["result", "return", "returns"];

/// Verbatim block openers and their terminators.
pub const VERBATIM_BLOCK_COMMANDS: &[(&str, &str)] =
    &[("code", "endcode"), ("verbatim", "endverbatim")];

/// One-line verbatim commands (declaration headers and friends); their
/// trailing text is preserved literally and never re-wrapped.
pub const VERBATIM_LINE_COMMANDS: &[&str] = &[
    "class",
    "enum",
    "fn",
    "function",
    "interface",
    "method",
    "namespace",
    "overload",
    "property",
    "struct",
    "typedef",
    "union",
    "var",
];

/// Inline commands with their rendering hints.
pub const INLINE_COMMANDS: &[(&str, InlineCommandRenderKind)] = &[
    ("a", InlineCommandRenderKind::Emphasized),
    ("anchor", InlineCommandRenderKind::Normal),
    ("b", InlineCommandRenderKind::Bold),
    ("c", InlineCommandRenderKind::Monospaced),
    ("e", InlineCommandRenderKind::Emphasized),
    ("em", InlineCommandRenderKind::Emphasized),
    ("p", InlineCommandRenderKind::Monospaced),
    ("ref", InlineCommandRenderKind::Normal),
];

/// How a line-leading command is handled by the block classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLevel {
    /// Generic named command; `args` words are consumed before the
    /// paragraph starts.
    Block { args: usize },
    Param,
    TParam,
    VerbatimBlock { terminator: &'static str },
    VerbatimLine,
}

/// Classify a command name as block-level, or `None` for inline and
/// unknown names (which stay part of the paragraph text).
pub fn classify(name: &str) -> Option<BlockLevel> {
    if name == "param" {
        return Some(BlockLevel::Param);
    }
    if name == "tparam" {
        return Some(BlockLevel::TParam);
    }
    if let Some(&(_, terminator)) = VERBATIM_BLOCK_COMMANDS.iter().find(|(open, _)| *open == name) {
        return Some(BlockLevel::VerbatimBlock { terminator });
    }
    if VERBATIM_LINE_COMMANDS.contains(&name) {
        return Some(BlockLevel::VerbatimLine);
    }
    if ARG_BLOCK_COMMANDS.contains(&name) {
        return Some(BlockLevel::Block { args: 1 });
    }
    if BLOCK_COMMANDS.contains(&name) {
        return Some(BlockLevel::Block { args: 0 });
    }
    None
}

pub fn inline_render_kind(name: &str) -> Option<InlineCommandRenderKind> {
    INLINE_COMMANDS
        .iter()
        .find(|(cmd, _)| *cmd == name)
        .map(|&(_, kind)| kind)
}
