//! Closed enumeration vocabularies with stable integer tags.
//!
//! Tags are part of the public contract: appending a value is backward
//! compatible, renumbering is not. Each enum exposes the same surface:
//! `tag()`, `from_tag()`, `name()`, and a `NAMES` table mapping symbolic
//! names to tags.

/// Kind of a token produced by the source tokenizer.
///
/// Carried for vocabulary completeness; nothing in this crate consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TokenKind {
    Punctuation = 0,
    Keyword = 1,
    Identifier = 2,
    Literal = 3,
    Comment = 4,
}

impl TokenKind {
    pub const NAMES: &'static [(&'static str, u32)] = &[
        ("PUNCTUATION", 0),
        ("KEYWORD", 1),
        ("IDENTIFIER", 2),
        ("LITERAL", 3),
        ("COMMENT", 4),
    ];

    pub fn tag(self) -> u32 {
        self as u32
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Punctuation),
            1 => Some(Self::Keyword),
            2 => Some(Self::Identifier),
            3 => Some(Self::Literal),
            4 => Some(Self::Comment),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].0
    }
}

/// Kind of a node in a parsed comment tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CommentKind {
    Null = 0,
    Text = 1,
    InlineCommand = 2,
    HtmlStartTag = 3,
    HtmlEndTag = 4,
    Paragraph = 5,
    BlockCommand = 6,
    ParamCommand = 7,
    TParamCommand = 8,
    VerbatimBlockCommand = 9,
    VerbatimBlockLine = 10,
    VerbatimLine = 11,
    FullComment = 12,
}

impl CommentKind {
    pub const NAMES: &'static [(&'static str, u32)] = &[
        ("NULL", 0),
        ("TEXT", 1),
        ("INLINE_COMMAND", 2),
        ("HTML_START_TAG", 3),
        ("HTML_END_TAG", 4),
        ("PARAGRAPH", 5),
        ("BLOCK_COMMAND", 6),
        ("PARAM_COMMAND", 7),
        ("TPARAM_COMMAND", 8),
        ("VERBATIM_BLOCK_COMMAND", 9),
        ("VERBATIM_BLOCK_LINE", 10),
        ("VERBATIM_LINE", 11),
        ("FULL_COMMENT", 12),
    ];

    pub fn tag(self) -> u32 {
        self as u32
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Null),
            1 => Some(Self::Text),
            2 => Some(Self::InlineCommand),
            3 => Some(Self::HtmlStartTag),
            4 => Some(Self::HtmlEndTag),
            5 => Some(Self::Paragraph),
            6 => Some(Self::BlockCommand),
            7 => Some(Self::ParamCommand),
            8 => Some(Self::TParamCommand),
            9 => Some(Self::VerbatimBlockCommand),
            10 => Some(Self::VerbatimBlockLine),
            11 => Some(Self::VerbatimLine),
            12 => Some(Self::FullComment),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].0
    }
}

/// Rendering hint attached to an inline command (`\b word`, `\c word`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum InlineCommandRenderKind {
    Normal = 0,
    Bold = 1,
    Monospaced = 2,
    Emphasized = 3,
}

impl InlineCommandRenderKind {
    pub const NAMES: &'static [(&'static str, u32)] = &[
        ("NORMAL", 0),
        ("BOLD", 1),
        ("MONOSPACED", 2),
        ("EMPHASIZED", 3),
    ];

    pub fn tag(self) -> u32 {
        self as u32
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::Normal),
            1 => Some(Self::Bold),
            2 => Some(Self::Monospaced),
            3 => Some(Self::Emphasized),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].0
    }
}

/// Semantic direction of a documented parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ParamCommandDirection {
    In = 0,
    Out = 1,
    InOut = 2,
}

impl ParamCommandDirection {
    pub const NAMES: &'static [(&'static str, u32)] = &[
        ("IN", 0),
        ("OUT", 1),
        ("IN_OUT", 2),
    ];

    pub fn tag(self) -> u32 {
        self as u32
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::In),
            1 => Some(Self::Out),
            2 => Some(Self::InOut),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].0
    }

    /// Lowercase form used by the comment syntax and the XML renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in,out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_kind_tags_are_stable() {
        assert_eq!(CommentKind::Null.tag(), 0);
        assert_eq!(CommentKind::Paragraph.tag(), 5);
        assert_eq!(CommentKind::TParamCommand.tag(), 8);
        assert_eq!(CommentKind::FullComment.tag(), 12);
    }

    #[test]
    fn from_tag_round_trips() {
        for &(_, tag) in CommentKind::NAMES {
            assert_eq!(CommentKind::from_tag(tag).unwrap().tag(), tag);
        }
        assert_eq!(CommentKind::from_tag(13), None);
        assert_eq!(TokenKind::from_tag(5), None);
        assert_eq!(InlineCommandRenderKind::from_tag(4), None);
        assert_eq!(ParamCommandDirection::from_tag(3), None);
    }

    #[test]
    fn names_match_tables() {
        assert_eq!(CommentKind::VerbatimBlockCommand.name(), "VERBATIM_BLOCK_COMMAND");
        assert_eq!(InlineCommandRenderKind::Monospaced.name(), "MONOSPACED");
        assert_eq!(ParamCommandDirection::InOut.name(), "IN_OUT");
        assert_eq!(TokenKind::Comment.name(), "COMMENT");
    }

    #[test]
    fn direction_comment_syntax_forms() {
        assert_eq!(ParamCommandDirection::In.as_str(), "in");
        assert_eq!(ParamCommandDirection::Out.as_str(), "out");
        assert_eq!(ParamCommandDirection::InOut.as_str(), "in,out");
    }
}
