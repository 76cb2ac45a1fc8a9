//! Shared decomposition of a full comment into renderable sections.

use crate::model::{CommentNode, FullComment};
use crate::parser::commands;

/// Sections of a full comment, as both renderers consume them.
pub(crate) struct Parts<'a> {
    /// Paragraph serving as the abstract: the explicit brief command's
    /// paragraph, or the first free paragraph when no brief exists.
    pub brief: Option<&'a CommentNode>,
    pub params: Vec<&'a CommentNode>,
    pub tparams: Vec<&'a CommentNode>,
    /// First returns-family block command.
    pub returns: Option<&'a CommentNode>,
    /// Remaining blocks, in comment order.
    pub discussion: Vec<&'a CommentNode>,
}

pub(crate) fn split(comment: &FullComment) -> Parts<'_> {
    let mut brief = None;
    let mut returns = None;
    let mut params = Vec::new();
    let mut tparams = Vec::new();
    let mut discussion = Vec::new();

    for child in comment.children() {
        match child {
            CommentNode::BlockCommand { name, .. }
                if brief.is_none() && commands::BRIEF_COMMANDS.contains(&name.as_str()) =>
            {
                brief = child.paragraph();
            }
            CommentNode::BlockCommand { name, .. }
                if returns.is_none() && commands::RETURNS_COMMANDS.contains(&name.as_str()) =>
            {
                returns = Some(child);
            }
            CommentNode::ParamCommand { .. } => params.push(child),
            CommentNode::TParamCommand { .. } => tparams.push(child),
            _ => discussion.push(child),
        }
    }

    if brief.is_none() {
        if let Some(pos) = discussion
            .iter()
            .position(|n| n.is_paragraph() && !paragraph_is_blank(n))
        {
            brief = Some(discussion.remove(pos));
        }
    }

    Parts {
        brief,
        params,
        tparams,
        returns,
        discussion,
    }
}

/// True when a paragraph contains nothing but whitespace text.
pub(crate) fn paragraph_is_blank(para: &CommentNode) -> bool {
    para.children().iter().all(|c| match c {
        CommentNode::Text { text } => text.trim().is_empty(),
        _ => false,
    })
}

/// Reconstruct the source form of an HTML tag node.
pub(crate) fn html_tag_source(node: &CommentNode) -> Option<String> {
    match node {
        CommentNode::HtmlStartTag {
            name,
            attrs,
            self_closing,
        } => {
            let mut out = format!("<{}", name);
            for (attr, value) in attrs {
                if value.is_empty() {
                    out.push_str(&format!(" {}", attr));
                } else {
                    out.push_str(&format!(" {}=\"{}\"", attr, value));
                }
            }
            if *self_closing {
                out.push('/');
            }
            out.push('>');
            Some(out)
        }
        CommentNode::HtmlEndTag { name } => Some(format!("</{}>", name)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclInfo;
    use crate::parser;

    #[test]
    fn explicit_brief_keeps_first_paragraph_in_discussion() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// \\brief Aaa.\n///\n/// Bbb.", &decl);
        let parts = split(&comment);
        assert!(parts.brief.is_some());
        assert_eq!(parts.discussion.len(), 1);
        assert!(parts.discussion[0].is_paragraph());
    }

    #[test]
    fn first_paragraph_serves_as_brief_when_none_declared() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// Blah blah.\n///\n/// More.", &decl);
        let parts = split(&comment);
        assert!(parts.brief.is_some());
        assert_eq!(parts.discussion.len(), 1);
    }

    #[test]
    fn second_returns_command_falls_to_discussion() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// \\returns One.\n/// \\returns Two.", &decl);
        let parts = split(&comment);
        assert!(parts.returns.is_some());
        assert_eq!(parts.discussion.len(), 1);
    }

    #[test]
    fn html_tag_round_trip() {
        let start = CommentNode::HtmlStartTag {
            name: "a".to_string(),
            attrs: vec![("href".to_string(), "x.html".to_string())],
            self_closing: false,
        };
        assert_eq!(html_tag_source(&start).unwrap(), "<a href=\"x.html\">");
        let end = CommentNode::HtmlEndTag {
            name: "a".to_string(),
        };
        assert_eq!(html_tag_source(&end).unwrap(), "</a>");
    }
}
