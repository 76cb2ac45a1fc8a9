//! XML renderer — single-line, fully-escaped document for IDE tooltips
//! and documentation extraction.
//!
//! Sections appear only when source data exists and always in the fixed
//! order Abstract, Parameters, TemplateParameters, ResultDiscussion,
//! Discussion. Parameter entries follow declaration order, not comment
//! order.

use crate::enums::{InlineCommandRenderKind, ParamCommandDirection};
use crate::model::{CommentNode, FullComment};
use crate::render::{parts, Renderer};

pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn render(&self, comment: &FullComment) -> String {
        if comment.is_null() {
            return String::new();
        }

        let decl = comment.decl();
        let parts = parts::split(comment);
        let root = decl.kind.xml_element();
        let mut out = String::new();

        out.push('<');
        out.push_str(root);
        if let Some(loc) = &decl.location {
            out.push_str(&format!(
                " file=\"{}\" line=\"{}\" column=\"{}\"",
                xml_escape(&loc.file),
                loc.line,
                loc.column
            ));
        }
        out.push('>');
        out.push_str(&format!("<Name>{}</Name>", xml_escape(&decl.name)));
        out.push_str(&format!("<USR>{}</USR>", xml_escape(&decl.usr)));
        out.push_str(&format!(
            "<Declaration>{}</Declaration>",
            xml_escape(&decl.declaration)
        ));

        if let Some(brief) = parts.brief {
            if !parts::paragraph_is_blank(brief) {
                out.push_str("<Abstract>");
                render_paragraph(&mut out, brief);
                out.push_str("</Abstract>");
            }
        }

        if !parts.params.is_empty() {
            out.push_str("<Parameters>");
            for param in declaration_order(&parts.params) {
                render_param(&mut out, param);
            }
            out.push_str("</Parameters>");
        }

        if !parts.tparams.is_empty() {
            out.push_str("<TemplateParameters>");
            for tparam in &parts.tparams {
                render_tparam(&mut out, tparam);
            }
            out.push_str("</TemplateParameters>");
        }

        if let Some(returns) = parts.returns {
            let mut body = String::new();
            render_block_body(&mut body, returns);
            if !body.is_empty() {
                out.push_str("<ResultDiscussion>");
                out.push_str(&body);
                out.push_str("</ResultDiscussion>");
            }
        }

        let mut discussion = String::new();
        for node in &parts.discussion {
            render_discussion_node(&mut discussion, node);
        }
        if !discussion.is_empty() {
            out.push_str("<Discussion>");
            out.push_str(&discussion);
            out.push_str("</Discussion>");
        }

        out.push_str(&format!("</{}>", root));
        out
    }

    fn file_extension(&self) -> &str {
        "xml"
    }
}

/// Bound parameters in declaration order, unresolved ones after in
/// comment order.
fn declaration_order<'a>(params: &[&'a CommentNode]) -> Vec<&'a CommentNode> {
    let mut ordered = params.to_vec();
    ordered.sort_by_key(|p| p.param_index().unwrap_or(usize::MAX));
    ordered
}

fn render_param(out: &mut String, param: &CommentNode) {
    out.push_str("<Parameter>");
    out.push_str(&format!(
        "<Name>{}</Name>",
        xml_escape(param.param_name().unwrap_or(""))
    ));
    if let Some(index) = param.param_index() {
        out.push_str(&format!("<Index>{}</Index>", index));
    }
    let explicit = if param.is_direction_explicit() { "1" } else { "0" };
    let direction = param
        .param_direction()
        .unwrap_or(ParamCommandDirection::In);
    out.push_str(&format!(
        "<Direction isExplicit=\"{}\">{}</Direction>",
        explicit,
        direction.as_str()
    ));
    render_command_discussion(out, param);
    out.push_str("</Parameter>");
}

fn render_tparam(out: &mut String, tparam: &CommentNode) {
    out.push_str("<Parameter>");
    out.push_str(&format!(
        "<Name>{}</Name>",
        xml_escape(tparam.tparam_name().unwrap_or(""))
    ));
    // Only a top-level position maps to a plain index.
    if tparam.tparam_depth() == Some(1) {
        if let Some(index) = tparam.tparam_index(0) {
            out.push_str(&format!("<Index>{}</Index>", index));
        }
    }
    render_command_discussion(out, tparam);
    out.push_str("</Parameter>");
}

fn render_command_discussion(out: &mut String, command: &CommentNode) {
    let mut body = String::new();
    render_block_body(&mut body, command);
    if !body.is_empty() {
        out.push_str("<Discussion>");
        out.push_str(&body);
        out.push_str("</Discussion>");
    }
}

/// Render every non-blank paragraph of a command node.
fn render_block_body(out: &mut String, command: &CommentNode) {
    for child in command.children() {
        if child.is_paragraph() && !parts::paragraph_is_blank(child) {
            render_paragraph(out, child);
        }
    }
}

fn render_discussion_node(out: &mut String, node: &CommentNode) {
    match node {
        CommentNode::Paragraph { .. } => {
            if !parts::paragraph_is_blank(node) {
                render_paragraph(out, node);
            }
        }
        CommentNode::BlockCommand { .. } => render_block_body(out, node),
        CommentNode::VerbatimBlock { name, children } => {
            let lines: Vec<&str> = children.iter().filter_map(|c| c.text()).collect();
            out.push_str(&format!(
                "<Verbatim xml:space=\"preserve\" kind=\"{}\">{}</Verbatim>",
                xml_escape(name),
                xml_escape(&lines.join("\n"))
            ));
        }
        // Verbatim lines carry declaration metadata, not discussion.
        _ => {}
    }
}

fn render_paragraph(out: &mut String, para: &CommentNode) {
    out.push_str("<Para>");
    for child in para.children() {
        match child {
            CommentNode::Text { text } => out.push_str(&xml_escape(text)),
            CommentNode::InlineCommand {
                render_kind, args, ..
            } => {
                let body = xml_escape(&args.join(" "));
                match render_kind {
                    InlineCommandRenderKind::Normal => out.push_str(&body),
                    InlineCommandRenderKind::Bold => {
                        out.push_str(&format!("<bold>{}</bold>", body));
                    }
                    InlineCommandRenderKind::Monospaced => {
                        out.push_str(&format!("<monospaced>{}</monospaced>", body));
                    }
                    InlineCommandRenderKind::Emphasized => {
                        out.push_str(&format!("<emphasized>{}</emphasized>", body));
                    }
                }
            }
            node if node.is_html_tag() => {
                if let Some(src) = parts::html_tag_source(node) {
                    out.push_str(&format!("<rawHTML>{}</rawHTML>", xml_escape(&src)));
                }
            }
            _ => {}
        }
    }
    out.push_str("</Para>");
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
