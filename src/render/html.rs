//! HTML renderer — fragment markup for IDE tooltips.
//!
//! Produces a fragment, not a document. The brief paragraph leads,
//! followed by template parameter and parameter definition lists, the
//! returns paragraph, and the remaining discussion in comment order.
//! Verbatim line commands never appear; unknown block commands fall back
//! to their plain paragraph text.

use crate::enums::InlineCommandRenderKind;
use crate::model::{CommentNode, FullComment};
use crate::render::{parts, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, comment: &FullComment) -> String {
        if comment.is_null() {
            return String::new();
        }

        let parts = parts::split(comment);
        let mut out = String::new();

        if let Some(brief) = parts.brief {
            if !parts::paragraph_is_blank(brief) {
                out.push_str("<p class=\"para-brief\">");
                render_paragraph_inlines(&mut out, brief);
                out.push_str("</p>");
            }
        }

        if !parts.tparams.is_empty() {
            out.push_str("<dl>");
            for tparam in &parts.tparams {
                let class = tparam_index_class(tparam);
                out.push_str(&format!(
                    "<dt class=\"tparam-name-index-{}\">{}</dt>",
                    class,
                    html_escape(tparam.tparam_name().unwrap_or(""))
                ));
                out.push_str(&format!("<dd class=\"tparam-descr-index-{}\">", class));
                if let Some(para) = tparam.paragraph() {
                    render_paragraph_inlines(&mut out, para);
                }
                out.push_str("</dd>");
            }
            out.push_str("</dl>");
        }

        if !parts.params.is_empty() {
            out.push_str("<dl>");
            for param in &parts.params {
                let class = param_index_class(param);
                out.push_str(&format!(
                    "<dt class=\"param-name-index-{}\">{}</dt>",
                    class,
                    html_escape(param.param_name().unwrap_or(""))
                ));
                out.push_str(&format!("<dd class=\"param-descr-index-{}\">", class));
                if let Some(para) = param.paragraph() {
                    render_paragraph_inlines(&mut out, para);
                }
                out.push_str("</dd>");
            }
            out.push_str("</dl>");
        }

        if let Some(returns) = parts.returns {
            if let Some(para) = returns.paragraph() {
                if !parts::paragraph_is_blank(para) {
                    out.push_str(
                        "<p class=\"para-returns\"><span class=\"word-returns\">Returns</span> ",
                    );
                    render_paragraph_inlines(&mut out, para);
                    out.push_str("</p>");
                }
            }
        }

        for node in &parts.discussion {
            render_block(&mut out, node);
        }

        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn param_index_class(param: &CommentNode) -> String {
    match param.param_index() {
        Some(index) => index.to_string(),
        None => "invalid".to_string(),
    }
}

fn tparam_index_class(tparam: &CommentNode) -> String {
    match tparam.tparam_depth() {
        Some(1) => match tparam.tparam_index(0) {
            Some(index) => index.to_string(),
            None => "invalid".to_string(),
        },
        Some(_) => "other".to_string(),
        None => "invalid".to_string(),
    }
}

fn render_block(out: &mut String, node: &CommentNode) {
    match node {
        CommentNode::Paragraph { .. } => {
            if !parts::paragraph_is_blank(node) {
                out.push_str("<p>");
                render_paragraph_inlines(out, node);
                out.push_str("</p>");
            }
        }
        CommentNode::BlockCommand { .. } => {
            // Plain-text fallback: the command marker is dropped, its
            // paragraph stays.
            if let Some(para) = node.paragraph() {
                if !parts::paragraph_is_blank(para) {
                    out.push_str("<p>");
                    render_paragraph_inlines(out, para);
                    out.push_str("</p>");
                }
            }
        }
        CommentNode::VerbatimBlock { children, .. } => {
            let lines: Vec<&str> = children.iter().filter_map(|c| c.text()).collect();
            out.push_str(&format!("<pre>{}</pre>", html_escape(&lines.join("\n"))));
        }
        // Verbatim lines are declaration metadata, never output.
        _ => {}
    }
}

fn render_paragraph_inlines(out: &mut String, para: &CommentNode) {
    for child in para.children() {
        match child {
            CommentNode::Text { text } => out.push_str(&html_escape(text)),
            CommentNode::InlineCommand {
                render_kind, args, ..
            } => {
                let body = html_escape(&args.join(" "));
                match render_kind {
                    InlineCommandRenderKind::Normal => out.push_str(&body),
                    InlineCommandRenderKind::Bold => {
                        out.push_str(&format!("<b>{}</b>", body));
                    }
                    InlineCommandRenderKind::Monospaced => {
                        out.push_str(&format!("<tt>{}</tt>", body));
                    }
                    InlineCommandRenderKind::Emphasized => {
                        out.push_str(&format!("<em>{}</em>", body));
                    }
                }
            }
            node if node.is_html_tag() => {
                // Raw HTML in the comment passes through untouched.
                if let Some(src) = parts::html_tag_source(node) {
                    out.push_str(&src);
                }
            }
            _ => {}
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclInfo, TemplateParam};
    use crate::parser;

    #[test]
    fn brief_only_comment_is_one_paragraph() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// \\brief Does things.", &decl);
        assert_eq!(
            HtmlRenderer.render(&comment),
            "<p class=\"para-brief\"> Does things.</p>"
        );
    }

    #[test]
    fn params_render_as_definition_list() {
        let decl = DeclInfo::function("f").with_params(&["width", "height"]);
        let comment = parser::parse(
            "/// \\param height Height in pixels.\n/// \\param width Width in pixels.",
            &decl,
        );
        let html = HtmlRenderer.render(&comment);
        assert!(html.contains("<dt class=\"param-name-index-1\">height</dt>"));
        assert!(html.contains("<dt class=\"param-name-index-0\">width</dt>"));
        assert!(html.contains("<dd class=\"param-descr-index-0\"> Width in pixels."));
    }

    #[test]
    fn unresolved_param_class_is_invalid() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// \\param bogus Nope.", &decl);
        let html = HtmlRenderer.render(&comment);
        assert!(html.contains("<dt class=\"param-name-index-invalid\">bogus</dt>"));
    }

    #[test]
    fn nested_tparam_class_is_other() {
        let decl = DeclInfo::function("test").with_template_params(vec![
            TemplateParam::new("C"),
            TemplateParam::nested("TT", vec![TemplateParam::new("T")]),
        ]);
        let comment = parser::parse("/// \\tparam T A type.\n/// \\tparam C A class.", &decl);
        let html = HtmlRenderer.render(&comment);
        assert!(html.contains("<dt class=\"tparam-name-index-other\">T</dt>"));
        assert!(html.contains("<dt class=\"tparam-name-index-0\">C</dt>"));
    }

    #[test]
    fn returns_paragraph_carries_word_span() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// \\returns Eee.", &decl);
        assert_eq!(
            HtmlRenderer.render(&comment),
            "<p class=\"para-returns\"><span class=\"word-returns\">Returns</span>  Eee.</p>"
        );
    }

    #[test]
    fn inline_render_kinds_map_to_elements() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// Mix \\b bold, \\c mono, \\e emph.", &decl);
        let html = HtmlRenderer.render(&comment);
        assert!(html.contains("<b>bold,</b>"));
        assert!(html.contains("<tt>mono,</tt>"));
        assert!(html.contains("<em>emph.</em>"));
    }

    #[test]
    fn verbatim_block_renders_as_pre() {
        let decl = DeclInfo::function("f");
        let comment = parser::parse("/// Intro.\n///\n/// \\code\n/// f(&x);\n/// \\endcode", &decl);
        let html = HtmlRenderer.render(&comment);
        assert!(html.contains("<pre> f(&amp;x);</pre>"));
    }
}
