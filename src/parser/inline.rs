//! Intra-line scanner — inline commands and HTML tags inside paragraph
//! text.
//!
//! Splits one physical line into TEXT, INLINE_COMMAND and HTML tag nodes.
//! Anything that does not parse as a recognized construct stays literal
//! text; a malformed tag or unknown command never fails the line.

use crate::model::CommentNode;
use crate::parser::commands;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_INLINE_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\\@]([a-zA-Z][a-zA-Z0-9_]*)").unwrap());

static RE_HTML_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^<([a-zA-Z][a-zA-Z0-9-]*)",
        r#"((?:\s+[a-zA-Z][a-zA-Z0-9-]*(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+))?)*)"#,
        r"\s*(/)?>"
    ))
    .unwrap()
});

static RE_HTML_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</([a-zA-Z][a-zA-Z0-9-]*)\s*>").unwrap());

static RE_HTML_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z][a-zA-Z0-9-]*)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s>]+))?"#).unwrap()
});

// -- Public API ---------------------------------------------------------------

/// Scan one line into inline nodes. Plain lines yield a single TEXT node
/// with whitespace intact.
pub fn scan_line(line: &str) -> Vec<CommentNode> {
    let mut nodes: Vec<CommentNode> = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        if c == '\\' || c == '@' {
            if let Some(caps) = RE_INLINE_CMD.captures(rest) {
                let name = caps[1].to_string();
                if let Some(render_kind) = commands::inline_render_kind(&name) {
                    flush_text(&mut nodes, &mut text);
                    let after = &rest[caps[0].len()..];
                    let (arg, consumed) = take_word(after);
                    nodes.push(CommentNode::InlineCommand {
                        name,
                        render_kind,
                        args: arg.into_iter().collect(),
                    });
                    i += caps[0].len() + consumed;
                    continue;
                }
            }
            // Unknown command or bare marker: literal.
            text.push(c);
            i += c.len_utf8();
            continue;
        }

        if c == '<' {
            if let Some(caps) = RE_HTML_END.captures(rest) {
                flush_text(&mut nodes, &mut text);
                nodes.push(CommentNode::HtmlEndTag {
                    name: caps[1].to_string(),
                });
                i += caps[0].len();
                continue;
            }
            if let Some(caps) = RE_HTML_START.captures(rest) {
                flush_text(&mut nodes, &mut text);
                nodes.push(CommentNode::HtmlStartTag {
                    name: caps[1].to_string(),
                    attrs: parse_attrs(caps.get(2).map_or("", |m| m.as_str())),
                    self_closing: caps.get(3).is_some(),
                });
                i += caps[0].len();
                continue;
            }
            text.push('<');
            i += 1;
            continue;
        }

        text.push(c);
        i += c.len_utf8();
    }

    flush_text(&mut nodes, &mut text);
    nodes
}

// -- Helper functions ---------------------------------------------------------

fn flush_text(nodes: &mut Vec<CommentNode>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(CommentNode::Text {
            text: std::mem::take(text),
        });
    }
}

/// Take the next whitespace-delimited word; returns the word and the
/// number of bytes consumed (leading whitespace included). Consumes
/// nothing when no word follows.
pub(crate) fn take_word(s: &str) -> (Option<String>, usize) {
    let ws = s.len() - s.trim_start().len();
    let rest = &s[ws..];
    let end = rest
        .find(char::is_whitespace)
        .unwrap_or(rest.len());
    if end == 0 {
        return (None, 0);
    }
    (Some(rest[..end].to_string()), ws + end)
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    RE_HTML_ATTR
        .captures_iter(raw)
        .map(|caps| {
            let name = caps[1].to_string();
            let value = caps
                .get(2)
                .map(|m| unquote(m.as_str()))
                .unwrap_or_default();
            (name, value)
        })
        .collect()
}

fn unquote(value: &str) -> String {
    let v = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    v.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::InlineCommandRenderKind;

    #[test]
    fn plain_line_is_one_text_node() {
        let nodes = scan_line(" Width in pixels.");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text(), Some(" Width in pixels."));
    }

    #[test]
    fn bold_command_consumes_one_word() {
        let nodes = scan_line("Press \\b hard now.");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].text(), Some("Press "));
        assert_eq!(nodes[1].inline_command_name(), Some("b"));
        assert_eq!(
            nodes[1].inline_render_kind(),
            Some(InlineCommandRenderKind::Bold)
        );
        assert_eq!(nodes[1].inline_args(), ["hard"]);
        assert_eq!(nodes[2].text(), Some(" now."));
    }

    #[test]
    fn at_spelling_works_too() {
        let nodes = scan_line("use @c malloc here");
        assert_eq!(nodes[1].inline_command_name(), Some("c"));
        assert_eq!(nodes[1].inline_args(), ["malloc"]);
    }

    #[test]
    fn command_without_argument() {
        let nodes = scan_line("trailing \\em");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].inline_command_name(), Some("em"));
        assert!(nodes[1].inline_args().is_empty());
    }

    #[test]
    fn unknown_command_stays_literal() {
        let nodes = scan_line("call \\foobar x");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text(), Some("call \\foobar x"));
    }

    #[test]
    fn html_start_tag_with_attrs() {
        let nodes = scan_line(r#"see <a href="x.html">this</a>"#);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[1].html_tag_name(), Some("a"));
        assert_eq!(
            nodes[1].html_attrs(),
            [("href".to_string(), "x.html".to_string())]
        );
        assert_eq!(nodes[2].text(), Some("this"));
        assert_eq!(nodes[3].html_tag_name(), Some("a"));
        assert!(nodes[3].is_html_tag());
    }

    #[test]
    fn self_closing_tag() {
        let nodes = scan_line("line<br/>break");
        assert_eq!(nodes.len(), 3);
        match &nodes[1] {
            CommentNode::HtmlStartTag { self_closing, .. } => assert!(*self_closing),
            other => panic!("expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn malformed_tag_degrades_to_text() {
        let nodes = scan_line("a < b and a <= b");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text(), Some("a < b and a <= b"));
    }

    #[test]
    fn bare_attribute_gets_empty_value() {
        let nodes = scan_line("<input disabled>");
        assert_eq!(
            nodes[0].html_attrs(),
            [("disabled".to_string(), String::new())]
        );
    }
}
