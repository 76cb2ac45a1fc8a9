//! Block-level classifier — delimiter-stripped lines to top-level nodes.
//!
//! Line-by-line state machine. Command lines open block/param/tparam
//! nodes; other lines accumulate into the open paragraph, one TEXT node
//! per physical line with intra-line whitespace kept exactly. A blank
//! line closes the paragraph. Unrecognized constructs degrade to text;
//! nothing here can fail.

use crate::enums::ParamCommandDirection;
use crate::model::CommentNode;
use crate::parser::commands::{self, BlockLevel};
use crate::parser::inline;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[\\@]([a-zA-Z][a-zA-Z0-9_]*)(.*)$").unwrap());

static RE_PARAM_DIRECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*\[\s*(in\s*,\s*out|out|in)\s*\]").unwrap());

// -- Public API ---------------------------------------------------------------

/// Classify delimiter-stripped lines into the top-level node sequence of
/// a full comment.
pub fn parse_blocks(lines: &[String]) -> Vec<CommentNode> {
    let mut parser = BlockParser::default();
    for line in lines {
        parser.process_line(line);
    }
    parser.finish()
}

// -- Parser state -------------------------------------------------------------

#[derive(Default)]
struct BlockParser {
    nodes: Vec<CommentNode>,
    /// Inline children of the paragraph currently being accumulated.
    para: Vec<CommentNode>,
    /// Command node waiting for its paragraph.
    pending: Option<CommentNode>,
    verbatim: Option<VerbatimState>,
}

struct VerbatimState {
    name: String,
    terminator: &'static str,
    lines: Vec<CommentNode>,
}

impl BlockParser {
    fn process_line(&mut self, line: &str) {
        if self.verbatim.is_some() {
            self.process_verbatim_line(line);
            return;
        }

        if line.trim().is_empty() {
            self.close_paragraph();
            return;
        }

        if let Some(caps) = RE_COMMAND_LINE.captures(line) {
            let name = caps[2].to_string();
            if let Some(level) = commands::classify(&name) {
                // Whitespace before the marker belongs to the previous
                // paragraph when one is still open; this is what keeps the
                // trailing space of a discussion that runs up against the
                // next command.
                let lead = &caps[1];
                if !lead.is_empty() && self.paragraph_open() {
                    self.para.push(CommentNode::Text {
                        text: lead.to_string(),
                    });
                }
                self.close_paragraph();
                let rest = caps.get(3).map_or("", |m| m.as_str());
                self.start_command(name, level, rest);
                return;
            }
        }

        // Paragraph text, inline constructs included.
        self.para.extend(inline::scan_line(line));
    }

    fn process_verbatim_line(&mut self, line: &str) {
        let terminator = match &self.verbatim {
            Some(state) => state.terminator,
            None => return,
        };
        if let Some(caps) = RE_COMMAND_LINE.captures(line) {
            if &caps[2] == terminator {
                self.flush_verbatim();
                return;
            }
        }
        if let Some(state) = &mut self.verbatim {
            state.lines.push(CommentNode::VerbatimBlockLine {
                text: line.to_string(),
            });
        }
    }

    fn start_command(&mut self, name: String, level: BlockLevel, rest: &str) {
        match level {
            BlockLevel::Block { args } => {
                let mut rest = rest;
                let mut arg_words = Vec::new();
                for _ in 0..args {
                    let (word, consumed) = inline::take_word(rest);
                    match word {
                        Some(word) => arg_words.push(word),
                        None => break,
                    }
                    rest = &rest[consumed..];
                }
                self.pending = Some(CommentNode::BlockCommand {
                    name,
                    args: arg_words,
                    children: Vec::new(),
                });
                self.para = inline::scan_line(rest);
            }
            BlockLevel::Param => {
                let mut rest = rest;
                let mut direction = ParamCommandDirection::In;
                let mut explicit = false;
                if let Some(caps) = RE_PARAM_DIRECTION.captures(rest) {
                    direction = parse_direction(&caps[1]);
                    explicit = true;
                    rest = &rest[caps[0].len()..];
                }
                let (word, consumed) = inline::take_word(rest);
                let param = word.unwrap_or_default();
                rest = &rest[consumed..];
                self.pending = Some(CommentNode::ParamCommand {
                    name: param,
                    direction,
                    explicit_direction: explicit,
                    index: None,
                    children: Vec::new(),
                });
                self.para = inline::scan_line(rest);
            }
            BlockLevel::TParam => {
                let (word, consumed) = inline::take_word(rest);
                let param = word.unwrap_or_default();
                self.pending = Some(CommentNode::TParamCommand {
                    name: param,
                    position: None,
                    children: Vec::new(),
                });
                self.para = inline::scan_line(&rest[consumed..]);
            }
            BlockLevel::VerbatimBlock { terminator } => {
                self.verbatim = Some(VerbatimState {
                    name,
                    terminator,
                    lines: Vec::new(),
                });
            }
            BlockLevel::VerbatimLine => {
                self.nodes.push(CommentNode::VerbatimLine {
                    name,
                    text: rest.to_string(),
                });
            }
        }
    }

    fn paragraph_open(&self) -> bool {
        self.pending.is_some() || !self.para.is_empty()
    }

    /// Close the open paragraph: attach it to the pending command, or
    /// emit it as a free PARAGRAPH node when non-empty.
    fn close_paragraph(&mut self) {
        let para = std::mem::take(&mut self.para);
        if let Some(mut command) = self.pending.take() {
            match &mut command {
                CommentNode::BlockCommand { children, .. }
                | CommentNode::ParamCommand { children, .. }
                | CommentNode::TParamCommand { children, .. } => {
                    children.push(CommentNode::Paragraph { children: para });
                }
                _ => {}
            }
            self.nodes.push(command);
        } else if !para.is_empty() {
            self.nodes.push(CommentNode::Paragraph { children: para });
        }
    }

    fn flush_verbatim(&mut self) {
        if let Some(state) = self.verbatim.take() {
            self.nodes.push(CommentNode::VerbatimBlock {
                name: state.name,
                children: state.lines,
            });
        }
    }

    fn finish(mut self) -> Vec<CommentNode> {
        // Unterminated verbatim blocks close at end of comment.
        self.flush_verbatim();
        self.close_paragraph();
        self.nodes
    }
}

fn parse_direction(tag: &str) -> ParamCommandDirection {
    let normalized: String = tag
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    match normalized.as_str() {
        "out" => ParamCommandDirection::Out,
        "in,out" => ParamCommandDirection::InOut,
        _ => ParamCommandDirection::In,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn free_paragraph_one_text_per_line() {
        let nodes = parse_blocks(&lines(&[" One.", " Two."]));
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_paragraph());
        let texts: Vec<_> = nodes[0].children().iter().filter_map(|c| c.text()).collect();
        assert_eq!(texts, [" One.", " Two."]);
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        let nodes = parse_blocks(&lines(&[" One.", "", " Two."]));
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_paragraph());
        assert!(nodes[1].is_paragraph());
    }

    #[test]
    fn brief_command_owns_following_text() {
        let nodes = parse_blocks(&lines(&[" \\brief Do the mambo.", "        (samba aside)"]));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].block_command_name(), Some("brief"));
        let para = nodes[0].paragraph().unwrap();
        let texts: Vec<_> = para.children().iter().filter_map(|c| c.text()).collect();
        assert_eq!(texts, [" Do the mambo.", "        (samba aside)"]);
    }

    #[test]
    fn param_with_explicit_direction() {
        let nodes = parse_blocks(&lines(&[" \\param [out] size Size in pixels^2."]));
        assert_eq!(nodes[0].param_name(), Some("size"));
        assert!(nodes[0].is_direction_explicit());
        assert_eq!(
            nodes[0].param_direction(),
            Some(ParamCommandDirection::Out)
        );
        let para = nodes[0].paragraph().unwrap();
        assert_eq!(para.children()[0].text(), Some(" Size in pixels^2."));
    }

    #[test]
    fn param_direction_in_out_with_spaces() {
        let nodes = parse_blocks(&lines(&[" @param [ in , out ] error Flag."]));
        assert_eq!(
            nodes[0].param_direction(),
            Some(ParamCommandDirection::InOut)
        );
        assert!(nodes[0].is_direction_explicit());
        assert_eq!(nodes[0].param_name(), Some("error"));
    }

    #[test]
    fn param_without_direction_defaults_to_in() {
        let nodes = parse_blocks(&lines(&[" \\param height Height in pixels."]));
        assert!(!nodes[0].is_direction_explicit());
        assert_eq!(nodes[0].param_direction(), Some(ParamCommandDirection::In));
    }

    #[test]
    fn command_on_next_line_leaves_trailing_space() {
        let nodes = parse_blocks(&lines(&[" \\param x2 Ddd.", " \\param x1 Ccc."]));
        assert_eq!(nodes.len(), 2);
        let texts: Vec<_> = nodes[0]
            .paragraph()
            .unwrap()
            .children()
            .iter()
            .filter_map(|c| c.text())
            .collect();
        assert_eq!(texts, [" Ddd.", " "]);
    }

    #[test]
    fn tparam_command() {
        let nodes = parse_blocks(&lines(&[" @tparam C A class."]));
        assert!(nodes[0].is_template_param_command());
        assert_eq!(nodes[0].tparam_name(), Some("C"));
        assert!(!nodes[0].is_tparam_position_valid());
    }

    #[test]
    fn verbatim_block_keeps_lines_literal() {
        let nodes = parse_blocks(&lines(&[
            " \\code",
            "   int x = 1;",
            "   use(x);",
            " \\endcode",
        ]));
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_verbatim_block());
        let texts: Vec<_> = nodes[0].children().iter().filter_map(|c| c.text()).collect();
        assert_eq!(texts, ["   int x = 1;", "   use(x);"]);
    }

    #[test]
    fn unterminated_verbatim_block_recovers_at_eof() {
        let nodes = parse_blocks(&lines(&[" \\verbatim", " raw line"]));
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_verbatim_block());
        assert_eq!(nodes[0].children().len(), 1);
    }

    #[test]
    fn verbatim_line_command() {
        let nodes = parse_blocks(&lines(&[" \\function foo", " Blah blah."]));
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_verbatim_line());
        assert_eq!(nodes[0].command_name(), Some("function"));
        assert_eq!(nodes[0].text(), Some(" foo"));
        assert!(nodes[1].is_paragraph());
    }

    #[test]
    fn unknown_command_degrades_to_text() {
        let nodes = parse_blocks(&lines(&[" \\frobnicate everything"]));
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_paragraph());
        assert_eq!(
            nodes[0].children()[0].text(),
            Some(" \\frobnicate everything")
        );
    }

    #[test]
    fn throws_consumes_exception_name() {
        let nodes = parse_blocks(&lines(&[" @throws LogicError when confused"]));
        assert_eq!(nodes[0].block_command_name(), Some("throws"));
        assert_eq!(nodes[0].block_command_args(), ["LogicError"]);
        let para = nodes[0].paragraph().unwrap();
        assert_eq!(para.children()[0].text(), Some(" when confused"));
    }

    #[test]
    fn command_with_no_text_gets_empty_paragraph() {
        let nodes = parse_blocks(&lines(&[" \\brief", "", " Rest."]));
        assert_eq!(nodes.len(), 2);
        let para = nodes[0].paragraph().unwrap();
        assert!(para.children().is_empty());
    }
}
