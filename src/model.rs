//! Comment tree model and declaration metadata — format-agnostic.
//!
//! A tree is built once per declaration by the parser and frozen; there is
//! no mutation API. Every node is owned exclusively by its parent, so a
//! tree can move across threads without coordination.

use crate::enums::{CommentKind, InlineCommandRenderKind, ParamCommandDirection};
use crate::render::{html::HtmlRenderer, xml::XmlRenderer, Renderer};

/// Kind of the declaration a comment is attached to.
///
/// Selects the XML root element name; otherwise opaque to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclKind {
    Function,
    Class,
    Struct,
    Enum,
    Namespace,
    Typedef,
    Variable,
    #[default]
    Other,
}

impl DeclKind {
    /// XML root element for a declaration of this kind.
    pub fn xml_element(self) -> &'static str {
        match self {
            DeclKind::Function => "Function",
            DeclKind::Class | DeclKind::Struct => "Class",
            DeclKind::Enum => "Enum",
            DeclKind::Namespace => "Namespace",
            DeclKind::Typedef => "Typedef",
            DeclKind::Variable => "Variable",
            DeclKind::Other => "Other",
        }
    }
}

/// Source position of a declaration, used for attribution metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// One template parameter; `params` is non-empty for template-template
/// parameters and mirrors their nested parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParam {
    pub name: String,
    pub params: Vec<TemplateParam>,
}

impl TemplateParam {
    pub fn new(name: &str) -> Self {
        TemplateParam {
            name: name.to_string(),
            params: Vec::new(),
        }
    }

    pub fn nested(name: &str, params: Vec<TemplateParam>) -> Self {
        TemplateParam {
            name: name.to_string(),
            params,
        }
    }
}

/// Declaration metadata supplied by the surrounding AST layer.
///
/// All string fields are opaque pass-through values; the parser only
/// consults `params` and `template_params` when binding commands.
#[derive(Debug, Clone, Default)]
pub struct DeclInfo {
    pub kind: DeclKind,
    /// Fully-qualified declaration name.
    pub name: String,
    /// Unique symbol identifier.
    pub usr: String,
    /// Rendered declaration signature.
    pub declaration: String,
    pub location: Option<SourceLocation>,
    /// Ordered function parameter names.
    pub params: Vec<String>,
    /// Ordered template parameter list, outermost level.
    pub template_params: Vec<TemplateParam>,
}

impl DeclInfo {
    pub fn new(kind: DeclKind, name: &str) -> Self {
        DeclInfo {
            kind,
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn function(name: &str) -> Self {
        Self::new(DeclKind::Function, name)
    }

    pub fn with_usr(mut self, usr: &str) -> Self {
        self.usr = usr.to_string();
        self
    }

    pub fn with_declaration(mut self, declaration: &str) -> Self {
        self.declaration = declaration.to_string();
        self
    }

    pub fn with_location(mut self, file: &str, line: u32, column: u32) -> Self {
        self.location = Some(SourceLocation {
            file: file.to_string(),
            line,
            column,
        });
        self
    }

    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_template_params(mut self, params: Vec<TemplateParam>) -> Self {
        self.template_params = params;
        self
    }
}

/// One node of a parsed comment tree.
///
/// A tagged union over the closed [`CommentKind`] vocabulary; predicates
/// are tag comparisons and payload accessors return `None` for foreign
/// kinds rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentNode {
    Text {
        text: String,
    },
    InlineCommand {
        name: String,
        render_kind: InlineCommandRenderKind,
        args: Vec<String>,
    },
    HtmlStartTag {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    HtmlEndTag {
        name: String,
    },
    Paragraph {
        children: Vec<CommentNode>,
    },
    BlockCommand {
        name: String,
        args: Vec<String>,
        children: Vec<CommentNode>,
    },
    ParamCommand {
        name: String,
        direction: ParamCommandDirection,
        explicit_direction: bool,
        /// Position in the declaration's parameter list; `None` when
        /// binding failed.
        index: Option<usize>,
        children: Vec<CommentNode>,
    },
    TParamCommand {
        name: String,
        /// Per-level index path through nested template parameter lists;
        /// `None` when binding failed.
        position: Option<Vec<usize>>,
        children: Vec<CommentNode>,
    },
    VerbatimBlock {
        name: String,
        children: Vec<CommentNode>,
    },
    VerbatimBlockLine {
        text: String,
    },
    VerbatimLine {
        name: String,
        text: String,
    },
}

impl CommentNode {
    pub fn kind(&self) -> CommentKind {
        match self {
            CommentNode::Text { .. } => CommentKind::Text,
            CommentNode::InlineCommand { .. } => CommentKind::InlineCommand,
            CommentNode::HtmlStartTag { .. } => CommentKind::HtmlStartTag,
            CommentNode::HtmlEndTag { .. } => CommentKind::HtmlEndTag,
            CommentNode::Paragraph { .. } => CommentKind::Paragraph,
            CommentNode::BlockCommand { .. } => CommentKind::BlockCommand,
            CommentNode::ParamCommand { .. } => CommentKind::ParamCommand,
            CommentNode::TParamCommand { .. } => CommentKind::TParamCommand,
            CommentNode::VerbatimBlock { .. } => CommentKind::VerbatimBlockCommand,
            CommentNode::VerbatimBlockLine { .. } => CommentKind::VerbatimBlockLine,
            CommentNode::VerbatimLine { .. } => CommentKind::VerbatimLine,
        }
    }

    // -- Kind predicates ------------------------------------------------------

    pub fn is_text(&self) -> bool {
        matches!(self, CommentNode::Text { .. })
    }

    pub fn is_inline_command(&self) -> bool {
        matches!(self, CommentNode::InlineCommand { .. })
    }

    pub fn is_html_tag(&self) -> bool {
        matches!(
            self,
            CommentNode::HtmlStartTag { .. } | CommentNode::HtmlEndTag { .. }
        )
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, CommentNode::Paragraph { .. })
    }

    pub fn is_block_command(&self) -> bool {
        matches!(self, CommentNode::BlockCommand { .. })
    }

    pub fn is_param_command(&self) -> bool {
        matches!(self, CommentNode::ParamCommand { .. })
    }

    pub fn is_template_param_command(&self) -> bool {
        matches!(self, CommentNode::TParamCommand { .. })
    }

    pub fn is_verbatim_block(&self) -> bool {
        matches!(self, CommentNode::VerbatimBlock { .. })
    }

    pub fn is_verbatim_line(&self) -> bool {
        matches!(self, CommentNode::VerbatimLine { .. })
    }

    // -- Structure ------------------------------------------------------------

    /// Ordered children; empty for leaf kinds.
    pub fn children(&self) -> &[CommentNode] {
        match self {
            CommentNode::Paragraph { children }
            | CommentNode::BlockCommand { children, .. }
            | CommentNode::ParamCommand { children, .. }
            | CommentNode::TParamCommand { children, .. }
            | CommentNode::VerbatimBlock { children, .. } => children,
            _ => &[],
        }
    }

    /// Literal text for TEXT and verbatim nodes. Paragraphs have no direct
    /// text; callers descend into TEXT children.
    pub fn text(&self) -> Option<&str> {
        match self {
            CommentNode::Text { text }
            | CommentNode::VerbatimBlockLine { text }
            | CommentNode::VerbatimLine { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Name of the command this node was parsed from, for any command kind.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            CommentNode::InlineCommand { name, .. }
            | CommentNode::BlockCommand { name, .. }
            | CommentNode::ParamCommand { name, .. }
            | CommentNode::TParamCommand { name, .. }
            | CommentNode::VerbatimBlock { name, .. }
            | CommentNode::VerbatimLine { name, .. } => Some(name),
            _ => None,
        }
    }

    /// First PARAGRAPH child of a command node.
    pub fn paragraph(&self) -> Option<&CommentNode> {
        self.children().iter().find(|c| c.is_paragraph())
    }

    // -- Block command payload ------------------------------------------------

    pub fn block_command_name(&self) -> Option<&str> {
        match self {
            CommentNode::BlockCommand { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn block_command_args(&self) -> &[String] {
        match self {
            CommentNode::BlockCommand { args, .. } => args,
            _ => &[],
        }
    }

    // -- Param command payload ------------------------------------------------

    pub fn param_name(&self) -> Option<&str> {
        match self {
            CommentNode::ParamCommand { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn param_direction(&self) -> Option<ParamCommandDirection> {
        match self {
            CommentNode::ParamCommand { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// True when the comment spelled the direction out with a `[in]`,
    /// `[out]` or `[in,out]` tag.
    pub fn is_direction_explicit(&self) -> bool {
        matches!(
            self,
            CommentNode::ParamCommand {
                explicit_direction: true,
                ..
            }
        )
    }

    /// Resolved position in the declaration's parameter list.
    pub fn param_index(&self) -> Option<usize> {
        match self {
            CommentNode::ParamCommand { index, .. } => *index,
            _ => None,
        }
    }

    pub fn is_param_index_valid(&self) -> bool {
        self.param_index().is_some()
    }

    // -- Template param command payload ---------------------------------------

    pub fn tparam_name(&self) -> Option<&str> {
        match self {
            CommentNode::TParamCommand { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_tparam_position_valid(&self) -> bool {
        matches!(
            self,
            CommentNode::TParamCommand {
                position: Some(_),
                ..
            }
        )
    }

    /// Nesting depth of the bound template parameter, 1 for the outermost
    /// list. `None` when binding failed.
    pub fn tparam_depth(&self) -> Option<usize> {
        match self {
            CommentNode::TParamCommand {
                position: Some(position),
                ..
            } => Some(position.len()),
            _ => None,
        }
    }

    /// Index within the template parameter list at the given nesting
    /// level (0 = outermost). `None` when the level is out of range or
    /// binding failed.
    pub fn tparam_index(&self, level: usize) -> Option<usize> {
        match self {
            CommentNode::TParamCommand {
                position: Some(position),
                ..
            } => position.get(level).copied(),
            _ => None,
        }
    }

    // -- Inline command payload -----------------------------------------------

    pub fn inline_command_name(&self) -> Option<&str> {
        match self {
            CommentNode::InlineCommand { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn inline_render_kind(&self) -> Option<InlineCommandRenderKind> {
        match self {
            CommentNode::InlineCommand { render_kind, .. } => Some(*render_kind),
            _ => None,
        }
    }

    pub fn inline_args(&self) -> &[String] {
        match self {
            CommentNode::InlineCommand { args, .. } => args,
            _ => &[],
        }
    }

    // -- HTML tag payload -----------------------------------------------------

    pub fn html_tag_name(&self) -> Option<&str> {
        match self {
            CommentNode::HtmlStartTag { name, .. } | CommentNode::HtmlEndTag { name } => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn html_attrs(&self) -> &[(String, String)] {
        match self {
            CommentNode::HtmlStartTag { attrs, .. } => attrs,
            _ => &[],
        }
    }
}

impl<'a> IntoIterator for &'a CommentNode {
    type Item = &'a CommentNode;
    type IntoIter = std::slice::Iter<'a, CommentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children().iter()
    }
}

/// Root of one declaration's parsed documentation comment.
///
/// Owns the whole node tree plus an immutable snapshot of the
/// declaration metadata taken at construction. A declaration with no
/// attached comment is represented by the null sentinel, on which every
/// operation succeeds and reports emptiness.
#[derive(Debug, Clone, Default)]
pub struct FullComment {
    decl: DeclInfo,
    children: Vec<CommentNode>,
}

impl FullComment {
    /// The empty sentinel for declarations with no documentation comment.
    pub fn null() -> Self {
        FullComment::default()
    }

    pub(crate) fn new(decl: DeclInfo, children: Vec<CommentNode>) -> Self {
        FullComment { decl, children }
    }

    pub fn is_null(&self) -> bool {
        self.children.is_empty()
    }

    pub fn kind(&self) -> CommentKind {
        if self.is_null() {
            CommentKind::Null
        } else {
            CommentKind::FullComment
        }
    }

    pub fn decl(&self) -> &DeclInfo {
        &self.decl
    }

    pub fn children(&self) -> &[CommentNode] {
        &self.children
    }

    /// Render as a single-line XML document.
    pub fn to_xml(&self) -> String {
        XmlRenderer.render(self)
    }

    /// Render as an HTML fragment.
    pub fn to_html(&self) -> String {
        HtmlRenderer.render(self)
    }
}

impl<'a> IntoIterator for &'a FullComment {
    type Item = &'a CommentNode;
    type IntoIter = std::slice::Iter<'a, CommentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
