//! cxdoc — parse Doxygen-style documentation comments into a structured
//! comment tree and render it as XML or HTML.
//!
//! The pipeline: raw comment text plus declaration metadata goes through
//! delimiter stripping, block classification and declaration binding,
//! producing an immutable [`FullComment`] tree that the renderers walk.
//! Parsing never fails — malformed constructs degrade to plain text, an
//! absent comment is the null sentinel — so a bad comment can never make
//! its declaration unusable.

pub mod enums;
pub mod model;
pub mod parser;
pub mod render;

pub use enums::{CommentKind, InlineCommandRenderKind, ParamCommandDirection, TokenKind};
pub use model::{CommentNode, DeclInfo, DeclKind, FullComment, SourceLocation, TemplateParam};
pub use parser::parse;
pub use render::{create_renderer, Renderer};
