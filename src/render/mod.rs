//! Renderer module — trait-based format dispatch.

pub mod html;
pub(crate) mod parts;
pub mod xml;

use crate::model::FullComment;
use anyhow::{anyhow, Result};

/// Trait for rendering a comment tree into a specific output format.
///
/// Renderers are pure functions of the tree: identical input trees
/// produce byte-identical output, and the null sentinel renders to the
/// empty string.
pub trait Renderer {
    fn render(&self, comment: &FullComment) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "xml" => Ok(Box::new(xml::XmlRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use xml or html", format)),
    }
}
