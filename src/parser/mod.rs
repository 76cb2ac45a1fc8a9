//! Parser module — strip, classify, bind pipeline.

pub mod binder;
pub mod block;
pub mod commands;
pub mod inline;
pub mod strip;

use crate::model::{DeclInfo, FullComment};

/// Parse a declaration's raw documentation comment into a comment tree.
///
/// Never fails: malformed constructs degrade to plain text, and an
/// absent or blank comment yields the null sentinel.
pub fn parse(raw: &str, decl: &DeclInfo) -> FullComment {
    let lines = strip::strip(raw);
    let mut nodes = block::parse_blocks(&lines);
    if nodes.is_empty() {
        return FullComment::null();
    }
    binder::bind(&mut nodes, decl);
    FullComment::new(decl.clone(), nodes)
}
