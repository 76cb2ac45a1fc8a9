//! Declaration binder — resolve param/tparam commands against the
//! owning declaration's signature.
//!
//! Binding failures are recorded on the node (`index`/`position` stay
//! `None`) and never raised; a comment documenting a parameter that does
//! not exist still parses.

use crate::model::{CommentNode, DeclInfo, TemplateParam};

/// Resolve every PARAM_COMMAND and TPARAM_COMMAND in `nodes`.
pub fn bind(nodes: &mut [CommentNode], decl: &DeclInfo) {
    for node in nodes {
        match node {
            CommentNode::ParamCommand { name, index, .. } => {
                let target = name.as_str();
                *index = decl.params.iter().position(|p| p == target);
            }
            CommentNode::TParamCommand { name, position, .. } => {
                *position = find_template_param(&decl.template_params, name.as_str());
            }
            _ => {}
        }
    }
}

/// Find a template parameter by exact name, scanning whole depth levels
/// outward-in: all names at depth 1 are checked before any nested list.
/// Returns the per-level index path of the first match.
fn find_template_param(outermost: &[TemplateParam], name: &str) -> Option<Vec<usize>> {
    let mut level: Vec<(Vec<usize>, &[TemplateParam])> = vec![(Vec::new(), outermost)];
    while !level.is_empty() {
        for (prefix, list) in &level {
            for (i, param) in list.iter().enumerate() {
                if param.name == name {
                    let mut position = prefix.clone();
                    position.push(i);
                    return Some(position);
                }
            }
        }
        let mut next: Vec<(Vec<usize>, &[TemplateParam])> = Vec::new();
        for (prefix, list) in level {
            for (i, param) in list.iter().enumerate() {
                if !param.params.is_empty() {
                    let mut nested = prefix.clone();
                    nested.push(i);
                    next.push((nested, &param.params[..]));
                }
            }
        }
        level = next;
    }
    None
}
