use std::cell::Cell;
use std::rc::Rc;

use dioxus::dioxus_core::{DynamicNode, TemplateNode, VNode};
use dioxus::prelude::*;
use ui_core::{emit, supplied, ApiMode, DeprecationNotice, Family};

use super::config::use_kit_config;

/// Component names of a root's direct children.
///
/// Only one level is inspected. Fragments produced by loops or
/// conditionals are flattened so `for` bodies count as direct children.
pub fn child_identities(children: &Element) -> Vec<&'static str> {
    let mut names = Vec::new();
    if let Ok(node) = children {
        collect(node, &mut names, true);
    }
    names
}

/// Whether the caller passed any children at all.
pub fn has_children(children: &Element) -> bool {
    let Ok(node) = children else {
        return false;
    };
    node.template.roots.iter().any(|root| match root {
        TemplateNode::Dynamic { id } => match node.dynamic_nodes.get(*id) {
            Some(DynamicNode::Placeholder(_)) | None => false,
            Some(DynamicNode::Fragment(nodes)) => !nodes.is_empty(),
            Some(_) => true,
        },
        _ => true,
    })
}

fn collect(node: &VNode, names: &mut Vec<&'static str>, flatten: bool) {
    for root in node.template.roots {
        let TemplateNode::Dynamic { id } = root else {
            continue;
        };
        match node.dynamic_nodes.get(*id) {
            Some(DynamicNode::Component(component)) => {
                // Paths such as `ui_kit::components::TreeNode` match by last segment.
                let name = component.name.rsplit("::").next().unwrap_or(component.name);
                names.push(name);
            }
            Some(DynamicNode::Fragment(nodes)) if flatten => {
                for inner in nodes {
                    collect(inner, names, false);
                }
            }
            _ => {}
        }
    }
}

/// Decide the call convention for one render of a root.
///
/// `legacy` pairs each deprecated prop name with whether the caller
/// supplied it. The first render that calls for a deprecation notice
/// emits it; later renders of the same instance stay quiet.
pub fn use_api_mode(
    family: &'static Family,
    api: Option<ApiMode>,
    children: &Element,
    legacy: &[(&'static str, bool)],
) -> ApiMode {
    let warned = use_hook(|| Rc::new(Cell::new(false)));
    let config = use_kit_config();

    let detection = family.resolve(api, child_identities(children), &supplied(legacy));
    if !warned.get() {
        if let Some(notice) = DeprecationNotice::for_detection(family, &detection) {
            emit(&notice, config.warnings);
            warned.set(true);
        }
    }
    detection.mode
}
