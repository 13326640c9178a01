use dioxus::dioxus_core::VNode;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronRight};
use dioxus_free_icons::Icon;
use ui_core::tree::{self, all_keys, retain_known, CheckCascade, KeySet, TreeNodeData};
use ui_core::{ApiMode, HandlerOrder, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    has_children, render_slot, slot_attributes, use_api_mode, use_controllable, AsChild,
    SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct TreeProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub expanded_keys: ReadSignal<Option<Vec<String>>>,
    #[props(default)]
    pub default_expanded_keys: Vec<String>,
    #[props(default)]
    pub selected_keys: ReadSignal<Option<Vec<String>>>,
    #[props(default)]
    pub default_selected_keys: Vec<String>,
    #[props(default)]
    pub checked_keys: ReadSignal<Option<Vec<String>>>,
    #[props(default)]
    pub default_checked_keys: Vec<String>,
    #[props(default)]
    pub checkable: ReadSignal<bool>,
    #[props(default = ReadSignal::new(Signal::new(true)))]
    pub selectable: ReadSignal<bool>,
    #[props(default)]
    pub multiple: bool,
    #[props(default)]
    pub show_line: ReadSignal<bool>,
    /// Expand every node of `tree_data` on first render.
    #[props(default)]
    pub default_expand_all: bool,
    #[props(default)]
    pub disabled: ReadSignal<bool>,
    #[props(default)]
    pub block_node: ReadSignal<bool>,
    #[props(default)]
    pub on_expand: Callback<TreeChange>,
    #[props(default)]
    pub on_select: Callback<TreeChange>,
    #[props(default)]
    pub on_check: Callback<TreeChange>,
    /// Deprecated: render `TreeNode` children instead.
    #[props(default)]
    pub tree_data: Option<Vec<TreeNodeData>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Reported key lists never name nodes missing from the current data.
fn report(keys: &KeySet, data: Option<&[TreeNodeData]>) -> Vec<String> {
    match data {
        Some(nodes) => retain_known(keys, nodes).into_iter().collect(),
        None => keys.iter().cloned().collect(),
    }
}

#[component]
pub fn Tree(props: TreeProps) -> Element {
    let mode = use_api_mode(
        &TREE,
        props.api,
        &props.children,
        &[("tree_data", props.tree_data.is_some())],
    );
    let data = props.tree_data.clone().filter(|_| mode == ApiMode::Declarative);

    let initial_expanded = match (&props.tree_data, props.default_expand_all) {
        (Some(nodes), true) => all_keys(nodes),
        _ => props.default_expanded_keys.clone(),
    };
    let default_selected = props.default_selected_keys.clone();
    let default_checked = props.default_checked_keys.clone();

    let expanded = use_controllable(props.expanded_keys, move || initial_expanded);
    let selected = use_controllable(props.selected_keys, move || default_selected);
    let checked = use_controllable(props.checked_keys, move || default_checked);
    let expanded_set = use_memo(move || expanded.current().into_iter().collect::<KeySet>());
    let selected_set = use_memo(move || selected.current().into_iter().collect::<KeySet>());
    let checked_set = use_memo(move || checked.current().into_iter().collect::<KeySet>());

    let on_expand = props.on_expand;
    let on_select = props.on_select;
    let on_check = props.on_check;
    let multiple = props.multiple;

    let known = data.clone();
    let on_toggle_expanded = use_callback(move |key: String| {
        let toggled = tree::toggle_expanded(&expanded_set.peek(), &key);
        let keys = report(&toggled.keys, known.as_deref());
        expanded.request(keys.clone());
        on_expand.call(TreeChange {
            keys,
            key,
            value: toggled.on,
        });
    });

    let known = data.clone();
    let on_toggle_selected = use_callback(move |key: String| {
        let toggled = tree::toggle_selected(&selected_set.peek(), &key, multiple);
        let keys = report(&toggled.keys, known.as_deref());
        selected.request(keys.clone());
        on_select.call(TreeChange {
            keys,
            key,
            value: toggled.on,
        });
    });

    let known = data.clone();
    let on_toggle_checked = use_callback(move |request: CheckRequest| {
        let toggled = tree::toggle_checked(
            &checked_set.peek(),
            &request.key,
            &request.descendants,
            request.cascade,
        );
        let keys = report(&toggled.keys, known.as_deref());
        checked.request(keys.clone());
        on_check.call(TreeChange {
            keys,
            key: request.key,
            value: toggled.on,
        });
    });

    use_context_provider(|| TreeContext {
        expanded: expanded_set,
        selected: selected_set,
        checked: checked_set,
        checkable: props.checkable,
        selectable: props.selectable,
        disabled: props.disabled,
        show_line: props.show_line,
        block_node: props.block_node,
        on_toggle_expanded,
        on_toggle_selected,
        on_toggle_checked,
    });

    let base = vec![
        Attribute::new("class", "tree", None, false),
        Attribute::new("role", "tree", None, false),
        Attribute::new("aria-multiselectable", multiple, None, false),
        Attribute::new("data-show-line", (props.show_line)(), None, false),
        Attribute::new("data-disabled", (props.disabled)(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div { ..merged, {props.children} }
        },
        ApiMode::Declarative => {
            let nodes = data.unwrap_or_default();
            if nodes.is_empty() {
                return rsx! {};
            }
            rsx! {
                div { ..merged,
                    for node in nodes {
                        TreeDataNode { key: "{node.key}", node: node.clone() }
                    }
                }
            }
        }
    }
}

/// Declarative rendering of one data node and, when expanded, its children.
#[component]
fn TreeDataNode(node: TreeNodeData) -> Element {
    let descendants = node.descendant_keys();
    rsx! {
        TreeRow {
            node_key: node.key.clone(),
            title: node.title.clone(),
            leaf: node.leaf(),
            disabled: node.disabled,
            selectable: node.selectable,
            checkable: node.checkable,
            descendants,
            cascade: CheckCascade::Descendants,
            for child in node.children.iter() {
                TreeDataNode { key: "{child.key}", node: child.clone() }
            }
        }
    }
}

/// A node of a composable tree. Nested `TreeNode` children form its subtree.
#[component]
pub fn TreeNode(
    node_key: String,
    title: String,
    #[props(default)] is_leaf: Option<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] selectable: Option<bool>,
    #[props(default)] checkable: Option<bool>,
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let leaf = is_leaf.unwrap_or(!has_children(&children));
    rsx! {
        TreeRow {
            node_key,
            title,
            leaf,
            disabled,
            selectable,
            checkable,
            descendants: Vec::new(),
            cascade: CheckCascade::SelfOnly,
            as_child,
            attributes,
            {children}
        }
    }
}

#[component]
fn TreeRow(
    node_key: String,
    title: String,
    leaf: bool,
    disabled: bool,
    selectable: Option<bool>,
    checkable: Option<bool>,
    descendants: Vec<String>,
    cascade: CheckCascade,
    #[props(default)] as_child: Option<AsChild>,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let tree = use_tree_context("TreeNode")?;
    let level = use_tree_level();
    use_context_provider(|| TreeLevel(level + 1));

    let disabled = disabled || (tree.disabled)();
    let expanded = tree.is_expanded(&node_key);
    let is_selected = tree.is_selected(&node_key);
    let can_select = (tree.selectable)() && selectable != Some(false) && !disabled;
    let can_check = (tree.checkable)() && checkable != Some(false);

    let select_key = node_key.clone();
    let select = move || {
        if can_select {
            tree.toggle_selected(select_key.clone());
        }
    };

    let mut slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("tree-node-row")
        .attr("data-state", if is_selected { "selected" } else { "idle" })
        .attr("data-disabled", disabled);
    if (tree.block_node)() {
        slot = slot.class("tree-node-row-block");
    }

    let content = rsx! {
        TreeNodeSwitcher { node_key: node_key.clone(), is_leaf: leaf, disabled }
        if can_check {
            TreeNodeCheckbox {
                node_key: node_key.clone(),
                descendants: descendants.clone(),
                cascade,
                disabled,
            }
        }
        TreeNodeContent { node_key: node_key.clone(), "{title}" }
    };

    let row = match as_child {
        Some(AsChild(mut elements)) => {
            // The caller's element hosts the row parts ahead of its own content.
            if let [element] = elements.as_mut_slice() {
                let own = std::mem::replace(&mut element.children, VNode::empty());
                element.children = rsx! { {content} {own} };
            }
            let select = select.clone();
            let slot = slot.on(SlotEvent::Click, SlotHandler::mouse(move |_| select()));
            render_slot(slot, AsChild(elements))
        }
        None => {
            let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
            rsx! {
                div { onclick: move |_| select(), ..merged, {content} }
            }
        }
    };

    rsx! {
        div {
            class: "tree-node",
            role: "treeitem",
            "data-level": level,
            "aria-expanded": if leaf { None } else { Some(expanded.to_string()) },
            "aria-selected": is_selected,
            {row}
            if !leaf && expanded {
                div { class: "tree-node-children", role: "group", {children} }
            }
        }
    }
}

/// Expand/collapse toggle. Leaves render an empty spacer.
#[component]
pub fn TreeNodeSwitcher(
    node_key: String,
    #[props(default)] is_leaf: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let tree = use_tree_context("TreeNodeSwitcher")?;
    if is_leaf {
        return rsx! {
            span { class: "tree-node-switcher tree-node-switcher-leaf" }
        };
    }

    let expanded = tree.is_expanded(&node_key);
    rsx! {
        span {
            class: "tree-node-switcher",
            "data-state": if expanded { "open" } else { "closed" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if !disabled {
                    tree.toggle_expanded(node_key.clone());
                }
            },
            if expanded {
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
            } else {
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 14, height: 14 }
            }
        }
    }
}

/// Check toggle. On its own it flips only `node_key`; pass `descendants`
/// with [`CheckCascade::Descendants`] to carry the subtree along.
#[component]
pub fn TreeNodeCheckbox(
    node_key: String,
    #[props(default)] descendants: Vec<String>,
    #[props(default)] cascade: CheckCascade,
    #[props(default)] disabled: bool,
) -> Element {
    let tree = use_tree_context("TreeNodeCheckbox")?;
    let state = tree.check_state(&node_key, &descendants);
    let disabled = disabled || (tree.disabled)();

    rsx! {
        span {
            class: "tree-node-checkbox",
            role: "checkbox",
            "aria-checked": state.aria(),
            "aria-disabled": disabled,
            "data-state": state.as_str(),
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if !disabled {
                    tree.toggle_checked(node_key.clone(), descendants.clone(), cascade);
                }
            },
        }
    }
}

#[component]
pub fn TreeNodeContent(
    node_key: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let tree = use_tree_context("TreeNodeContent")?;
    let base = vec![
        Attribute::new("class", "tree-node-content", None, false),
        Attribute::new("data-selected", tree.is_selected(&node_key), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span { ..merged, {children} }
    }
}
