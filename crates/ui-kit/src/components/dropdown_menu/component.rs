use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use ui_core::menu::{filter, group, MenuOption};
use ui_core::{open_state, ApiMode, HandlerOrder, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    render_slot, slot_attributes, use_api_mode, use_controllable, use_instance_id, AsChild,
    SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct DropdownMenuProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,
    #[props(default)]
    pub default_open: bool,
    #[props(default)]
    pub on_open_change: Callback<bool>,
    /// The selected item value.
    #[props(default)]
    pub value: ReadSignal<Option<String>>,
    #[props(default)]
    pub default_value: Option<String>,
    #[props(default)]
    pub on_select: Callback<String>,
    /// Show a search field above declarative options.
    #[props(default)]
    pub searchable: bool,
    /// Group declarative options under their `group` label.
    #[props(default)]
    pub grouped: bool,
    /// Deprecated: render `DropdownMenuItem` children instead.
    #[props(default)]
    pub options: Option<Vec<MenuOption>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn DropdownMenu(props: DropdownMenuProps) -> Element {
    let mode = use_api_mode(
        &DROPDOWN_MENU,
        props.api,
        &props.children,
        &[("options", props.options.is_some())],
    );

    let default_open = props.default_open;
    let open = use_controllable(props.open, move || default_open);
    let is_open = use_memo(move || open.current());
    let on_open_change = props.on_open_change;
    let set_open = use_callback(move |next: bool| {
        if next != *is_open.peek() {
            on_open_change.call(open.request(next));
        }
    });

    let default_value = props.default_value.clone();
    let value = use_controllable(props.value, move || default_value.unwrap_or_default());
    let current = use_memo(move || value.current());
    let on_select = props.on_select;
    let select = use_callback(move |candidate: String| {
        on_select.call(value.request(candidate));
        set_open.call(false);
    });

    let focused = use_signal(|| None);
    let items = use_hook(|| CopyValue::new(Vec::new()));
    let instance = use_instance_id();
    use_context_provider(|| {
        DropdownMenuContext::attached(DropdownMenuShared {
            open: is_open,
            value: current,
            focused,
            items,
            instance,
            set_open,
            select,
        })
    });

    let base = vec![
        Attribute::new("class", "dropdown-menu", None, false),
        Attribute::new("data-state", open_state(is_open()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div { ..merged, {props.children} }
        },
        ApiMode::Declarative => rsx! {
            div { ..merged,
                OptionsPanel {
                    options: props.options.clone().unwrap_or_default(),
                    searchable: props.searchable,
                    grouped: props.grouped,
                }
            }
        },
    }
}

/// The always-visible panel the declarative API renders.
#[component]
fn OptionsPanel(options: Vec<MenuOption>, searchable: bool, grouped: bool) -> Element {
    let ctx = use_dropdown_menu_context();
    let mut query = use_signal(String::new);

    let filtered = filter(&options, &query.read());
    let sections = if grouped {
        group(&filtered)
    } else {
        vec![(String::new(), filtered)]
    };
    let ordered: Vec<MenuOption> = sections
        .iter()
        .flat_map(|(_, members)| members.iter().map(|o| (*o).clone()))
        .collect();
    let sections: Vec<(String, Vec<(usize, MenuOption)>)> = {
        let mut index = 0;
        sections
            .into_iter()
            .map(|(name, members)| {
                let numbered = members
                    .into_iter()
                    .map(|o| {
                        index += 1;
                        (index - 1, o.clone())
                    })
                    .collect();
                (name, numbered)
            })
            .collect()
    };
    let active = ctx.focused().map(|i| ctx.item_id(i));

    rsx! {
        div {
            class: "dropdown-menu-content",
            role: "menu",
            tabindex: "0",
            "aria-activedescendant": active,
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key().to_string();
                if ctx.navigate(&key, ordered.len()) {
                    evt.prevent_default();
                } else if key == "Enter" {
                    let target = ctx.focused().and_then(|i| ordered.get(i));
                    if let Some(option) = target.filter(|o| !o.disabled) {
                        ctx.select(option.value.clone());
                    }
                }
            },
            if searchable {
                div { class: "dropdown-menu-search",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    input {
                        r#type: "text",
                        placeholder: "Search",
                        value: "{query}",
                        oninput: move |evt: FormEvent| {
                            query.set(evt.value());
                            ctx.set_focused(None);
                        },
                    }
                }
            }
            for (name, members) in sections {
                div { key: "{name}", class: "dropdown-menu-group",
                    if grouped {
                        DropdownMenuLabel { "{name}" }
                    }
                    for (index, option) in members {
                        DropdownMenuItem {
                            key: "{option.value}",
                            value: option.value.clone(),
                            disabled: option.disabled,
                            index,
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Toggles the menu.
#[component]
pub fn DropdownMenuTrigger(
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dropdown_menu_context();
    let open = ctx.is_open();

    let slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("dropdown-menu-trigger")
        .attr("aria-haspopup", "menu")
        .attr("aria-expanded", open)
        .attr("data-state", open_state(open))
        .on(SlotEvent::Click, SlotHandler::mouse(move |_| ctx.set_open(!ctx.is_open())));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        button {
            r#type: "button",
            onclick: move |_| ctx.set_open(!ctx.is_open()),
            ..merged,
            {children}
        }
    }
}

/// The item list. Renders nothing while closed.
#[component]
pub fn DropdownMenuContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dropdown_menu_context();
    if !ctx.is_open() {
        return rsx! {};
    }
    rsx! {
        OpenContent { attributes, {children} }
    }
}

// Split out so item registration restarts each time the menu opens.
#[component]
fn OpenContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dropdown_menu_context();
    use_hook(|| ctx.reset_items());
    let active = ctx.focused().map(|i| ctx.item_id(i));

    let base = vec![Attribute::new("class", "dropdown-menu-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "menu",
            tabindex: "0",
            "aria-activedescendant": active,
            onkeydown: move |evt: KeyboardEvent| {
                if ctx.handle_key(&evt.key().to_string()) {
                    evt.prevent_default();
                }
            },
            ..merged,
            {children}
        }
    }
}

/// A selectable entry. `index` fixes its position for keyboard
/// navigation; without it the item takes the next free slot.
#[component]
pub fn DropdownMenuItem(
    #[props(into)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] index: Option<usize>,
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_dropdown_menu_context();
    let registered = use_hook({
        let value = value.clone();
        move || match index {
            Some(_) => None,
            None => ctx.register(value, disabled),
        }
    });
    use_drop(move || {
        if let Some(slot) = registered {
            ctx.deregister(slot);
        }
    });
    let position = index.or(registered);
    let highlighted = position.is_some() && position == ctx.focused();
    let selected = ctx.is_selected(&value);

    let pick = {
        let value = value.clone();
        move || {
            if !disabled {
                ctx.select(value.clone());
            }
        }
    };

    let mut slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("dropdown-menu-item")
        .attr("role", "menuitem")
        .attr("aria-disabled", disabled)
        .attr("data-selected", selected)
        .attr("data-highlighted", highlighted)
        .on(SlotEvent::Click, SlotHandler::mouse({
            let pick = pick.clone();
            move |_| pick()
        }))
        .on(SlotEvent::MouseEnter, SlotHandler::mouse(move |_| ctx.set_focused(position)));
    if let Some(position) = position {
        slot = slot.attr("id", ctx.item_id(position));
    }

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        div {
            onclick: move |_| pick(),
            onmouseenter: move |_| ctx.set_focused(position),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "dropdown-menu-separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { role: "separator", ..merged }
    }
}

#[component]
pub fn DropdownMenuLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "dropdown-menu-label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}
