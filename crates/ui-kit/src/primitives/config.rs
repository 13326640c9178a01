use dioxus::prelude::*;
use ui_core::KitConfig;

/// Provides library-wide settings to every component below it.
///
/// `config` is read once, when the provider mounts.
#[component]
pub fn KitProvider(#[props(default)] config: KitConfig, children: Element) -> Element {
    let state = use_signal(|| config);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Settings from the nearest [`KitProvider`], or the defaults.
pub fn use_kit_config() -> KitConfig {
    try_use_context::<Signal<KitConfig>>()
        .map(|state| state())
        .unwrap_or_default()
}
