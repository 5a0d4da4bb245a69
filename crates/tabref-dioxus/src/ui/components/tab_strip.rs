use dioxus::prelude::*;
use tabref_engine::TabId;

use crate::host::OpenTab;

#[component]
pub fn TabStrip(
    tabs: ReadOnlySignal<Vec<OpenTab>>,
    active: ReadOnlySignal<Option<TabId>>,
    armed: ReadOnlySignal<Option<TabId>>,
    on_select: EventHandler<TabId>,
    on_copy_link: EventHandler<()>,
    on_close: EventHandler<TabId>,
) -> Element {
    rsx! {
        div {
            class: "tab-strip",
            for tab in tabs.read().iter().cloned() {
                TabHeader {
                    key: "{tab.id.0}",
                    is_active: *active.read() == Some(tab.id),
                    is_armed: *armed.read() == Some(tab.id),
                    tab,
                    on_select,
                    on_copy_link,
                    on_close,
                }
            }
        }
    }
}

#[component]
pub fn TabHeader(
    tab: OpenTab,
    is_active: bool,
    is_armed: bool,
    on_select: EventHandler<TabId>,
    on_copy_link: EventHandler<()>,
    on_close: EventHandler<TabId>,
) -> Element {
    let tab_id = tab.id;
    let classes = if is_active {
        "tab-header active"
    } else {
        "tab-header"
    };

    rsx! {
        div {
            class: "{classes}",
            "data-tab-kind": "{tab.marker}",
            onclick: move |_| on_select.call(tab_id),
            ondoubleclick: move |_| {
                // The double-click trigger only lives on the armed header;
                // everywhere else the gesture is inert.
                if is_armed {
                    on_copy_link.call(());
                }
            },

            span { class: "tab-title", "{tab.title}" }
            button {
                class: "tab-close",
                onclick: move |event| {
                    event.stop_propagation();
                    on_close.call(tab_id);
                },
                "×"
            }
        }
    }
}
