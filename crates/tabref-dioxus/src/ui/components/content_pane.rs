use dioxus::prelude::*;

use crate::host::OpenTab;

#[component]
pub fn ContentPane(tab: Option<OpenTab>) -> Element {
    let Some(tab) = tab else {
        return rsx! {
            div {
                class: "content-pane empty",
                p { "No open tabs." }
            }
        };
    };

    if let Some(text) = &tab.note_text {
        rsx! {
            div {
                class: "content-pane note",
                pre { "{text}" }
            }
        }
    } else if let Some(address) = &tab.web_address {
        rsx! {
            div {
                class: "content-pane web",
                div { class: "web-address-bar", "{address}" }
                div { class: "web-frame", "Rendered page content" }
            }
        }
    } else {
        rsx! {
            div {
                class: "content-pane unknown",
                p { "No preview for this tab type." }
            }
        }
    }
}
