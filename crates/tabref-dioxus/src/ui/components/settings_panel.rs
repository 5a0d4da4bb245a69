use dioxus::prelude::*;
use tabref_config::Settings;

#[component]
pub fn SettingsPanel(
    settings: ReadOnlySignal<Settings>,
    on_toggle_double_click: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "settings-panel",
            h2 { "Settings" }
            label {
                class: "settings-row",
                input {
                    r#type: "checkbox",
                    checked: settings.read().enable_double_click,
                    oninput: move |event| on_toggle_double_click.call(event.checked()),
                }
                span { "Double-click a tab header to copy its link" }
            }
        }
    }
}
