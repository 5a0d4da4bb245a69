use dioxus::prelude::*;
use tabref_config::Settings;
use tabref_engine::{DoubleClickTrigger, TabId, copy_active_link};

use crate::host::{
    ArmedHeader, SystemClipboard, Toast, ToastNotifier, WorkspaceView, demo_tabs,
};
use crate::ui::components::{ContentPane, SettingsPanel, TabStrip, ToastStack};

const TABREF_CSS: &str = include_str!("../assets/tabref.css");

#[component]
pub fn App(settings: Settings) -> Element {
    let mut settings = use_signal(move || settings);
    let mut tabs = use_signal(demo_tabs);
    let first_tab = tabs.peek().first().map(|tab| tab.id);
    let mut active = use_signal(move || first_tab);

    let toasts = use_signal(Vec::<Toast>::new);
    let toast_sequence = use_signal(|| 0u64);
    let armed = use_signal(|| None::<TabId>);
    let mut trigger = use_signal(DoubleClickTrigger::new);
    let mut show_settings = use_signal(|| false);

    // Level-triggered reconcile: reruns whenever the tab strip, the active
    // header or the settings change, so the double-click trigger always
    // sits on the current header and a settings toggle takes effect
    // without waiting for the next re-render of the strip.
    use_effect(move || {
        let enabled = settings.read().enable_double_click;
        let open = tabs.read();
        let current = (*active.read()).filter(|id| open.iter().any(|tab| tab.id == *id));
        let mut host = ArmedHeader { armed };
        trigger.write().reconcile(&mut host, enabled, current);
    });

    let on_copy_link = Callback::new(move |_: ()| {
        let open = tabs.read();
        let view = WorkspaceView {
            tabs: open.as_slice(),
            active: *active.read(),
        };
        let mut clipboard = SystemClipboard;
        let mut notices = ToastNotifier {
            toasts,
            sequence: toast_sequence,
        };
        let outcome = copy_active_link(&view, &mut clipboard, &mut notices);
        log::debug!("copy-link finished: {outcome:?}");
    });

    let on_select = Callback::new(move |tab_id: TabId| {
        active.set(Some(tab_id));
    });

    let on_close = Callback::new(move |tab_id: TabId| {
        tabs.write().retain(|tab| tab.id != tab_id);
        if *active.peek() == Some(tab_id) {
            let next = tabs.peek().first().map(|tab| tab.id);
            active.set(next);
        }
    });

    let on_toggle_double_click = Callback::new(move |enabled: bool| {
        let mut current = settings.write();
        current.enable_double_click = enabled;
        // The whole settings file is rewritten on every toggle.
        if let Err(e) = current.save() {
            log::warn!("Failed to save settings: {e}");
        }
    });

    let current_tab = {
        let open = tabs.read();
        let id = *active.read();
        id.and_then(|id| open.iter().find(|tab| tab.id == id).cloned())
    };

    rsx! {
        style { {TABREF_CSS} }
        div {
            class: "app-container",
            header {
                class: "top-bar",
                span { class: "app-title", "tabref" }
                div {
                    class: "top-bar-actions",
                    button {
                        id: "copy-link",
                        class: "copy-link-button",
                        title: "Copy Link",
                        onclick: move |_| on_copy_link.call(()),
                        "Copy Link"
                    }
                    button {
                        class: "settings-button",
                        onclick: move |_| {
                            let shown = *show_settings.read();
                            show_settings.set(!shown);
                        },
                        "Settings"
                    }
                }
            }
            TabStrip {
                tabs: ReadOnlySignal::from(tabs),
                active: ReadOnlySignal::from(active),
                armed: ReadOnlySignal::from(armed),
                on_select,
                on_copy_link,
                on_close,
            }
            if *show_settings.read() {
                SettingsPanel {
                    settings: ReadOnlySignal::from(settings),
                    on_toggle_double_click,
                }
            }
            ContentPane { tab: current_tab }
            ToastStack { toasts }
        }
    }
}
