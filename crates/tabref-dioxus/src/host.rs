//! Adapters between the UI state and the engine's host traits.

use anyhow::Context;
use dioxus::prelude::*;
use tabref_engine::{ActiveTab, Clipboard, Notifier, TabId, TabKind, TriggerHost, Workspace};

/// One open tab in the workspace.
///
/// `marker` is the type marker string carried on the header element; the
/// engine classifies it, this struct never does.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenTab {
    pub id: TabId,
    pub title: String,
    pub marker: String,
    pub note_text: Option<String>,
    pub web_address: Option<String>,
}

/// Read-only snapshot of the tab strip handed to the engine on each
/// invocation.
pub struct WorkspaceView<'a> {
    pub tabs: &'a [OpenTab],
    pub active: Option<TabId>,
}

impl WorkspaceView<'_> {
    fn active_open_tab(&self) -> Option<&OpenTab> {
        let id = self.active?;
        self.tabs.iter().find(|tab| tab.id == id)
    }
}

impl Workspace for WorkspaceView<'_> {
    fn active_tab(&self) -> Option<ActiveTab> {
        let tab = self.active_open_tab()?;
        Some(ActiveTab {
            title: tab.title.clone(),
            kind: TabKind::from_marker(&tab.marker),
        })
    }

    fn active_web_address(&self) -> Option<String> {
        self.active_open_tab()?.web_address.clone()
    }
}

/// Writes through the system clipboard.
///
/// arboard handles hold a platform connection, so a fresh one is opened
/// per write.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to access system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

/// A single transient notice in the toast stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Routes engine notices into the toast stack signal.
pub struct ToastNotifier {
    pub toasts: Signal<Vec<Toast>>,
    pub sequence: Signal<u64>,
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, message: &str) {
        let id = {
            let mut sequence = self.sequence.write();
            *sequence += 1;
            *sequence
        };
        self.toasts.write().push(Toast {
            id,
            message: message.to_string(),
        });
    }
}

/// The Dioxus rendition of trigger attach/detach: the armed header id is UI
/// state, and a header's double-click handler only fires the copy when its
/// own id is armed.
pub struct ArmedHeader {
    pub armed: Signal<Option<TabId>>,
}

impl TriggerHost for ArmedHeader {
    fn attach(&mut self, tab: TabId) {
        self.armed.set(Some(tab));
    }

    fn detach(&mut self, tab: TabId) {
        // Detaching a header that isn't armed is a no-op.
        if *self.armed.peek() == Some(tab) {
            self.armed.set(None);
        }
    }
}

/// The tabs the workspace opens with.
pub fn demo_tabs() -> Vec<OpenTab> {
    vec![
        OpenTab {
            id: TabId(1),
            title: "Project Notes".to_string(),
            marker: "note".to_string(),
            note_text: Some(
                "# Project Notes\n\n- [[Roadmap]] review on Thursday\n- Collect feedback from the pilot group\n"
                    .to_string(),
            ),
            web_address: None,
        },
        OpenTab {
            id: TabId(2),
            title: "Docs".to_string(),
            marker: "web".to_string(),
            note_text: None,
            web_address: Some("https://example.com".to_string()),
        },
        OpenTab {
            id: TabId(3),
            title: "Graph".to_string(),
            marker: "graph".to_string(),
            note_text: None,
            web_address: None,
        },
    ]
}
