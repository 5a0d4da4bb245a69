use crate::tabs::{ActiveTab, TabId};

/// Read-only view into the host UI's tab state.
///
/// Both lookups are recomputed from live UI state on every call; the engine
/// never caches what they return.
pub trait Workspace {
    /// The foreground tab header, if any tab is open.
    fn active_tab(&self) -> Option<ActiveTab>;

    /// Source address of the embedded web view on the active tab, if one
    /// exists. Only meaningful for web tabs.
    fn active_web_address(&self) -> Option<String>;
}

/// System clipboard write seam.
///
/// The write may fail outright when the platform denies access or no
/// clipboard is available.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Transient user-visible notices (toasts). Never persisted.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Host-side attach/detach of the double-click trigger on a tab header.
///
/// Detaching a header that carries no trigger must be a no-op.
pub trait TriggerHost {
    fn attach(&mut self, tab: TabId);
    fn detach(&mut self, tab: TabId);
}
