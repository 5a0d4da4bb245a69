use thiserror::Error;

use crate::host::{Clipboard, Notifier, Workspace};
use crate::links::FormattedLink;
use crate::tabs::TabKind;

#[derive(Debug, Error)]
pub enum CopyLinkError {
    #[error("no active tab to copy a link for")]
    NoActiveTab,
}

/// What a single copy invocation did.
///
/// The host UI only consumes the notices; the outcome exists so callers and
/// tests can observe the path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Link rendered and placed on the clipboard.
    Copied(String),
    /// Active tab kind has no link format; nothing was written and no
    /// notice was emitted.
    NothingToCopy,
    /// No foreground tab; a notice was emitted, no write attempted.
    NoActiveTab,
    /// Clipboard rejected the write. The rendered string is dropped, not
    /// retried or queued.
    WriteFailed(String),
}

/// Resolve the link for the current foreground tab.
///
/// `Ok(None)` means the tab kind is unrecognized and deliberately produces
/// nothing.
pub fn resolve_active_link(
    workspace: &impl Workspace,
) -> Result<Option<FormattedLink>, CopyLinkError> {
    let Some(tab) = workspace.active_tab() else {
        return Err(CopyLinkError::NoActiveTab);
    };

    let link = match tab.kind {
        TabKind::Web => {
            // A web tab whose page address can't be located still links,
            // with an empty target.
            let url = workspace.active_web_address().unwrap_or_default();
            Some(FormattedLink::Markdown {
                title: tab.title,
                url,
            })
        }
        TabKind::Note => Some(FormattedLink::Wiki { title: tab.title }),
        TabKind::Unrecognized => None,
    };

    Ok(link)
}

/// One stateless pass of the copy-link command: locate, classify, render,
/// write, notify.
///
/// Every outcome is terminal for this invocation and none is fatal to the
/// feature; the next invocation starts fresh.
pub fn copy_active_link(
    workspace: &impl Workspace,
    clipboard: &mut impl Clipboard,
    notices: &mut impl Notifier,
) -> CopyOutcome {
    let link = match resolve_active_link(workspace) {
        Ok(Some(link)) => link,
        // Unrecognized tab kinds are dropped without any feedback.
        Ok(None) => return CopyOutcome::NothingToCopy,
        Err(CopyLinkError::NoActiveTab) => {
            notices.notify("No active tab to copy a link for");
            return CopyOutcome::NoActiveTab;
        }
    };

    let text = link.render();
    match clipboard.set_text(&text) {
        Ok(()) => {
            notices.notify(&format!("Copied to clipboard: {text}"));
            CopyOutcome::Copied(text)
        }
        Err(e) => {
            notices.notify("Couldn't copy link to clipboard");
            CopyOutcome::WriteFailed(e.to_string())
        }
    }
}
