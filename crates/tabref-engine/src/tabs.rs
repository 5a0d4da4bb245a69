/// Type discriminator carried on a workspace tab header.
///
/// The host UI marks each tab header with a type marker string; everything
/// that isn't one of the two recognized markers is `Unrecognized` and never
/// produces a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Rendered web content with an embedded page address.
    Web,
    /// Editable markdown note content.
    Note,
    /// Any other tab type.
    Unrecognized,
}

impl TabKind {
    /// Classify the type marker string from a tab header element.
    ///
    /// Markers are an exact-match contract with the host; no normalization.
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "web" => TabKind::Web,
            "note" => TabKind::Note,
            _ => TabKind::Unrecognized,
        }
    }
}

/// Read-only view of the foreground tab header.
///
/// Recomputed from host UI state on every invocation; no identity persists
/// across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTab {
    pub title: String,
    pub kind: TabKind,
}

/// Identifier for an open tab header, used to track which header currently
/// carries the double-click trigger.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TabId(pub u64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("web", TabKind::Web)]
    #[case("note", TabKind::Note)]
    #[case("graph", TabKind::Unrecognized)]
    #[case("", TabKind::Unrecognized)]
    #[case("Web", TabKind::Unrecognized)]
    #[case("note ", TabKind::Unrecognized)]
    fn test_classify_tab_marker(#[case] marker: &str, #[case] expected: TabKind) {
        assert_eq!(TabKind::from_marker(marker), expected);
    }
}
