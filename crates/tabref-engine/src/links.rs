/// A rendered reference link to a tab.
///
/// Produced, rendered and discarded within a single copy operation; never
/// retained anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedLink {
    /// Standard `[text](url)` hyperlink to rendered web content.
    Markdown { title: String, url: String },
    /// Double-bracket `[[Title]]` reference to a note.
    Wiki { title: String },
}

impl FormattedLink {
    /// Render the link string that goes on the clipboard.
    pub fn render(&self) -> String {
        match self {
            FormattedLink::Markdown { title, url } => format!("[{title}]({url})"),
            FormattedLink::Wiki { title } => format!("[[{title}]]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wiki_link() {
        let link = FormattedLink::Wiki {
            title: "Project Notes".to_string(),
        };
        assert_eq!(link.render(), "[[Project Notes]]");
    }

    #[test]
    fn test_render_markdown_link() {
        let link = FormattedLink::Markdown {
            title: "Docs".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(link.render(), "[Docs](https://example.com)");
    }

    #[test]
    fn test_render_markdown_link_with_missing_address() {
        // A web tab whose page address couldn't be read still renders, with
        // an empty target.
        let link = FormattedLink::Markdown {
            title: "Docs".to_string(),
            url: String::new(),
        };
        assert_eq!(link.render(), "[Docs]()");
    }

    #[test]
    fn test_titles_pass_through_verbatim() {
        // No escaping or validation of titles; the host's title text is
        // copied as-is.
        let link = FormattedLink::Wiki {
            title: "Notes [draft] 2026".to_string(),
        };
        assert_eq!(link.render(), "[[Notes [draft] 2026]]");
    }
}
