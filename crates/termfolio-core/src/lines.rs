//! Virtual line list derived from the widget content.
//!
//! The cursor addresses logical rows, not rendered cells. The list always
//! starts with two fixed header rows (the prompt/path row and the echo
//! row), followed by a fixed number of rows per content item as declared
//! by [`ContentKind::lines_per_item`](crate::content::ContentKind).

use crate::content::{ContentKind, ContentSet};

/// Fixed header rows at the top of every widget.
pub const HEADER_LINES: usize = 2;

/// Styling class of a virtual line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Working-directory prompt row with the branch label.
    Path,
    /// The `$ echo "..."` row carrying the info string.
    Echo,
    /// First row of a content item.
    ItemTitle,
    /// Any follow-up row of a content item.
    ItemBody,
}

/// One addressable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub text: String,
    pub kind: LineKind,
}

impl LineView {
    fn new(text: String, kind: LineKind) -> Self {
        Self { text, kind }
    }
}

/// The ordered logical rows the cursor can address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualLines {
    rows: Vec<LineView>,
    kind: ContentKind,
}

impl VirtualLines {
    /// Derive the line list from display strings and a content set.
    #[must_use]
    pub fn derive(path_line: &str, branch: &str, info_text: &str, content: &ContentSet) -> Self {
        let mut rows = Vec::with_capacity(
            HEADER_LINES + content.kind().lines_per_item() * content.item_count(),
        );
        rows.push(LineView::new(
            format!("{path_line} git:({branch})"),
            LineKind::Path,
        ));
        rows.push(LineView::new(
            format!("$ echo \"{info_text}\""),
            LineKind::Echo,
        ));

        match content {
            ContentSet::Projects(items) => {
                for item in items {
                    rows.push(LineView::new(item.title.clone(), LineKind::ItemTitle));
                    rows.push(LineView::new(
                        format!("  {}", item.description),
                        LineKind::ItemBody,
                    ));
                    rows.push(LineView::new(
                        annotated_link(&item.repo_url, &item.technologies),
                        LineKind::ItemBody,
                    ));
                }
            }
            ContentSet::Work(items) => {
                for item in items {
                    rows.push(LineView::new(
                        format!("{} @ {}", item.title, item.company),
                        LineKind::ItemTitle,
                    ));
                    rows.push(LineView::new(
                        format!("  {}", item.duration),
                        LineKind::ItemBody,
                    ));
                    rows.push(LineView::new(
                        format!("  {}", item.description),
                        LineKind::ItemBody,
                    ));
                    rows.push(LineView::new(
                        annotated_link(&item.link, &item.technologies),
                        LineKind::ItemBody,
                    ));
                }
            }
        }

        Self {
            rows,
            kind: content.kind(),
        }
    }

    /// Total addressable rows; the cursor row is clamped to this minus one.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn line(&self, row: usize) -> Option<&LineView> {
        self.rows.get(row)
    }

    /// Display length of a row in characters; 0 for out-of-range rows.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.rows
            .get(row)
            .map_or(0, |line| line.text.chars().count())
    }
}

fn annotated_link(url: &str, technologies: &[String]) -> String {
    if technologies.is_empty() {
        format!("  {url}")
    } else {
        format!("  {url} [{}]", technologies.join(", "))
    }
}
