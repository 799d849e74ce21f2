//! The paged list envelope returned by AAS Part 2 list operations.

use serde::Deserialize;

/// One page of results plus continuation metadata.
///
/// List endpoints answer with `{"paging_metadata": {...}, "result": [...]}`;
/// both fields default when missing so older servers that omit the metadata
/// still parse.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Elements of this page
    #[serde(default)]
    pub result: Vec<T>,
    /// Continuation metadata
    #[serde(default)]
    pub paging_metadata: PagingMetadata,
}

impl<T> Page<T> {
    /// Cursor for the next page, when the server indicated one.
    ///
    /// Feed it to `PagingInfo::from_cursor` (or `PagingInfo::of`) to fetch
    /// the following page.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging_metadata.cursor.as_deref()
    }
}

/// Cursor container inside the paged envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagingMetadata {
    /// Opaque continuation cursor; `None` on the last page
    pub cursor: Option<String>,
}
