//! Pagination parameters for list operations.

use crate::encoding;

/// Paging constraints: an optional result limit and an opaque continuation
/// cursor from a previous page.
///
/// Cursors are server-issued values; they are base64url-encoded (no padding)
/// when rendered into a query string, so a cursor that itself looks like
/// base64 survives the trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingInfo {
    /// Maximum number of results to return; `None` leaves it to the server
    pub limit: Option<u32>,
    /// Continuation cursor from a previous page's metadata
    pub cursor: Option<String>,
}

impl PagingInfo {
    /// No paging constraints; renders to nothing.
    pub const ALL: Self = Self {
        limit: None,
        cursor: None,
    };

    /// Paging with a result limit only.
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
        }
    }

    /// Paging with a limit and a continuation cursor.
    #[must_use]
    pub fn of(limit: u32, cursor: impl Into<String>) -> Self {
        Self {
            limit: Some(limit),
            cursor: Some(cursor.into()),
        }
    }

    /// Continue from `cursor` without a limit.
    #[must_use]
    pub fn from_cursor(cursor: impl Into<String>) -> Self {
        Self {
            limit: None,
            cursor: Some(cursor.into()),
        }
    }

    /// `true` when neither limit nor cursor is set. Structural, so any
    /// freshly built unconstrained value counts, not just [`PagingInfo::ALL`].
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.limit.is_none() && self.cursor.is_none()
    }

    /// Query fragment for the limit, e.g. `limit=50`. Empty if unset.
    #[must_use]
    pub fn limit_fragment(&self) -> String {
        self.limit.map(|l| format!("limit={l}")).unwrap_or_default()
    }

    /// Query fragment for the cursor with the cursor base64url-encoded,
    /// e.g. `cursor=YWJj`. Empty if unset.
    #[must_use]
    pub fn cursor_fragment(&self) -> String {
        self.cursor
            .as_deref()
            .map(|c| format!("cursor={}", encoding::base64_url(c)))
            .unwrap_or_default()
    }
}
