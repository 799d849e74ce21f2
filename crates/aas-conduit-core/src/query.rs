//! Query-string and URI assembly.
//!
//! Fragments render in a fixed order (level, extent, limit, cursor, search
//! criteria) and only non-empty fragments are joined, so the output never
//! contains `&&`, never starts or ends the query with `&`, and carries `?`
//! only when at least one fragment rendered.

use crate::criteria::{CriteriaError, SearchCriteria};
use crate::modifier::{Content, QueryModifier};
use crate::paging::PagingInfo;

/// Render the content suffix plus query string for one request.
///
/// The result is `<content-suffix>?<query>`, where the suffix is empty for
/// [`Content::Normal`] and the `?<query>` part is omitted entirely when all
/// parameters are at their defaults.
///
/// # Errors
///
/// Returns [`CriteriaError`] if the search criteria cannot be rendered.
///
/// # Examples
///
/// ```
/// use aas_conduit_core::query;
/// use aas_conduit_core::{Content, PagingInfo, QueryModifier, SearchCriteria};
///
/// let suffix = query::apply(
///     Content::Metadata,
///     &QueryModifier::DEFAULT,
///     &PagingInfo::ALL,
///     &SearchCriteria::Default,
/// )
/// .unwrap();
/// assert_eq!(suffix, "/$metadata");
/// ```
pub fn apply(
    content: Content,
    modifier: &QueryModifier,
    paging: &PagingInfo,
    criteria: &SearchCriteria,
) -> Result<String, CriteriaError> {
    let query = query_string(modifier, paging, criteria)?;
    if query.is_empty() {
        Ok(content.path_suffix().to_string())
    } else {
        Ok(format!("{}?{query}", content.path_suffix()))
    }
}

/// Render a full request path: base path plus content suffix and query.
///
/// # Errors
///
/// Returns [`CriteriaError`] if the search criteria cannot be rendered.
///
/// # Examples
///
/// ```
/// use aas_conduit_core::query;
/// use aas_conduit_core::{Content, Level, PagingInfo, QueryModifier, SearchCriteria};
///
/// let uri = query::build_uri(
///     "/shells",
///     Content::Normal,
///     &QueryModifier::with_level(Level::Deep),
///     &PagingInfo::with_limit(50),
///     &SearchCriteria::Default,
/// )
/// .unwrap();
/// assert_eq!(uri, "/shells?level=deep&limit=50");
/// ```
pub fn build_uri(
    base_path: &str,
    content: Content,
    modifier: &QueryModifier,
    paging: &PagingInfo,
    criteria: &SearchCriteria,
) -> Result<String, CriteriaError> {
    Ok(format!(
        "{base_path}{}",
        apply(content, modifier, paging, criteria)?
    ))
}

/// Render only the joined query fragments, without `?` or content suffix.
///
/// For callers that manage the URL path through a parser and only need the
/// query part.
///
/// # Errors
///
/// Returns [`CriteriaError`] if the search criteria cannot be rendered.
pub fn query_string(
    modifier: &QueryModifier,
    paging: &PagingInfo,
    criteria: &SearchCriteria,
) -> Result<String, CriteriaError> {
    let fragments = [
        modifier.level.query_fragment().to_string(),
        modifier.extent.query_fragment().to_string(),
        paging.limit_fragment(),
        paging.cursor_fragment(),
        criteria.to_query_string()?,
    ];

    Ok(fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("&"))
}
