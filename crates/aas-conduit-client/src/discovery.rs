//! Basic discovery operations (`/lookup/shells`): resolve shells from asset
//! identifiers and read the asset links of a shell.

use crate::connection::{ClientError, Connection};
use crate::page::Page;
use crate::uri;
use aas_conduit_core::encoding;
use aas_conduit_core::{
    AssetIdentification, BasicDiscoveryCriteria, Content, PagingInfo, QueryModifier,
    SearchCriteria,
};
use aas_conduit_http::HttpRequest;

/// Client for the basic discovery interface.
#[derive(Clone)]
pub struct BasicDiscoveryClient {
    connection: Connection,
}

impl BasicDiscoveryClient {
    /// Client over `connection`.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Identifiers of all shells whose asset links match `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, an unparsable
    /// body, or criteria that cannot be encoded.
    pub async fn find_shell_ids(
        &self,
        criteria: &BasicDiscoveryCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<String>, ClientError> {
        let criteria = SearchCriteria::BasicDiscovery(criteria.clone());
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["lookup", "shells"],
            Content::Normal,
            &QueryModifier::DEFAULT,
            paging,
            &criteria,
        )?;

        tracing::debug!(%url, "GET discovery lookup");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Asset identifiers linked to one shell.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get_asset_links(
        &self,
        aas_id: &str,
    ) -> Result<Vec<AssetIdentification>, ClientError> {
        let encoded_id = encoding::base64_url(aas_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["lookup", "shells", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(aas_id, %url, "GET asset links");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }
}
