//! Shell repository operations (`/shells`).

use crate::connection::{ClientError, Connection};
use crate::page::Page;
use crate::uri;
use aas_conduit_core::encoding;
use aas_conduit_core::{Content, PagingInfo, QueryModifier, SearchCriteria};
use aas_conduit_http::HttpRequest;
use serde_json::Value;

/// Client for the shell collection of an AAS repository.
///
/// Shells travel as raw JSON values; the repository owns their schema.
#[derive(Clone)]
pub struct ShellRepositoryClient {
    connection: Connection,
}

impl ShellRepositoryClient {
    /// Client over `connection`.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// List shells as one page.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get_all(
        &self,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<Value>, ClientError> {
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["shells"],
            Content::Normal,
            modifier,
            paging,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(%url, "GET shells");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch one shell by identifier.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get(
        &self,
        aas_id: &str,
        content: Content,
        modifier: &QueryModifier,
    ) -> Result<Value, ClientError> {
        let encoded_id = encoding::base64_url(aas_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["shells", &encoded_id],
            content,
            modifier,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(aas_id, %url, "GET shell");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create a shell; returns the created resource.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn post(&self, shell: &Value) -> Result<Value, ClientError> {
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["shells"],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body =
            serde_json::to_string(shell).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(%url, "POST shell");

        let response = self
            .connection
            .send_checked(&HttpRequest::post_json(url, body))
            .await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Replace a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn put(&self, aas_id: &str, shell: &Value) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(aas_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["shells", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body =
            serde_json::to_string(shell).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(aas_id, %url, "PUT shell");

        self.connection
            .send_checked(&HttpRequest::put_json(url, body))
            .await?;
        Ok(())
    }

    /// Delete a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn delete(&self, aas_id: &str) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(aas_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["shells", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(aas_id, %url, "DELETE shell");

        self.connection
            .send_checked(&HttpRequest::delete(url))
            .await?;
        Ok(())
    }
}
