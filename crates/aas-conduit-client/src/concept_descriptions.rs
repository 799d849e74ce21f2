//! Concept-description repository operations (`/concept-descriptions`).

use crate::connection::{ClientError, Connection};
use crate::page::Page;
use crate::uri;
use aas_conduit_core::encoding;
use aas_conduit_core::{
    ConceptDescriptionCriteria, Content, PagingInfo, QueryModifier, SearchCriteria,
};
use aas_conduit_http::HttpRequest;
use serde_json::Value;

/// Client for a concept-description repository.
#[derive(Clone)]
pub struct ConceptDescriptionRepositoryClient {
    connection: Connection,
}

impl ConceptDescriptionRepositoryClient {
    /// Client over `connection`.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// List concept descriptions matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get_all(
        &self,
        criteria: &ConceptDescriptionCriteria,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<Value>, ClientError> {
        let criteria = SearchCriteria::ConceptDescription(criteria.clone());
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["concept-descriptions"],
            Content::Normal,
            modifier,
            paging,
            &criteria,
        )?;

        tracing::debug!(%url, "GET concept descriptions");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch one concept description by identifier.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get(&self, cd_id: &str) -> Result<Value, ClientError> {
        let encoded_id = encoding::base64_url(cd_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["concept-descriptions", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(cd_id, %url, "GET concept description");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create a concept description; returns the created resource.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn post(&self, concept_description: &Value) -> Result<Value, ClientError> {
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["concept-descriptions"],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body = serde_json::to_string(concept_description)
            .map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(%url, "POST concept description");

        let response = self
            .connection
            .send_checked(&HttpRequest::post_json(url, body))
            .await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Replace a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn put(&self, cd_id: &str, concept_description: &Value) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(cd_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["concept-descriptions", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body = serde_json::to_string(concept_description)
            .map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(cd_id, %url, "PUT concept description");

        self.connection
            .send_checked(&HttpRequest::put_json(url, body))
            .await?;
        Ok(())
    }

    /// Delete a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn delete(&self, cd_id: &str) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(cd_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["concept-descriptions", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(cd_id, %url, "DELETE concept description");

        self.connection
            .send_checked(&HttpRequest::delete(url))
            .await?;
        Ok(())
    }
}
