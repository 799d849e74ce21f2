//! Submodel repository operations (`/submodels`), including `$value` views,
//! element access by `idShortPath`, and file attachments.

use crate::connection::{ClientError, Connection};
use crate::page::Page;
use crate::uri;
use aas_conduit_core::encoding;
use aas_conduit_core::{query, Content, PagingInfo, QueryModifier, SearchCriteria};
use aas_conduit_http::{FileContent, HttpRequest};
use serde_json::Value;
use url::Url;

/// Client for a submodel repository.
#[derive(Clone)]
pub struct SubmodelRepositoryClient {
    connection: Connection,
}

impl SubmodelRepositoryClient {
    /// Client over `connection`.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// List submodels as one page.
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
            &["submodels"],
            Content::Normal,
            modifier,
            paging,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(%url, "GET submodels");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch one submodel by identifier.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get(
        &self,
        submodel_id: &str,
        content: Content,
        modifier: &QueryModifier,
    ) -> Result<Value, ClientError> {
        let encoded_id = encoding::base64_url(submodel_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["submodels", &encoded_id],
            content,
            modifier,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(submodel_id, %url, "GET submodel");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create a submodel; returns the created resource.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn post(&self, submodel: &Value) -> Result<Value, ClientError> {
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["submodels"],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body =
            serde_json::to_string(submodel).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(%url, "POST submodel");

        let response = self
            .connection
            .send_checked(&HttpRequest::post_json(url, body))
            .await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Replace a submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn put(&self, submodel_id: &str, submodel: &Value) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(submodel_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["submodels", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let body =
            serde_json::to_string(submodel).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(submodel_id, %url, "PUT submodel");

        self.connection
            .send_checked(&HttpRequest::put_json(url, body))
            .await?;
        Ok(())
    }

    /// Delete a submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn delete(&self, submodel_id: &str) -> Result<(), ClientError> {
        let encoded_id = encoding::base64_url(submodel_id);
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["submodels", &encoded_id],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;

        tracing::debug!(submodel_id, %url, "DELETE submodel");

        self.connection
            .send_checked(&HttpRequest::delete(url))
            .await?;
        Ok(())
    }

    /// Fetch the `$value` view of a submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get_value(&self, submodel_id: &str) -> Result<Value, ClientError> {
        let url = self.submodel_value_url(submodel_id)?;

        tracing::debug!(submodel_id, %url, "GET submodel $value");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Patch the `$value` view of a submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn patch_value(&self, submodel_id: &str, value: &Value) -> Result<(), ClientError> {
        let url = self.submodel_value_url(submodel_id)?;
        let body =
            serde_json::to_string(value).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(submodel_id, %url, "PATCH submodel $value");

        self.connection
            .send_checked(&HttpRequest::patch_json(url, body))
            .await?;
        Ok(())
    }

    /// Fetch one element's `$value` by `idShortPath`.
    ///
    /// # Errors
    ///
    /// Returns error on network failures, non-2xx answers, or an unparsable
    /// body.
    pub async fn get_element_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<Value, ClientError> {
        let url = self.element_url(submodel_id, id_short_path, Content::Value)?;

        tracing::debug!(submodel_id, id_short_path, %url, "GET element $value");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        response.json().map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Patch one element's `$value` by `idShortPath`.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn patch_element_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        value: &Value,
    ) -> Result<(), ClientError> {
        let url = self.element_url(submodel_id, id_short_path, Content::Value)?;
        let body =
            serde_json::to_string(value).map_err(|e| ClientError::Encoding(e.to_string()))?;

        tracing::debug!(submodel_id, id_short_path, %url, "PATCH element $value");

        self.connection
            .send_checked(&HttpRequest::patch_json(url, body))
            .await?;
        Ok(())
    }

    /// Download the file attachment of a `File` element.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn get_attachment(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<FileContent, ClientError> {
        let url = self.attachment_url(submodel_id, id_short_path)?;

        tracing::debug!(submodel_id, id_short_path, %url, "GET attachment");

        let response = self.connection.send_checked(&HttpRequest::get(url)).await?;
        Ok(response.into_file_content())
    }

    /// Upload the file attachment of a `File` element as multipart form
    /// data.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn put_attachment(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content_type: &str,
        content: &[u8],
    ) -> Result<(), ClientError> {
        let url = self.attachment_url(submodel_id, id_short_path)?;

        tracing::debug!(submodel_id, id_short_path, file_name, %url, "PUT attachment");

        self.connection
            .send_checked(&HttpRequest::put_file(url, file_name, content_type, content))
            .await?;
        Ok(())
    }

    // Value and attachment paths are assembled as strings, the same shape
    // the server documents them in; the collection paths above go through
    // the segment-based builder. Both end at identical URIs.

    fn submodel_value_url(&self, submodel_id: &str) -> Result<Url, ClientError> {
        let suffix = query::apply(
            Content::Value,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let raw = format!(
            "{}/submodels/{}{suffix}",
            self.connection.endpoint_str(),
            encoding::base64_url(submodel_id)
        );
        Url::parse(&raw).map_err(|e| ClientError::Encoding(format!("invalid URL {raw}: {e}")))
    }

    fn element_url(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        content: Content,
    ) -> Result<Url, ClientError> {
        let suffix = query::apply(
            content,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &SearchCriteria::Default,
        )?;
        let raw = format!(
            "{}/submodels/{}/submodel-elements/{}{suffix}",
            self.connection.endpoint_str(),
            encoding::base64_url(submodel_id),
            encoding::encode_id_short_path(id_short_path)
        );
        Url::parse(&raw).map_err(|e| ClientError::Encoding(format!("invalid URL {raw}: {e}")))
    }

    fn attachment_url(&self, submodel_id: &str, id_short_path: &str) -> Result<Url, ClientError> {
        let raw = format!(
            "{}/submodels/{}/submodel-elements/{}/attachment",
            self.connection.endpoint_str(),
            encoding::base64_url(submodel_id),
            encoding::encode_id_short_path(id_short_path)
        );
        Url::parse(&raw).map_err(|e| ClientError::Encoding(format!("invalid URL {raw}: {e}")))
    }
}
