//! Environment serialization (`/serialization`): export selected shells and
//! submodels as one serialized environment.

use crate::connection::{ClientError, Connection};
use crate::uri;
use aas_conduit_core::{Content, PagingInfo, QueryModifier, SearchCriteria, SerializationCriteria};
use aas_conduit_http::HttpRequest;
use reqwest::header::{HeaderValue, ACCEPT};

/// Client for the serialization interface.
#[derive(Clone)]
pub struct SerializationClient {
    connection: Connection,
}

impl SerializationClient {
    /// Client over `connection`.
    #[must_use]
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Generate a serialized environment for the shells and submodels named
    /// in `criteria`, requested as JSON.
    ///
    /// Returns the raw serialized bytes.
    ///
    /// # Errors
    ///
    /// Returns error on network failures or non-2xx answers.
    pub async fn generate(&self, criteria: &SerializationCriteria) -> Result<Vec<u8>, ClientError> {
        let criteria = SearchCriteria::Serialization(criteria.clone());
        let url = uri::resource_url(
            self.connection.endpoint(),
            &["serialization"],
            Content::Normal,
            &QueryModifier::DEFAULT,
            &PagingInfo::ALL,
            &criteria,
        )?;

        tracing::debug!(%url, "GET serialization");

        let request = HttpRequest::get(url)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"));
        let response = self.connection.send_checked(&request).await?;
        Ok(response.body)
    }
}
