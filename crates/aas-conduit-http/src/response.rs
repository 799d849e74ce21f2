//! HTTP response snapshots and file-content extraction.

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// File name used when a response carries no usable `Content-Disposition`.
pub const DEFAULT_FILE_NAME: &str = "unknown";

/// One HTTP response, fully read: status, headers, and body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body rendered as UTF-8 text, lossily.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Turn the response into a named file.
    ///
    /// The name comes from the `filename` parameter of the
    /// `Content-Disposition` header, matched case-insensitively with
    /// surrounding quotes stripped; [`DEFAULT_FILE_NAME`] when the header or
    /// parameter is missing. Body bytes move into the result unchanged.
    #[must_use]
    pub fn into_file_content(self) -> FileContent {
        let file_name = match self
            .headers
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_file_name)
        {
            Some(name) => name,
            None => {
                tracing::debug!("No usable Content-Disposition; using default file name");
                DEFAULT_FILE_NAME.to_string()
            }
        };
        let content_type = self
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        FileContent {
            file_name,
            content_type,
            content: self.body,
        }
    }
}

/// Extract the `filename` parameter from a `Content-Disposition` value.
fn parse_file_name(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|parameter| {
        let (key, value) = parameter.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("filename") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}

/// A file downloaded from (or destined for) an attachment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// File name reported by the server, or [`DEFAULT_FILE_NAME`]
    pub file_name: String,
    /// Content type of the payload, if the server sent one
    pub content_type: Option<String>,
    /// Raw file bytes
    pub content: Vec<u8>,
}
