//! Immutable HTTP request descriptors.
//!
//! Building a request performs no I/O; a descriptor is a plain value that a
//! transport interprets on send. Decorators clone the descriptor and modify
//! the copy, never the caller's original.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Version};
use std::time::Duration;
use url::Url;

/// Boundary marker used by multipart upload bodies.
pub const MULTIPART_BOUNDARY: &str = "aas-conduit-file-boundary";

const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data; boundary=aas-conduit-file-boundary";

/// One HTTP request: method, resolved URL, headers, optional body, and
/// per-request transport hints.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Fully resolved target URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body bytes, if any
    pub body: Option<Vec<u8>>,
    /// Per-request timeout overriding the transport default
    pub timeout: Option<Duration>,
    /// Pinned HTTP version, if any
    pub version: Option<Version>,
    /// Send `Expect: 100-continue` before transmitting the body
    pub expect_continue: bool,
}

impl HttpRequest {
    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            version: None,
            expect_continue: false,
        }
    }

    /// GET request for `url`.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// DELETE request for `url`.
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// POST request with a JSON body.
    #[must_use]
    pub fn post_json(url: Url, body: impl Into<String>) -> Self {
        Self::json(Method::POST, url, body)
    }

    /// PUT request with a JSON body.
    #[must_use]
    pub fn put_json(url: Url, body: impl Into<String>) -> Self {
        Self::json(Method::PUT, url, body)
    }

    /// PATCH request with a JSON body.
    #[must_use]
    pub fn patch_json(url: Url, body: impl Into<String>) -> Self {
        Self::json(Method::PATCH, url, body)
    }

    fn json(method: Method, url: Url, body: impl Into<String>) -> Self {
        let mut request = Self::new(method, url);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.body = Some(body.into().into_bytes());
        request
    }

    /// PUT request uploading a file as `multipart/form-data`.
    ///
    /// The body carries a `fileName` text part and a `file` binary part with
    /// the given content type, separated by [`MULTIPART_BOUNDARY`].
    #[must_use]
    pub fn put_file(url: Url, file_name: &str, content_type: &str, content: &[u8]) -> Self {
        let mut request = Self::new(Method::PUT, url);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(MULTIPART_CONTENT_TYPE));

        let mut body = Vec::with_capacity(content.len() + 256);
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"fileName\"\r\n");
        body.extend_from_slice(b"Content-Type: text/plain; charset=UTF-8\r\n\r\n");
        body.extend_from_slice(file_name.as_bytes());
        body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"\r\n");
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
        request.body = Some(body);
        request
    }

    /// Attach an `Authorization` header when a value is given, replacing any
    /// existing one. `None` leaves the request untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidHeaderValue`] if the value contains
    /// characters not allowed in a header.
    pub fn with_authorization(mut self, value: Option<&str>) -> Result<Self, RequestError> {
        if let Some(value) = value {
            let header = HeaderValue::from_str(value)
                .map_err(|e| RequestError::InvalidHeaderValue(e.to_string()))?;
            self.headers.insert(AUTHORIZATION, header);
        }
        Ok(self)
    }

    /// Set an arbitrary header, replacing any existing value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Override the transport timeout for this request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pin the HTTP version for this request.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Ask the transport to send `Expect: 100-continue` before the body.
    #[must_use]
    pub fn with_expect_continue(mut self) -> Self {
        self.expect_continue = true;
        self
    }
}

/// Errors raised while assembling a request descriptor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    /// A header value contained forbidden characters
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),
}
