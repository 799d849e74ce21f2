//! Credential supply and the authenticating transport decorator.
//!
//! The decorator queries its credential supplier once per send, so suppliers
//! backed by refreshing tokens always contribute the value current at send
//! time. Caller requests are never mutated: decoration clones the request
//! and injects the `Authorization` header into the copy.

use crate::request::HttpRequest;
use crate::response::HttpResponse;
use crate::transport::{HttpTransport, ProtocolVersion, RedirectPolicy, TlsConfig, TransportError};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use std::time::Duration;
use url::Url;

/// Source of an `Authorization` header value, queried once per outgoing
/// request.
///
/// Returning `None` means "send unauthenticated". That is a valid state for
/// public endpoints, not an error.
pub trait CredentialSupplier: Send + Sync {
    /// Current header value (e.g. `Bearer <token>`), or `None`.
    fn credential(&self) -> Option<String>;
}

impl<F> CredentialSupplier for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn credential(&self) -> Option<String> {
        self()
    }
}

/// Supplier yielding a fixed bearer token.
#[derive(Debug, Clone)]
pub struct StaticBearer {
    header: String,
}

impl StaticBearer {
    /// Supplier yielding `Bearer <token>` on every request.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            header: format!("Bearer {token}"),
        }
    }
}

impl CredentialSupplier for StaticBearer {
    fn credential(&self) -> Option<String> {
        Some(self.header.clone())
    }
}

/// Decorator that injects credentials into every request sent through it.
///
/// All configuration accessors forward to the wrapped transport unchanged;
/// only the send path decorates.
pub struct AuthenticatingTransport<T> {
    inner: T,
    credentials: Box<dyn CredentialSupplier>,
}

impl<T: HttpTransport> AuthenticatingTransport<T> {
    /// Wrap `inner`, sourcing credentials from `credentials` on each send.
    #[must_use]
    pub fn new(inner: T, credentials: impl CredentialSupplier + 'static) -> Self {
        Self {
            inner,
            credentials: Box::new(credentials),
        }
    }

    /// Build the decorated copy of `request`.
    ///
    /// The copy carries the same method, URL, headers, body, timeout,
    /// version, and expect-continue flag. When the supplier yields a
    /// credential, the copy's `Authorization` header is set to it, replacing
    /// any existing value; when it yields `None`, the copy is
    /// header-for-header identical to the original.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Credential`] if the supplied value is not a
    /// valid header value.
    pub fn decorate(&self, request: &HttpRequest) -> Result<HttpRequest, TransportError> {
        let mut decorated = request.clone();
        if let Some(credential) = self.credentials.credential() {
            let value = HeaderValue::from_str(&credential)
                .map_err(|e| TransportError::Credential(e.to_string()))?;
            decorated.headers.insert(AUTHORIZATION, value);
        }
        Ok(decorated)
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for AuthenticatingTransport<T> {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let decorated = self.decorate(request)?;
        self.inner.send(&decorated).await
    }

    fn timeout(&self) -> Option<Duration> {
        self.inner.timeout()
    }

    fn redirect_policy(&self) -> RedirectPolicy {
        self.inner.redirect_policy()
    }

    fn proxy(&self) -> Option<&Url> {
        self.inner.proxy()
    }

    fn tls(&self) -> &TlsConfig {
        self.inner.tls()
    }

    fn protocol_version(&self) -> ProtocolVersion {
        self.inner.protocol_version()
    }

    fn cookie_store(&self) -> bool {
        self.inner.cookie_store()
    }
}
