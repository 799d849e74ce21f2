//! Transport capability trait and the `reqwest`-backed implementation.
//!
//! A transport is a capability object: besides sending, it answers for its
//! own configuration. Decorators wrap another transport, forward every
//! accessor unchanged, and intercept only the send path, so configuration
//! stays readable through any number of layers.

use crate::request::HttpRequest;
use crate::response::HttpResponse;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Redirect-following policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Never follow redirects
    None,
    /// Follow up to the given number of redirects
    Limited(usize),
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::Limited(10)
    }
}

/// Preferred HTTP protocol version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProtocolVersion {
    /// Negotiate HTTP/1.1 or HTTP/2
    #[default]
    Auto,
    /// HTTP/1.1 only
    Http1Only,
    /// HTTP/2 with prior knowledge
    Http2PriorKnowledge,
}

/// TLS settings: custom trust root and optional mTLS client identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsConfig {
    /// Custom CA certificate path for self-signed server certs (PEM format)
    pub ca_cert_path: Option<PathBuf>,
    /// Client certificate path for mTLS authentication (PEM format)
    pub client_cert_path: Option<PathBuf>,
    /// Client private key path for mTLS authentication (PEM format)
    pub client_key_path: Option<PathBuf>,
}

/// Transport configuration, exposed verbatim through the
/// [`HttpTransport`] accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Default request timeout; `None` disables the timeout
    pub timeout: Option<Duration>,
    /// Redirect policy
    pub redirect: RedirectPolicy,
    /// Proxy applied to all requests
    pub proxy: Option<Url>,
    /// TLS settings
    pub tls: TlsConfig,
    /// Protocol version preference
    pub version: ProtocolVersion,
    /// Keep a cookie store across requests
    pub cookie_store: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            redirect: RedirectPolicy::default(),
            proxy: None,
            tls: TlsConfig::default(),
            version: ProtocolVersion::default(),
            cookie_store: false,
        }
    }
}

/// Capability interface for sending [`HttpRequest`] values.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and read the full response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Connectivity`] for network-level failures;
    /// non-2xx statuses are not errors at this layer.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Default request timeout.
    fn timeout(&self) -> Option<Duration>;

    /// Redirect policy.
    fn redirect_policy(&self) -> RedirectPolicy;

    /// Proxy URL, if any.
    fn proxy(&self) -> Option<&Url>;

    /// TLS settings.
    fn tls(&self) -> &TlsConfig;

    /// Protocol version preference.
    fn protocol_version(&self) -> ProtocolVersion;

    /// Whether a cookie store is kept across requests.
    fn cookie_store(&self) -> bool;
}

/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Build a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Init`] if the client cannot be built, or if
    /// TLS certificate files cannot be read or parsed.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match config.redirect {
            RedirectPolicy::None => builder.redirect(reqwest::redirect::Policy::none()),
            RedirectPolicy::Limited(max) => {
                builder.redirect(reqwest::redirect::Policy::limited(max))
            }
        };

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| TransportError::Init(format!("invalid proxy {proxy_url}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder = match config.version {
            ProtocolVersion::Auto => builder,
            ProtocolVersion::Http1Only => builder.http1_only(),
            ProtocolVersion::Http2PriorKnowledge => builder.http2_prior_knowledge(),
        };

        builder = builder.cookie_store(config.cookie_store);

        // Load custom CA certificate if provided (for self-signed certs)
        if let Some(ca_path) = &config.tls.ca_cert_path {
            let ca_cert = fs::read(ca_path).map_err(|e| {
                TransportError::Init(format!(
                    "failed to read CA certificate {}: {e}",
                    ca_path.display()
                ))
            })?;
            let cert = reqwest::Certificate::from_pem(&ca_cert).map_err(|e| {
                TransportError::Init(format!("failed to parse CA certificate: {e}"))
            })?;
            builder = builder.add_root_certificate(cert);
            tracing::debug!(ca_path = %ca_path.display(), "Loaded custom CA certificate");
        }

        // Load client certificate and key for mTLS if both are provided
        if let (Some(cert_path), Some(key_path)) =
            (&config.tls.client_cert_path, &config.tls.client_key_path)
        {
            let cert_pem = fs::read(cert_path).map_err(|e| {
                TransportError::Init(format!(
                    "failed to read client certificate {}: {e}",
                    cert_path.display()
                ))
            })?;
            let key_pem = fs::read(key_path).map_err(|e| {
                TransportError::Init(format!(
                    "failed to read client key {}: {e}",
                    key_path.display()
                ))
            })?;

            // Cert and key concatenated into a single PEM for the identity
            let mut identity_pem = cert_pem;
            identity_pem.extend_from_slice(&key_pem);

            let identity = reqwest::Identity::from_pem(&identity_pem).map_err(|e| {
                TransportError::Init(format!("failed to create client identity: {e}"))
            })?;
            builder = builder.identity(identity);
            tracing::debug!(
                cert_path = %cert_path.display(),
                key_path = %key_path.display(),
                "Loaded client certificate for mTLS"
            );
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Init(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(version) = request.version {
            builder = builder.version(version);
        }
        if request.expect_continue {
            builder = builder.header(
                reqwest::header::EXPECT,
                HeaderValue::from_static("100-continue"),
            );
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Connectivity(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connectivity(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    fn redirect_policy(&self) -> RedirectPolicy {
        self.config.redirect
    }

    fn proxy(&self) -> Option<&Url> {
        self.config.proxy.as_ref()
    }

    fn tls(&self) -> &TlsConfig {
        &self.config.tls
    }

    fn protocol_version(&self) -> ProtocolVersion {
        self.config.version
    }

    fn cookie_store(&self) -> bool {
        self.config.cookie_store
    }
}

/// Errors raised by transports.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Transport construction failed
    #[error("transport init error: {0}")]
    Init(String),
    /// Network-level failure; the request may be retried
    #[error("connectivity failure: {0}")]
    Connectivity(String),
    /// A supplied credential is not a valid header value
    #[error("invalid credential: {0}")]
    Credential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.redirect, RedirectPolicy::Limited(10));
        assert!(config.proxy.is_none());
        assert_eq!(config.version, ProtocolVersion::Auto);
        assert!(!config.cookie_store);
        assert_eq!(config.tls, TlsConfig::default());
    }

    #[test]
    fn transport_exposes_its_configuration() {
        let config = TransportConfig {
            timeout: Some(Duration::from_secs(7)),
            redirect: RedirectPolicy::None,
            version: ProtocolVersion::Http1Only,
            cookie_store: true,
            ..TransportConfig::default()
        };
        let transport = ReqwestTransport::new(config).unwrap();
        assert_eq!(transport.timeout(), Some(Duration::from_secs(7)));
        assert_eq!(transport.redirect_policy(), RedirectPolicy::None);
        assert_eq!(transport.protocol_version(), ProtocolVersion::Http1Only);
        assert!(transport.cookie_store());
        assert!(transport.proxy().is_none());
    }

    #[test]
    fn missing_ca_certificate_fails_init() {
        let config = TransportConfig {
            tls: TlsConfig {
                ca_cert_path: Some(PathBuf::from("/nonexistent/ca.pem")),
                ..TlsConfig::default()
            },
            ..TransportConfig::default()
        };
        let result = ReqwestTransport::new(config);
        assert!(matches!(result, Err(TransportError::Init(_))));
    }

    #[test]
    fn no_timeout_is_allowed() {
        let config = TransportConfig {
            timeout: None,
            ..TransportConfig::default()
        };
        let transport = ReqwestTransport::new(config).unwrap();
        assert_eq!(transport.timeout(), None);
    }
}
