//! Connection configuration and the shared endpoint/transport pair behind
//! every resource client.

use aas_conduit_core::CriteriaError;
use aas_conduit_http::{
    AuthenticatingTransport, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    StaticBearer, TlsConfig, TransportConfig, TransportError,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Connection configuration for an AAS server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the AAS server (e.g., <http://localhost:8081>)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional bearer token for authentication
    pub bearer_token: Option<String>,
    /// Custom CA certificate path for self-signed server certs (PEM format)
    pub ca_cert_path: Option<PathBuf>,
    /// Client certificate path for mTLS authentication (PEM format)
    pub client_cert_path: Option<PathBuf>,
    /// Client private key path for mTLS authentication (PEM format)
    pub client_key_path: Option<PathBuf>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout: Duration::from_secs(30),
            bearer_token: None,
            ca_cert_path: None,
            client_cert_path: None,
            client_key_path: None,
        }
    }
}

/// Parsed endpoint plus the transport shared by all resource clients.
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct Connection {
    endpoint: Url,
    transport: Arc<dyn HttpTransport>,
}

impl Connection {
    /// Build a connection from configuration.
    ///
    /// With a bearer token configured, the transport is wrapped in an
    /// [`AuthenticatingTransport`] so every request carries the credential.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] for an invalid base URL or a transport
    /// construction failure.
    pub fn new(config: ConnectionConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Init(format!("invalid base URL {}: {e}", config.base_url)))?;

        let transport_config = TransportConfig {
            timeout: Some(config.timeout),
            tls: TlsConfig {
                ca_cert_path: config.ca_cert_path,
                client_cert_path: config.client_cert_path,
                client_key_path: config.client_key_path,
            },
            ..TransportConfig::default()
        };
        let transport = ReqwestTransport::new(transport_config)?;

        let transport: Arc<dyn HttpTransport> = match &config.bearer_token {
            Some(token) => Arc::new(AuthenticatingTransport::new(
                transport,
                StaticBearer::new(token),
            )),
            None => Arc::new(transport),
        };

        Ok(Self { endpoint, transport })
    }

    /// Connection over a caller-supplied transport, for custom credential
    /// suppliers or in-memory transports in tests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] for an invalid base URL.
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ClientError> {
        let endpoint = Url::parse(base_url)
            .map_err(|e| ClientError::Init(format!("invalid base URL {base_url}: {e}")))?;
        Ok(Self { endpoint, transport })
    }

    /// Endpoint base URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Endpoint rendered without a trailing slash, for string-assembled
    /// request paths.
    pub(crate) fn endpoint_str(&self) -> &str {
        self.endpoint.as_str().trim_end_matches('/')
    }

    /// Send a request and require a 2xx status.
    pub(crate) async fn send_checked(
        &self,
        request: &HttpRequest,
    ) -> Result<HttpResponse, ClientError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ClientError::Api {
                status: response.status.as_u16(),
                message: response.text(),
            });
        }
        Ok(response)
    }
}

/// Errors produced by resource clients.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Connection or transport construction failed
    #[error("client init error: {0}")]
    Init(String),
    /// Network-level failure; the request may be retried
    #[error("connectivity failure: {0}")]
    Connectivity(String),
    /// A query parameter or request payload could not be encoded
    #[error("encoding error: {0}")]
    Encoding(String),
    /// The server answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },
    /// A response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Init(message) => Self::Init(message),
            TransportError::Connectivity(message) => Self::Connectivity(message),
            TransportError::Credential(message) => {
                Self::Encoding(format!("invalid credential: {message}"))
            }
        }
    }
}

impl From<CriteriaError> for ClientError {
    fn from(err: CriteriaError) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn connection_parses_endpoint() {
        let connection = Connection::new(ConnectionConfig::default()).unwrap();
        assert_eq!(connection.endpoint().as_str(), "http://localhost:8081/");
        assert_eq!(connection.endpoint_str(), "http://localhost:8081");
    }

    #[test]
    fn invalid_base_url_fails_init() {
        let config = ConnectionConfig {
            base_url: "not a url".to_string(),
            ..ConnectionConfig::default()
        };
        assert!(matches!(Connection::new(config), Err(ClientError::Init(_))));
    }

    #[test]
    fn bearer_token_config_builds() {
        let config = ConnectionConfig {
            bearer_token: Some("secret".to_string()),
            ..ConnectionConfig::default()
        };
        assert!(Connection::new(config).is_ok());
    }

    #[test]
    fn transport_errors_map_by_kind() {
        assert!(matches!(
            ClientError::from(TransportError::Init("x".into())),
            ClientError::Init(_)
        ));
        assert!(matches!(
            ClientError::from(TransportError::Connectivity("x".into())),
            ClientError::Connectivity(_)
        ));
        assert!(matches!(
            ClientError::from(TransportError::Credential("x".into())),
            ClientError::Encoding(_)
        ));
    }
}
