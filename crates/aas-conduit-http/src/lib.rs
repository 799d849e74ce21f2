//! # aas-conduit-http
//!
//! The HTTP layer of aas-conduit: immutable request descriptors with
//! per-verb constructors, response snapshots, the [`HttpTransport`]
//! capability trait with its `reqwest`-backed implementation, and the
//! authenticating decorator that injects credentials on the send path.
//!
//! Transports are capability objects: wrapping one in a decorator keeps
//! every configuration accessor (timeout, redirect policy, proxy, TLS,
//! protocol version, cookie store) readable through the wrapper.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{AuthenticatingTransport, CredentialSupplier, StaticBearer};
pub use request::{HttpRequest, RequestError, MULTIPART_BOUNDARY};
pub use response::{FileContent, HttpResponse, DEFAULT_FILE_NAME};
pub use transport::{
    HttpTransport, ProtocolVersion, RedirectPolicy, ReqwestTransport, TlsConfig, TransportConfig,
    TransportError,
};
