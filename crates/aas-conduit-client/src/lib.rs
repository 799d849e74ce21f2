//! # aas-conduit-client
//!
//! Thin, typed clients for the AAS Part 2 HTTP API: shell, submodel, and
//! concept-description repositories, basic discovery, and environment
//! serialization.
//!
//! Every operation composes the same pieces: the core query builder renders
//! the URI, a request helper builds an immutable descriptor, and the shared
//! transport (optionally wrapped in the authenticating decorator) sends it.
//! Resources travel as raw `serde_json::Value`s; this crate does not model
//! the AAS metamodel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod concept_descriptions;
pub mod connection;
pub mod discovery;
pub mod page;
pub mod serialization;
pub mod shells;
pub mod submodels;
mod uri;

pub use concept_descriptions::ConceptDescriptionRepositoryClient;
pub use connection::{ClientError, Connection, ConnectionConfig};
pub use discovery::BasicDiscoveryClient;
pub use page::{Page, PagingMetadata};
pub use serialization::SerializationClient;
pub use shells::ShellRepositoryClient;
pub use submodels::SubmodelRepositoryClient;
