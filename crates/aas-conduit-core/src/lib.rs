//! # aas-conduit-core
//!
//! Pure building blocks for AAS Part 2 HTTP requests: content/level/extent
//! modifiers, pagination, resource-specific search criteria, and the
//! canonical query-string and URI assembly rules.
//!
//! Everything in this crate is deterministic and I/O-free. Equal inputs
//! always render byte-identical URIs because query fragments are emitted in
//! a fixed order (level, extent, limit, cursor, search criteria).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod criteria;
pub mod encoding;
pub mod model;
pub mod modifier;
pub mod paging;
pub mod query;

pub use criteria::{
    BasicDiscoveryCriteria, ConceptDescriptionCriteria, CriteriaError, SearchCriteria,
    SerializationCriteria,
};
pub use encoding::EncodingError;
pub use model::{AssetIdentification, Key, KeyType, Reference, ReferenceType, GLOBAL_ASSET_ID_NAME};
pub use modifier::{Content, Extent, Level, QueryModifier};
pub use paging::PagingInfo;
