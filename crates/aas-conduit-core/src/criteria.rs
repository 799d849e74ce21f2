//! Resource-specific search criteria and their query-string rendering.
//!
//! `SearchCriteria` is a closed set: one variant per resource kind plus an
//! explicit empty default. The query builder matches on the variant, so the
//! default path never runs any per-variant encoding and a malformed filter
//! cannot leak into an unfiltered request.

use crate::encoding;
use crate::model::{AssetIdentification, Reference};

/// Filter expression attached to a list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchCriteria {
    /// No filtering
    #[default]
    Default,
    /// Discovery lookup by asset identifiers
    BasicDiscovery(BasicDiscoveryCriteria),
    /// Concept-description filters
    ConceptDescription(ConceptDescriptionCriteria),
    /// Environment serialization by id lists
    Serialization(SerializationCriteria),
}

impl SearchCriteria {
    /// Render the criteria as an `&`-joinable query fragment.
    ///
    /// The default variant renders the empty string. Fragments never start
    /// or end with `&`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Serialize`] if an asset identifier cannot be
    /// serialized to JSON.
    pub fn to_query_string(&self) -> Result<String, CriteriaError> {
        match self {
            Self::Default => Ok(String::new()),
            Self::BasicDiscovery(criteria) => criteria.to_query_string(),
            Self::ConceptDescription(criteria) => Ok(criteria.to_query_string()),
            Self::Serialization(criteria) => Ok(criteria.to_query_string()),
        }
    }

    /// `true` for the shared no-filter default. Structural, so any value
    /// that deserializes or clones into the default variant counts.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// Criteria for discovery lookups (`/lookup/shells`): shells whose asset
/// links match all given identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicDiscoveryCriteria {
    /// Asset identifiers that must all match
    pub asset_ids: Vec<AssetIdentification>,
    /// Use the legacy per-identifier encoding instead of the JSON-array form
    pub legacy_encoding: bool,
}

impl BasicDiscoveryCriteria {
    /// Criteria matching the given asset identifiers.
    #[must_use]
    pub fn new(asset_ids: Vec<AssetIdentification>) -> Self {
        Self {
            asset_ids,
            legacy_encoding: false,
        }
    }

    /// Switch to the encoding understood by older registries: each
    /// identifier is serialized and base64-encoded on its own, then the
    /// encoded identifiers are joined with commas.
    #[must_use]
    pub fn with_legacy_encoding(mut self) -> Self {
        self.legacy_encoding = true;
        self
    }

    /// Render `assetIds=<encoded>`; empty when no identifiers are set.
    ///
    /// The primary form serializes all identifiers as one JSON array and
    /// base64url-encodes the whole blob without padding. The legacy form
    /// uses standard padded base64 per identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Serialize`] if an identifier cannot be
    /// serialized to JSON.
    pub fn to_query_string(&self) -> Result<String, CriteriaError> {
        if self.asset_ids.is_empty() {
            return Ok(String::new());
        }

        if self.legacy_encoding {
            let encoded = self
                .asset_ids
                .iter()
                .map(|id| serde_json::to_string(id).map(|json| encoding::base64_standard(&json)))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| CriteriaError::Serialize(e.to_string()))?
                .join(",");
            Ok(format!("assetIds={encoded}"))
        } else {
            let json = serde_json::to_string(&self.asset_ids)
                .map_err(|e| CriteriaError::Serialize(e.to_string()))?;
            Ok(format!("assetIds={}", encoding::base64_url(&json)))
        }
    }
}

/// Criteria for concept-description listings (`/concept-descriptions`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptDescriptionCriteria {
    /// Filter by `isCaseOf` reference
    pub is_case_of: Option<Reference>,
    /// Filter by `idShort`, sent as plain text
    pub id_short: Option<String>,
    /// Filter by data-specification reference
    pub data_specification_ref: Option<Reference>,
}

impl ConceptDescriptionCriteria {
    /// Empty criteria; filters are added with the `with_*` methods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by `isCaseOf` reference.
    #[must_use]
    pub fn with_is_case_of(mut self, reference: Reference) -> Self {
        self.is_case_of = Some(reference);
        self
    }

    /// Filter by `idShort`.
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    /// Filter by data-specification reference.
    #[must_use]
    pub fn with_data_specification(mut self, reference: Reference) -> Self {
        self.data_specification_ref = Some(reference);
        self
    }

    /// Render the set filters joined with `&`, in the fixed order
    /// `isCaseOf`, `idShort`, `dataSpecificationRef`.
    ///
    /// References are rendered in their canonical string form and encoded
    /// with standard padded base64; `idShort` goes out as-is.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut fragments = Vec::new();
        if let Some(reference) = &self.is_case_of {
            fragments.push(format!(
                "isCaseOf={}",
                encoding::base64_standard(&reference.to_string())
            ));
        }
        if let Some(id_short) = &self.id_short {
            fragments.push(format!("idShort={id_short}"));
        }
        if let Some(reference) = &self.data_specification_ref {
            fragments.push(format!(
                "dataSpecificationRef={}",
                encoding::base64_standard(&reference.to_string())
            ));
        }
        fragments.join("&")
    }
}

/// Criteria for environment serialization (`/serialization`): which shells
/// and submodels to include.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializationCriteria {
    /// Shell identifiers to include
    pub aas_ids: Vec<String>,
    /// Submodel identifiers to include
    pub submodel_ids: Vec<String>,
}

impl SerializationCriteria {
    /// Criteria selecting the given shells and submodels.
    #[must_use]
    pub fn new(aas_ids: Vec<String>, submodel_ids: Vec<String>) -> Self {
        Self {
            aas_ids,
            submodel_ids,
        }
    }

    /// Render the non-empty id lists in the order `aasIds`, `submodelIds`,
    /// each id standard-base64-encoded and the list comma-joined.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut fragments = Vec::new();
        if !self.aas_ids.is_empty() {
            fragments.push(format!("aasIds={}", join_encoded(&self.aas_ids)));
        }
        if !self.submodel_ids.is_empty() {
            fragments.push(format!("submodelIds={}", join_encoded(&self.submodel_ids)));
        }
        fragments.join("&")
    }
}

fn join_encoded(ids: &[String]) -> String {
    ids.iter()
        .map(|id| encoding::base64_standard(id))
        .collect::<Vec<_>>()
        .join(",")
}

/// Errors raised while rendering search criteria.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CriteriaError {
    /// An asset identifier or reference could not be serialized to JSON
    #[error("criteria serialization failed: {0}")]
    Serialize(String),
}
