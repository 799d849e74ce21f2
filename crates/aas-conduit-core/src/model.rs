//! Minimal reference and asset-identification model.
//!
//! Just enough of the IDTA Part 1 metamodel to render search criteria:
//! references with their canonical string form and JSON shape, plus the
//! asset identifiers used by basic discovery. Full metamodel types stay out
//! of scope; resources travel as raw JSON.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Key types from the IDTA `KeyTypes` enumeration.
///
/// Variant names match the wire representation exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    /// An annotated relationship element
    AnnotatedRelationshipElement,
    /// An Asset Administration Shell
    AssetAdministrationShell,
    /// A basic event element
    BasicEventElement,
    /// A blob element
    Blob,
    /// A capability element
    Capability,
    /// A concept description
    ConceptDescription,
    /// Any data element
    DataElement,
    /// An entity element
    Entity,
    /// Any event element
    EventElement,
    /// A file element
    File,
    /// A fragment within another key's target
    FragmentReference,
    /// A reference to something outside any AAS
    GlobalReference,
    /// Any identifiable
    Identifiable,
    /// A multi-language property
    MultiLanguageProperty,
    /// An operation element
    Operation,
    /// A property element
    Property,
    /// A range element
    Range,
    /// Any referable
    Referable,
    /// A reference element
    ReferenceElement,
    /// A relationship element
    RelationshipElement,
    /// A submodel
    Submodel,
    /// Any submodel element
    SubmodelElement,
    /// A submodel element collection
    SubmodelElementCollection,
    /// A submodel element list
    SubmodelElementList,
}

impl KeyType {
    /// IDTA name of this key type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            Self::AssetAdministrationShell => "AssetAdministrationShell",
            Self::BasicEventElement => "BasicEventElement",
            Self::Blob => "Blob",
            Self::Capability => "Capability",
            Self::ConceptDescription => "ConceptDescription",
            Self::DataElement => "DataElement",
            Self::Entity => "Entity",
            Self::EventElement => "EventElement",
            Self::File => "File",
            Self::FragmentReference => "FragmentReference",
            Self::GlobalReference => "GlobalReference",
            Self::Identifiable => "Identifiable",
            Self::MultiLanguageProperty => "MultiLanguageProperty",
            Self::Operation => "Operation",
            Self::Property => "Property",
            Self::Range => "Range",
            Self::Referable => "Referable",
            Self::ReferenceElement => "ReferenceElement",
            Self::RelationshipElement => "RelationshipElement",
            Self::Submodel => "Submodel",
            Self::SubmodelElement => "SubmodelElement",
            Self::SubmodelElementCollection => "SubmodelElementCollection",
            Self::SubmodelElementList => "SubmodelElementList",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference kind: external or model reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    /// Reference to an entity outside any AAS model
    #[serde(rename = "ExternalReference")]
    External,
    /// Reference to an element inside an AAS model
    #[serde(rename = "ModelReference")]
    Model,
}

impl ReferenceType {
    /// Abbreviated form used in the canonical string rendering.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::External => "ExternalRef",
            Self::Model => "ModelRef",
        }
    }
}

/// A single key within a reference chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Kind of the referenced element
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// Identifier or `idShort` of the referenced element
    pub value: String,
}

impl Key {
    /// Key of the given type and value.
    #[must_use]
    pub fn new(key_type: KeyType, value: impl Into<String>) -> Self {
        Self {
            key_type,
            value: value.into(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.key_type, self.value)
    }
}

/// A reference to an AAS element or external resource: a typed chain of
/// keys, outermost first.
///
/// The [`fmt::Display`] form is the canonical rendering used inside search
/// criteria before base64 encoding:
/// `[ExternalRef](GlobalReference)https://example.org/cd/1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// External or model reference
    #[serde(rename = "type")]
    pub reference_type: ReferenceType,
    /// Key chain, outermost first
    pub keys: Vec<Key>,
}

impl Reference {
    /// External reference with a single global-reference key.
    #[must_use]
    pub fn external(value: impl Into<String>) -> Self {
        Self {
            reference_type: ReferenceType::External,
            keys: vec![Key::new(KeyType::GlobalReference, value)],
        }
    }

    /// Model reference over the given key chain.
    #[must_use]
    pub fn model(keys: Vec<Key>) -> Self {
        Self {
            reference_type: ReferenceType::Model,
            keys,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self
            .keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]{keys}", self.reference_type.abbreviation())
    }
}

/// Reserved identifier name marking the global asset id on the wire.
pub const GLOBAL_ASSET_ID_NAME: &str = "globalAssetId";

/// An asset identifier as used by basic discovery: either the one global
/// asset id or a named specific asset id.
///
/// Both serialize to the same `{"name": ..., "value": ...}` JSON shape; the
/// global variant fixes the name to [`GLOBAL_ASSET_ID_NAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetIdentification {
    /// The globally unique asset identifier
    GlobalAssetId {
        /// Identifier value
        value: String,
    },
    /// A domain-specific asset identifier such as a serial number
    SpecificAssetId {
        /// Identifier name, e.g. `serialNumber`
        name: String,
        /// Identifier value
        value: String,
    },
}

impl AssetIdentification {
    /// Global asset id descriptor.
    #[must_use]
    pub fn global(value: impl Into<String>) -> Self {
        Self::GlobalAssetId {
            value: value.into(),
        }
    }

    /// Specific asset id descriptor.
    #[must_use]
    pub fn specific(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SpecificAssetId {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Identifier name on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::GlobalAssetId { .. } => GLOBAL_ASSET_ID_NAME,
            Self::SpecificAssetId { name, .. } => name,
        }
    }

    /// Identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::GlobalAssetId { value } | Self::SpecificAssetId { value, .. } => value,
        }
    }
}

impl Serialize for AssetIdentification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AssetIdentification", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for AssetIdentification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            name: String,
            value: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(if wire.name == GLOBAL_ASSET_ID_NAME {
            Self::GlobalAssetId { value: wire.value }
        } else {
            Self::SpecificAssetId {
                name: wire.name,
                value: wire.value,
            }
        })
    }
}
