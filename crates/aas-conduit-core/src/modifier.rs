//! Content, level, and extent modifiers for AAS Part 2 requests.
//!
//! `Content` changes the URL path (`/$metadata`, `/$value`, ...), while
//! `Level` and `Extent` render as query parameters. All three default to a
//! variant that renders to nothing, so an all-default request produces the
//! plain resource URL.

use std::fmt;

/// Serialization modifier selecting which representation of a resource the
/// server returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Content {
    /// The full resource representation
    #[default]
    Normal,
    /// Metadata attributes only, without value parts
    Metadata,
    /// The raw value representation
    Value,
    /// References to submodel elements instead of the elements themselves
    Reference,
    /// `idShort` paths only
    Path,
}

impl Content {
    /// Path suffix including the leading slash, e.g. `/$metadata`.
    ///
    /// Empty for [`Content::Normal`].
    #[must_use]
    pub fn path_suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Metadata => "/$metadata",
            Self::Value => "/$value",
            Self::Reference => "/$reference",
            Self::Path => "/$path",
        }
    }

    /// Bare path segment without the leading slash, e.g. `$metadata`.
    ///
    /// Empty for [`Content::Normal`]. Used by callers that manage URL
    /// segments through a parser instead of string concatenation; both
    /// placements resolve to the same URI.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Metadata => "$metadata",
            Self::Value => "$value",
            Self::Reference => "$reference",
            Self::Path => "$path",
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Structural depth of the returned resource tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    /// Server default depth
    #[default]
    Default,
    /// All nested elements
    Deep,
    /// First-level children only
    Core,
}

impl Level {
    /// Query fragment, e.g. `level=deep`. Empty for [`Level::Default`].
    #[must_use]
    pub fn query_fragment(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Deep => "level=deep",
            Self::Core => "level=core",
        }
    }
}

/// Whether `Blob` values are included in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extent {
    /// Server default
    #[default]
    Default,
    /// Strip blob values
    WithoutBlobValue,
    /// Include blob values
    WithBlobValue,
}

impl Extent {
    /// Query fragment, e.g. `extent=with_blob_value`. Empty for
    /// [`Extent::Default`].
    #[must_use]
    pub fn query_fragment(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::WithoutBlobValue => "extent=without_blob_value",
            Self::WithBlobValue => "extent=with_blob_value",
        }
    }
}

/// Immutable level/extent pair attached to a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryModifier {
    /// Structural depth of the response
    pub level: Level,
    /// Blob value inclusion
    pub extent: Extent,
}

impl QueryModifier {
    /// The all-default modifier; renders to nothing.
    pub const DEFAULT: Self = Self {
        level: Level::Default,
        extent: Extent::Default,
    };

    /// Modifier with the given level and extent.
    #[must_use]
    pub const fn new(level: Level, extent: Extent) -> Self {
        Self { level, extent }
    }

    /// Modifier with only the level set.
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self {
            level,
            extent: Extent::Default,
        }
    }

    /// Modifier with only the extent set.
    #[must_use]
    pub const fn with_extent(extent: Extent) -> Self {
        Self {
            level: Level::Default,
            extent,
        }
    }

    /// `true` when both dimensions are at their defaults.
    ///
    /// Equality is structural, so a freshly constructed
    /// `QueryModifier::new(Level::Default, Extent::Default)` counts as
    /// default just like the [`QueryModifier::DEFAULT`] constant.
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_path_suffix() {
        assert_eq!(Content::Normal.path_suffix(), "");
        assert_eq!(Content::Metadata.path_suffix(), "/$metadata");
        assert_eq!(Content::Value.path_suffix(), "/$value");
        assert_eq!(Content::Reference.path_suffix(), "/$reference");
        assert_eq!(Content::Path.path_suffix(), "/$path");
    }

    #[test]
    fn content_segment_matches_suffix() {
        for content in [
            Content::Normal,
            Content::Metadata,
            Content::Value,
            Content::Reference,
            Content::Path,
        ] {
            let suffix = content.path_suffix();
            let segment = content.segment();
            if segment.is_empty() {
                assert!(suffix.is_empty());
            } else {
                assert_eq!(suffix, format!("/{segment}"));
            }
        }
    }

    #[test]
    fn level_fragments() {
        assert_eq!(Level::Default.query_fragment(), "");
        assert_eq!(Level::Deep.query_fragment(), "level=deep");
        assert_eq!(Level::Core.query_fragment(), "level=core");
    }

    #[test]
    fn extent_fragments() {
        assert_eq!(Extent::Default.query_fragment(), "");
        assert_eq!(
            Extent::WithoutBlobValue.query_fragment(),
            "extent=without_blob_value"
        );
        assert_eq!(
            Extent::WithBlobValue.query_fragment(),
            "extent=with_blob_value"
        );
    }

    #[test]
    fn default_detection_is_structural() {
        assert!(QueryModifier::DEFAULT.is_default());
        assert!(QueryModifier::new(Level::Default, Extent::Default).is_default());
        assert!(!QueryModifier::with_level(Level::Deep).is_default());
        assert!(!QueryModifier::with_extent(Extent::WithBlobValue).is_default());
    }
}
