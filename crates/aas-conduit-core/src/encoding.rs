//! Encoding rules for AAS Part 2 request parameters.
//!
//! Three families, each tied to a parameter class:
//!
//! - Identifiers of Identifiables in URL paths and pagination cursors:
//!   base64url without padding
//! - Search-criteria fragments carrying references or id lists: standard
//!   base64 with padding
//! - `idShortPath` segments: percent-encoded, square brackets preserved for
//!   list index notation
//!
//! # References
//!
//! - IDTA 01002-3-1: Specification of the Asset Administration Shell Part 2

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded in an `idShortPath`.
/// Square brackets `[]` stay literal for list element addressing.
const ID_SHORT_PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Encode a value with base64url, no padding.
///
/// Used for identifiers of Identifiables embedded in URL paths and for
/// pagination cursors in query strings. The output never contains `=`, `+`,
/// or `/`.
///
/// # Examples
///
/// ```
/// use aas_conduit_core::encoding;
///
/// let encoded = encoding::base64_url("urn:example:aas:asset1");
/// assert!(!encoded.contains('='));
/// assert!(!encoded.contains('+'));
/// assert!(!encoded.contains('/'));
/// ```
#[must_use]
pub fn base64_url(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

/// Decode a base64url-encoded value (no padding).
///
/// # Errors
///
/// Returns [`EncodingError::Base64Decode`] for invalid base64url input and
/// [`EncodingError::Utf8Decode`] if the decoded bytes are not UTF-8.
///
/// # Examples
///
/// ```
/// use aas_conduit_core::encoding;
///
/// let encoded = encoding::base64_url("urn:example:aas:asset1");
/// let decoded = encoding::base64_url_decode(&encoded).unwrap();
/// assert_eq!(decoded, "urn:example:aas:asset1");
/// ```
pub fn base64_url_decode(encoded: &str) -> Result<String, EncodingError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| EncodingError::Base64Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| EncodingError::Utf8Decode(e.to_string()))
}

/// Encode a value with the standard base64 alphabet, padded.
///
/// Used for search-criteria fragments such as `isCaseOf` references or the
/// id lists of a serialization request. The output may contain `=`, `+`,
/// and `/`.
#[must_use]
pub fn base64_standard(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode a standard base64 value.
///
/// # Errors
///
/// Returns [`EncodingError::Base64Decode`] for invalid base64 input and
/// [`EncodingError::Utf8Decode`] if the decoded bytes are not UTF-8.
pub fn base64_standard_decode(encoded: &str) -> Result<String, EncodingError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| EncodingError::Base64Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| EncodingError::Utf8Decode(e.to_string()))
}

/// Percent-encode an `idShortPath`, preserving square brackets.
///
/// # Examples
///
/// ```
/// use aas_conduit_core::encoding;
///
/// assert_eq!(
///     encoding::encode_id_short_path("Sensors[2].My Value"),
///     "Sensors[2].My%20Value"
/// );
/// ```
#[must_use]
pub fn encode_id_short_path(path: &str) -> String {
    utf8_percent_encode(path, ID_SHORT_PATH_ESCAPE).to_string()
}

/// Decode a percent-encoded `idShortPath`.
///
/// # Errors
///
/// Returns [`EncodingError::Utf8Decode`] if the decoded bytes are not UTF-8.
pub fn decode_id_short_path(encoded: &str) -> Result<String, EncodingError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| EncodingError::Utf8Decode(e.to_string()))
}

/// Errors that can occur while decoding request parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EncodingError {
    /// Base64 decoding failed
    #[error("base64 decode error: {0}")]
    Base64Decode(String),
    /// UTF-8 decoding failed
    #[error("UTF-8 decode error: {0}")]
    Utf8Decode(String),
}
