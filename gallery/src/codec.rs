//! Share-token codec: gallery <-> base64 URL fragment.
//!
//! A token is the standard (RFC 4648, padded) base64 encoding of the UTF-8
//! bytes of the gallery's JSON text. Decoding is total: every failure stage
//! collapses to `None` at the public surface, while [`try_decode_object`]
//! keeps the stage for diagnostics.

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

use crate::model::Gallery;

/// Standard alphabet; always pads on encode. Decode accepts tokens with or
/// without padding and ignores non-zero trailing bits, like `atob`.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a token could not be turned back into a JSON object.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Nothing left after stripping the leading `#`.
    #[error("empty token")]
    Empty,
    /// The token contains characters outside the base64 alphabet or bad padding.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not UTF-8 text.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The text is not JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON value parsed, but it is not an object.
    #[error("decoded json is not an object")]
    NotAnObject,
}

/// Route of the read-only viewer that share links point at.
pub const VIEWER_PATH: &str = "/gallery/viewer";

/// Source of the current URL fragment (e.g. `window.location.hash`).
pub trait FragmentSource {
    /// The current fragment, with or without its leading `#`.
    /// `None` when no location is available.
    fn current_fragment(&self) -> Option<String>;
}

/// Encode a gallery into a share token.
#[must_use]
pub fn encode(gallery: &Gallery) -> String {
    // Serializing plain strings and enums into a String cannot fail.
    let json = serde_json::to_string(gallery).unwrap_or_default();
    TOKEN_ENGINE.encode(json.as_bytes())
}

/// Build a share link `<base>#<token>`.
#[must_use]
pub fn share_link(base: &str, gallery: &Gallery) -> String {
    format!("{base}#{}", encode(gallery))
}

/// Build the viewer share link for a site rooted at `origin`.
#[must_use]
pub fn viewer_link(origin: &str, gallery: &Gallery) -> String {
    share_link(&format!("{}{VIEWER_PATH}", origin.trim_end_matches('/')), gallery)
}

/// Text after the first `#` of `link`, or `link` itself when it has none.
#[must_use]
pub fn fragment_of(link: &str) -> &str {
    link.split_once('#').map_or(link, |(_, fragment)| fragment)
}

/// Decode a token (optionally prefixed with `#`) into a gallery.
///
/// Returns `None` for empty input and for any malformed token. Objects with
/// missing fields are still accepted; see [`Gallery::from_json_object`].
#[must_use]
pub fn decode(token: &str) -> Option<Gallery> {
    decode_object(token).map(|obj| Gallery::from_json_object(&obj))
}

/// Decode a token into the loosely-typed JSON object it carries.
#[must_use]
pub fn decode_object(token: &str) -> Option<Map<String, Value>> {
    match try_decode_object(token) {
        Ok(obj) => Some(obj),
        Err(CodecError::Empty) => None,
        Err(e) => {
            tracing::debug!(error = %e, "discarding undecodable gallery token");
            None
        }
    }
}

/// Decode a token, reporting which stage failed.
///
/// # Errors
///
/// Returns the [`CodecError`] variant matching the first failing stage.
pub fn try_decode_object(token: &str) -> Result<Map<String, Value>, CodecError> {
    let value = token.strip_prefix('#').unwrap_or(token);
    if value.is_empty() {
        return Err(CodecError::Empty);
    }
    let bytes = TOKEN_ENGINE.decode(value)?;
    let json = String::from_utf8(bytes)?;
    match serde_json::from_str::<Value>(&json)? {
        Value::Object(obj) => Ok(obj),
        _ => Err(CodecError::NotAnObject),
    }
}

/// Decode whatever gallery the fragment source currently points at.
#[must_use]
pub fn decode_from<F: FragmentSource + ?Sized>(source: &F) -> Option<Gallery> {
    decode(&source.current_fragment()?)
}
