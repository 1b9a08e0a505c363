//! Gallery data model shared by the editor, the viewer, and the CLI.
//!
//! DESIGN
//! ======
//! Typed structs are the in-memory representation. Payloads coming back from
//! a share token or a stored draft are only checked to be JSON objects, then
//! materialized leniently: missing or mistyped fields take defaults instead of
//! failing the whole decode.

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Placeholder gallery name used when the user leaves the name blank.
pub const DEFAULT_GALLERY_NAME: &str = "My Gallery";

/// Placeholder artwork title used when the user supplies none.
pub const UNTITLED_ARTWORK: &str = "Untitled";

const ID_LEN: usize = 8;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Color theme applied to the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Wire name of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// One exhibited image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Opaque identifier, unique within its gallery.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Image source reference.
    pub url: String,
    /// Optional room label; `None` or blank means ungrouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Artwork {
    fn from_json_object(obj: &Map<String, Value>) -> Self {
        Self {
            id: string_field(obj, "id"),
            title: string_field(obj, "title"),
            url: string_field(obj, "url"),
            room: obj.get("room").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

/// A named, themed, ordered collection of artworks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
}

impl Gallery {
    /// Materialize a gallery from a loosely-typed JSON object.
    ///
    /// Never fails: absent or mistyped fields fall back to empty values and
    /// non-object entries in `artworks` are skipped.
    #[must_use]
    pub fn from_json_object(obj: &Map<String, Value>) -> Self {
        let artworks = obj
            .get("artworks")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Artwork::from_json_object)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_field(obj, "name"),
            theme: obj.get("theme").and_then(Value::as_str).and_then(Theme::parse),
            artworks,
        }
    }

    /// Name to render, substituting the placeholder for a blank name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { DEFAULT_GALLERY_NAME } else { &self.name }
    }

    /// Theme to render; absent means light.
    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

/// Generate a short random artwork id (8 lowercase base36 characters).
#[must_use]
pub fn generate_id() -> String {
    let mut n = Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(char::from(ID_ALPHABET[digit]));
        n /= 36;
    }
    out
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).unwrap_or_default().to_owned()
}
