//! Gallery theme application.
//!
//! The viewer reflects the shared gallery's theme on the `<html>` element via
//! a `data-theme` attribute so the global stylesheet can switch palettes.
//!
//! TRADE-OFFS
//! ==========
//! Applying the theme is browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use gallery::{Gallery, Theme};

/// Attribute written on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Theme the viewer should apply for a decoded gallery, if any.
pub fn for_gallery(current: Option<&Gallery>) -> Option<Theme> {
    current.map(Gallery::effective_theme)
}
