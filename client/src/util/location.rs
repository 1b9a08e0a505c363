//! Browser location helpers: URL fragment, origin, navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer reads its gallery from `window.location.hash`; the editor needs
//! the page origin to build share links. Outside the browser every helper
//! degrades to an empty/absent value or a no-op.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use gallery::codec::{self, FragmentSource};
use gallery::Gallery;

/// [`FragmentSource`] bound to `window.location.hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl FragmentSource for BrowserLocation {
    fn current_fragment(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?.location().hash().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Gallery carried by the current URL fragment, if any.
pub fn current_gallery() -> Option<Gallery> {
    codec::decode_from(&BrowserLocation)
}

/// Page origin (`scheme://host[:port]`), or empty outside the browser.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("failed to open viewer: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
