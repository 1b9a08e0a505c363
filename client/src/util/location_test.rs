#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_location_has_no_fragment_outside_browser() {
    assert_eq!(BrowserLocation.current_fragment(), None);
}

#[test]
fn current_gallery_is_none_outside_browser() {
    assert_eq!(current_gallery(), None);
}

#[test]
fn origin_is_empty_outside_browser() {
    assert_eq!(origin(), "");
}

#[test]
fn navigation_helpers_are_noops() {
    open_in_new_tab("https://example.test/gallery/viewer#e30=");
    reload();
}
