//! Room grouping for display.
//!
//! Rooms are not stored as entities; they are derived from each artwork's
//! `room` label every time a gallery is rendered.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod tests;

use crate::model::Artwork;

/// Label for artworks without a (non-blank) room.
pub const DEFAULT_ROOM: &str = "Main";

/// Artworks sharing one room label, in gallery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomGroup<'a> {
    pub room: &'a str,
    pub artworks: Vec<&'a Artwork>,
}

/// Room key an artwork is displayed under.
#[must_use]
pub fn room_key(artwork: &Artwork) -> &str {
    match artwork.room.as_deref() {
        Some(room) if !room.trim().is_empty() => room,
        _ => DEFAULT_ROOM,
    }
}

/// Group artworks by room, ordering groups by first appearance.
#[must_use]
pub fn group_by_room(artworks: &[Artwork]) -> Vec<RoomGroup<'_>> {
    let mut groups: Vec<RoomGroup<'_>> = Vec::new();
    for artwork in artworks {
        let key = room_key(artwork);
        match groups.iter_mut().find(|g| g.room == key) {
            Some(group) => group.artworks.push(artwork),
            None => groups.push(RoomGroup { room: key, artworks: vec![artwork] }),
        }
    }
    groups
}
