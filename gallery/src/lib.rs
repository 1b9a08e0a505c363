//! Shared gallery model, share-token codec, and draft persistence.
//!
//! This crate owns the representation used by the `client` editor and viewer
//! and by the CLI. A gallery travels in a URL fragment as base64-encoded JSON
//! and is kept between editor sessions through a pluggable key-value store.

pub mod codec;
pub mod draft;
pub mod model;
pub mod rooms;

pub use codec::{CodecError, FragmentSource, decode, encode};
pub use draft::{DraftStore, GALLERY_DRAFT_KEY, KeyValueStore, MemoryStore, StorageError};
pub use model::{Artwork, DEFAULT_GALLERY_NAME, Gallery, Theme, UNTITLED_ARTWORK, generate_id};
pub use rooms::{DEFAULT_ROOM, RoomGroup, group_by_room};
