#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use gallery::{Artwork, DEFAULT_GALLERY_NAME, Gallery, Theme, UNTITLED_ARTWORK, codec, generate_id};

/// Gallery being edited.
///
/// Held in a single `RwSignal` by the editor page; every change is written
/// to the draft store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub name: String,
    pub theme: Theme,
    pub artworks: Vec<Artwork>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self { name: DEFAULT_GALLERY_NAME.to_owned(), theme: Theme::Light, artworks: Vec::new() }
    }
}

/// Contents of the "Add artwork" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewArtwork {
    pub title: String,
    pub url: String,
    pub room: String,
}

impl EditorState {
    /// Restore editor state from a stored draft, defaulting blank fields.
    pub fn from_draft(draft: Gallery) -> Self {
        let name = if draft.name.is_empty() { DEFAULT_GALLERY_NAME.to_owned() } else { draft.name };
        Self { name, theme: draft.theme.unwrap_or_default(), artworks: draft.artworks }
    }

    /// Gallery as typed, for the draft store.
    pub fn snapshot(&self) -> Gallery {
        Gallery { name: self.name.clone(), theme: Some(self.theme), artworks: self.artworks.clone() }
    }

    /// Gallery captured into share links; a blank name gets the placeholder.
    pub fn share_payload(&self) -> Gallery {
        let name = self.name.trim();
        let name = if name.is_empty() { DEFAULT_GALLERY_NAME } else { name };
        Gallery { name: name.to_owned(), ..self.snapshot() }
    }

    /// Viewer link for the current gallery under `origin`.
    pub fn share_link(&self, origin: &str) -> String {
        codec::viewer_link(origin, &self.share_payload())
    }

    /// Append an artwork built from the form input.
    ///
    /// Returns `false` (and changes nothing) when the URL is blank.
    pub fn add_artwork(&mut self, input: &NewArtwork) -> bool {
        let url = input.url.trim();
        if url.is_empty() {
            return false;
        }
        let title = match input.title.trim() {
            "" => UNTITLED_ARTWORK,
            title => title,
        };
        let room = Some(input.room.trim()).filter(|r| !r.is_empty()).map(str::to_owned);
        let id = self.fresh_id();
        self.artworks.push(Artwork { id, title: title.to_owned(), url: url.to_owned(), room });
        true
    }

    /// Remove the artwork with `id`, if present.
    pub fn remove_artwork(&mut self, id: &str) {
        self.artworks.retain(|a| a.id != id);
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.artworks.iter().any(|a| a.id == id) {
                return id;
            }
        }
    }
}
