//! Gallery editor: compose a gallery, preview it by room, share it.
//!
//! DATA FLOW
//! =========
//! The draft is restored once after hydration, then every change to the
//! edited gallery is written back to `localStorage`. Share links carry the
//! whole gallery in their fragment; nothing is sent to the server.

use gallery::{Artwork, Theme, group_by_room};
use leptos::prelude::*;

use crate::components::room_panel::RoomPanel;
use crate::state::editor::{EditorState, NewArtwork};
use crate::util::{browser_storage, location};

#[component]
pub fn EditorPage() -> impl IntoView {
    let state = RwSignal::new(EditorState::default());
    let new_artwork = RwSignal::new(NewArtwork::default());
    let share_link = RwSignal::new(String::new());
    let restored = RwSignal::new(false);

    Effect::new(move || {
        if let Some(draft) = browser_storage::draft_store().load() {
            state.set(EditorState::from_draft(draft));
        }
        restored.set(true);
    });

    Effect::new(move || {
        let snapshot = state.with(EditorState::snapshot);
        if restored.get() {
            browser_storage::draft_store().save(&snapshot);
        }
    });

    let on_add = move |_| {
        let input = new_artwork.get();
        let mut added = false;
        state.update(|s| added = s.add_artwork(&input));
        if added {
            new_artwork.set(NewArtwork::default());
        }
    };

    let on_remove = Callback::new(move |id: String| state.update(|s| s.remove_artwork(&id)));

    let on_generate = move |_| {
        share_link.set(state.with(|s| s.share_link(&location::origin())));
    };

    let on_open_viewer = move |_| {
        let mut url = share_link.get();
        if url.is_empty() {
            url = state.with(|s| s.share_link(&location::origin()));
            share_link.set(url.clone());
        }
        location::open_in_new_tab(&url);
    };

    let on_clear_draft = move |_| {
        browser_storage::draft_store().clear();
        location::reload();
    };

    let preview = move || {
        state.with(|s| {
            let groups = group_by_room(&s.artworks);
            if groups.is_empty() {
                return view! { <div class="editor-empty">"No artworks yet."</div> }.into_any();
            }
            groups
                .into_iter()
                .map(|group| {
                    let room = group.room.to_owned();
                    let artworks: Vec<Artwork> = group.artworks.into_iter().cloned().collect();
                    view! { <RoomPanel room=room artworks=artworks on_remove=on_remove/> }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="editor-page">
            <section class="editor-section">
                <label>
                    <div>"Name"</div>
                    <input
                        prop:value=move || state.with(|s| s.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.name = value);
                        }
                    />
                </label>
                <label>
                    <div>"Theme"</div>
                    <select
                        prop:value=move || state.with(|s| s.theme.as_str())
                        on:change=move |ev| {
                            let theme = Theme::parse(&event_target_value(&ev)).unwrap_or_default();
                            state.update(|s| s.theme = theme);
                        }
                    >
                        <option value="light">"light"</option>
                        <option value="dark">"dark"</option>
                    </select>
                </label>
            </section>

            <section class="editor-section">
                <div class="section-title">"Add artwork"</div>
                <input
                    placeholder="Image URL"
                    prop:value=move || new_artwork.with(|n| n.url.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        new_artwork.update(|n| n.url = value);
                    }
                />
                <input
                    placeholder="Title (optional)"
                    prop:value=move || new_artwork.with(|n| n.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        new_artwork.update(|n| n.title = value);
                    }
                />
                <input
                    placeholder="Room (optional, e.g. \"Room A\")"
                    prop:value=move || new_artwork.with(|n| n.room.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        new_artwork.update(|n| n.room = value);
                    }
                />
                <button on:click=on_add>"Add"</button>
            </section>

            <section class="editor-section">
                <div class="section-title">"Preview"</div>
                {preview}
            </section>

            <section class="editor-section">
                <div class="editor-actions">
                    <button on:click=on_generate>"Generate share link"</button>
                    <button on:click=on_open_viewer>"Open viewer"</button>
                    <button on:click=on_clear_draft>"Clear draft"</button>
                </div>
                <input
                    readonly
                    placeholder="Share link will appear here"
                    prop:value=move || share_link.get()
                    on:focus=move |ev| {
                        #[cfg(feature = "hydrate")]
                        {
                            event_target::<web_sys::HtmlInputElement>(&ev).select();
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = ev;
                        }
                    }
                />
            </section>
        </div>
    }
}
