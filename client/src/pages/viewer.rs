//! Read-only gallery viewer driven by the URL fragment.

use gallery::{Artwork, Gallery, group_by_room};
use leptos::prelude::*;

use crate::components::room_panel::RoomPanel;
use crate::util::{location, theme};

#[component]
pub fn ViewerPage() -> impl IntoView {
    let gallery = RwSignal::new(None::<Gallery>);

    Effect::new(move || {
        gallery.set(location::current_gallery());
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            gallery.set(location::current_gallery());
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || {
        if let Some(next) = gallery.with(|g| theme::for_gallery(g.as_ref())) {
            theme::apply(next);
        }
    });

    move || match gallery.get() {
        None => view! {
            <div class="stack-2">
                <div>"No gallery data in URL."</div>
                <div>
                    "Open via a link like " <code>"/gallery/viewer#<base64-json>"</code>
                    " generated in the editor."
                </div>
                <a href="/gallery/editor">"Go to editor"</a>
            </div>
        }
        .into_any(),
        Some(current) => {
            let title = current.display_name().to_owned();
            let rooms = group_by_room(&current.artworks)
                .into_iter()
                .map(|group| {
                    let room = group.room.to_owned();
                    let artworks: Vec<Artwork> = group.artworks.into_iter().cloned().collect();
                    view! { <RoomPanel room=room artworks=artworks/> }
                })
                .collect_view();
            view! {
                <div class="stack-1">
                    <h2 class="gallery-title">{title}</h2>
                    {rooms}
                </div>
            }
            .into_any()
        }
    }
}
