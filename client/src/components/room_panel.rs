//! One room of a gallery rendered as a thumbnail grid.
//!
//! DESIGN
//! ======
//! Shared by the editor preview (with a remove button per artwork) and the
//! read-only viewer (without one).

use gallery::Artwork;
use leptos::prelude::*;

/// Room heading followed by its artworks.
#[component]
pub fn RoomPanel(
    room: String,
    artworks: Vec<Artwork>,
    #[prop(optional)] on_remove: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <section class="panel room-panel">
            <div class="section-title">{room}</div>
            <div class="grid-thumbs">
                {artworks
                    .into_iter()
                    .map(|artwork| {
                        let Artwork { id, title, url, .. } = artwork;
                        let remove = on_remove.map(|on_remove| {
                            view! {
                                <button
                                    class="art-card__remove"
                                    on:click=move |_| on_remove.run(id.clone())
                                >
                                    "Remove"
                                </button>
                            }
                        });
                        view! {
                            <figure class="art-card">
                                <img loading="lazy" src=url alt=title.clone() class="art-image"/>
                                <figcaption class="art-caption">
                                    <span title=title.clone()>{title.clone()}</span>
                                    {remove}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
