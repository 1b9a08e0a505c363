//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{editor::EditorPage, viewer::ViewerPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `/` is redirected to the editor by the server, outside the Leptos router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery.css"/>
        <Title text="Gallery"/>

        <Router>
            <main class="gallery-app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("gallery"), StaticSegment("editor")) view=EditorPage/>
                    <Route path=(StaticSegment("gallery"), StaticSegment("viewer")) view=ViewerPage/>
                </Routes>
            </main>
        </Router>
    }
}
