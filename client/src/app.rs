//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gated_route::GatedRoute;
use crate::routing::route::RouteKind;
use crate::state::session::SessionStore;

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
/// Owns the session store. The store starts `Loading`; in the browser the
/// demo session provider is consulted once and the result resolves it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let restored = SessionStore::restore(&crate::util::demo_session::DemoSessionProvider).await;
        session.update(|store| {
            store.resolve(restored);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/careersu.css"/>
        <Title text="CareerSU"/>

        <Router>
            <Routes fallback=|| view! { <GatedRoute kind=RouteKind::Unknown/> }>
                <Route path=StaticSegment("") view=|| view! { <GatedRoute kind=RouteKind::Landing/> }/>
                <Route path=StaticSegment("login") view=|| view! { <GatedRoute kind=RouteKind::Login/> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <GatedRoute kind=RouteKind::Dashboard/> }/>
                <Route path=StaticSegment("chat") view=|| view! { <GatedRoute kind=RouteKind::Chat/> }/>
                <Route path=StaticSegment("jobs") view=|| view! { <GatedRoute kind=RouteKind::Jobs/> }/>
                <Route path=StaticSegment("documents") view=|| view! { <GatedRoute kind=RouteKind::Documents/> }/>
                <Route path=StaticSegment("clients") view=|| view! { <GatedRoute kind=RouteKind::Clients/> }/>
                <Route path=StaticSegment("workspaces") view=|| view! { <GatedRoute kind=RouteKind::Workspaces/> }/>
                <Route path=StaticSegment("settings") view=|| view! { <GatedRoute kind=RouteKind::Settings/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <GatedRoute kind=RouteKind::Profile/> }/>
                <Route
                    path=(StaticSegment("client-profile"), ParamSegment("id"))
                    view=|| view! { <GatedRoute kind=RouteKind::ClientProfile/> }
                />
            </Routes>
        </Router>
    }
}
