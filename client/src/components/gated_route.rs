//! Router glue for the authorization gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` in `App` renders a `GatedRoute` for its `RouteKind`. The
//! component derives the concrete `Route` (including the client-profile id
//! or the unmatched path), resolves it against the session and the shared
//! policy, and either renders the chosen view or performs the redirect.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use super::navigation::NavBar;
use crate::pages::{
    chat::ChatPage, client_profile::ClientProfilePage, clients::ClientsPage, coach_dashboard::CoachDashboard,
    coach_messages::CoachMessagesPage, coach_settings::CoachSettingsPage, documents::DocumentsPage, jobs::JobsPage,
    landing::LandingPage, login::LoginPage, profile::ProfilePage, seeker_dashboard::SeekerDashboard,
    workspaces::WorkspacesPage,
};
use crate::routing::gate::{GateOutcome, resolve};
use crate::routing::policy::{ViewKind, route_policy};
use crate::routing::route::{Route, RouteKind};
use crate::state::session::SessionStore;
use crate::util::auth::install_gate_redirect;

#[component]
pub fn GatedRoute(kind: RouteKind) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let params = use_params_map();
    let location = use_location();

    let route = Memo::new(move |_| match kind {
        RouteKind::ClientProfile => Route::from_kind(kind, params.read().get("id")),
        RouteKind::Unknown => Route::parse(&location.pathname.get()),
        _ => Route::from_kind(kind, None),
    });
    let outcome = Memo::new(move |_| session.with(|store| resolve(store.session(), &route.get(), route_policy())));
    install_gate_redirect(outcome, use_navigate());

    let show_nav = route_policy().entry(kind).is_some_and(|entry| !entry.allow_anonymous);

    move || match outcome.get() {
        GateOutcome::Loading => view! {
            <div class="gate gate--loading">
                <div class="gate__spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GateOutcome::RedirectToLogin | GateOutcome::RedirectToFallback(_) => view! {
            <div class="gate">
                <p>"Redirecting..."</p>
            </div>
        }
        .into_any(),
        GateOutcome::Render(view_kind) => view! {
            <div class="app-layout">
                {show_nav.then(|| view! { <NavBar/> })}
                <main class="app-layout__main">{render_view(view_kind, &route.get())}</main>
            </div>
        }
        .into_any(),
    }
}

/// Concrete page for a gate decision.
fn render_view(view_kind: ViewKind, route: &Route) -> AnyView {
    match view_kind {
        ViewKind::Landing => view! { <LandingPage/> }.into_any(),
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::SeekerDashboard => view! { <SeekerDashboard/> }.into_any(),
        ViewKind::CoachDashboard => view! { <CoachDashboard/> }.into_any(),
        ViewKind::Chat => view! { <ChatPage/> }.into_any(),
        ViewKind::CoachMessages => view! { <CoachMessagesPage/> }.into_any(),
        ViewKind::Jobs => view! { <JobsPage/> }.into_any(),
        ViewKind::Documents => view! { <DocumentsPage/> }.into_any(),
        ViewKind::Clients => view! { <ClientsPage/> }.into_any(),
        ViewKind::Workspaces => view! { <WorkspacesPage/> }.into_any(),
        ViewKind::CoachSettings => view! { <CoachSettingsPage/> }.into_any(),
        ViewKind::Profile => view! { <ProfilePage/> }.into_any(),
        ViewKind::ClientProfile => {
            let seeker_id = match route {
                Route::ClientProfile(id) => id.clone(),
                _ => String::new(),
            };
            view! { <ClientProfilePage seeker_id=seeker_id/> }.into_any()
        }
        ViewKind::Blank => ().into_any(),
    }
}
