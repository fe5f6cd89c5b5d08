//! Top navigation bar for signed-in pages.
//!
//! DESIGN
//! ======
//! Items are declared per role as route kinds rather than raw paths so the
//! bar can never link to a route the policy would bounce for that role.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::data::records::notifications;
use crate::routing::route::RouteKind;
use crate::state::identity::Role;
use crate::state::session::SessionStore;
use crate::util::auth::sign_out;
use crate::util::format::initials;

/// One link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: RouteKind,
}

impl NavItem {
    const fn new(label: &'static str, route: RouteKind) -> Self {
        Self { label, route }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.route.static_path().unwrap_or("/")
    }
}

const SEEKER_ITEMS: [NavItem; 5] = [
    NavItem::new("Dashboard", RouteKind::Dashboard),
    NavItem::new("AI Chat", RouteKind::Chat),
    NavItem::new("Jobs", RouteKind::Jobs),
    NavItem::new("Documents", RouteKind::Documents),
    NavItem::new("Profile", RouteKind::Profile),
];

const COACH_ITEMS: [NavItem; 5] = [
    NavItem::new("Dashboard", RouteKind::Dashboard),
    NavItem::new("Clients", RouteKind::Clients),
    NavItem::new("Messages", RouteKind::Chat),
    NavItem::new("Workspaces", RouteKind::Workspaces),
    NavItem::new("Settings", RouteKind::Settings),
];

#[must_use]
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Seeker => &SEEKER_ITEMS,
        Role::Coach => &COACH_ITEMS,
    }
}

/// The notification bell is a seeker-only affordance.
#[must_use]
pub fn shows_unread_badge(role: Option<Role>, unread: usize) -> bool {
    role == Some(Role::Seeker) && unread > 0
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let pathname = use_location().pathname;

    let identity = move || session.with(|store| store.identity().cloned());
    let unread = notifications().iter().filter(|n| !n.read).count();

    let show_bell = move || shows_unread_badge(identity().map(|i| i.role()), unread);

    let on_logout = move |_| {
        sign_out(session);
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/dashboard">"CareerSU"</a>
            <div class="nav-bar__links">
                {move || {
                    let Some(identity) = identity() else {
                        return Vec::new();
                    };
                    nav_items(identity.role())
                        .iter()
                        .map(|item| {
                            let path = item.path();
                            let active = move || pathname.get() == path;
                            view! {
                                <a class="nav-bar__link" class:nav-bar__link--active=active href=path>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="nav-bar__user">
                <Show when=show_bell>
                    <a class="nav-bar__bell" href="/dashboard" title="Notifications">
                        <span class="nav-bar__badge">{unread}</span>
                    </a>
                </Show>
                <div class="nav-bar__who">
                    <span class="nav-bar__name">{move || identity().map(|i| i.name().to_owned()).unwrap_or_default()}</span>
                    <span class="nav-bar__role">{move || identity().map(|i| i.role().label()).unwrap_or_default()}</span>
                </div>
                <span class="avatar">{move || identity().map(|i| initials(i.name())).unwrap_or_default()}</span>
                <button class="btn nav-bar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
