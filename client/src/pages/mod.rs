//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are only reached through `components::gated_route`, so a protected
//! page can assume the session holds an identity of a permitted role. Each
//! page owns its view state and delegates rendering details to `components`.

use leptos::prelude::*;

use crate::state::identity::Identity;
use crate::state::session::SessionStore;

pub mod chat;
pub mod client_profile;
pub mod clients;
pub mod coach_dashboard;
pub mod coach_messages;
pub mod coach_settings;
pub mod documents;
pub mod jobs;
pub mod landing;
pub mod login;
pub mod profile;
pub mod seeker_dashboard;
pub mod workspaces;

/// Reactive view of the signed-in identity.
pub(crate) fn use_identity() -> Signal<Option<Identity>> {
    let session = expect_context::<RwSignal<SessionStore>>();
    Signal::derive(move || session.with(|store| store.identity().cloned()))
}
