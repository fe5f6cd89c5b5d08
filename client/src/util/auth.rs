//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies the same redirect behavior, and the login page
//! and navigation bar share the sign-in and sign-out writes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::demo_session::DemoSessionProvider;
use crate::routing::gate::GateOutcome;
use crate::state::identity::Identity;
use crate::state::session::SessionStore;

/// Gate redirects replace the history entry so Back does not bounce.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever the gate outcome for the current route is a redirect.
pub fn install_gate_redirect<F>(outcome: Memo<GateOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = outcome.get().redirect_path() {
            navigate(path, redirect_options());
        }
    });
}

/// Record a successful demo login and remember it for reloads.
pub fn sign_in(session: RwSignal<SessionStore>, identity: Identity) {
    DemoSessionProvider.remember(identity.role());
    session.update(|store| store.login(identity));
}

/// Sign out. The gate on the current route owns the follow-up redirect.
///
/// Returns `false` when the session was already anonymous.
pub fn sign_out(session: RwSignal<SessionStore>) -> bool {
    let mut changed = false;
    session.update(|store| changed = store.logout(&DemoSessionProvider));
    changed
}
