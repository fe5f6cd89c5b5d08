//! Route authorization gate.
//!
//! `resolve` is a pure function of (session, target route, policy). It keeps
//! no memory between navigations; the `GatedRoute` component re-runs it
//! whenever the session or location changes.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::policy::{Denial, Forward, RoutePolicy, ViewKind};
use super::route::{Route, RouteKind};
use crate::state::session::Session;

/// Terminal decision for one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session restore still running; render a neutral placeholder.
    Loading,
    /// Anonymous visitor on a protected route.
    RedirectToLogin,
    /// Navigate to another route instead (role denial or forwarding).
    RedirectToFallback(RouteKind),
    /// Render the given view.
    Render(ViewKind),
}

impl GateOutcome {
    /// Path to navigate to, for redirect outcomes.
    #[must_use]
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => RouteKind::Login.static_path(),
            Self::RedirectToFallback(target) => target.static_path(),
            Self::Loading | Self::Render(_) => None,
        }
    }
}

/// Decide what navigating to `route` produces for `session`.
///
/// Evaluation order: loading, sign-in requirement, forwarding, role check,
/// view selection.
#[must_use]
pub fn resolve(session: &Session, route: &Route, policy: &RoutePolicy) -> GateOutcome {
    let identity = match session {
        Session::Loading => return GateOutcome::Loading,
        Session::Anonymous => None,
        Session::Authenticated(identity) => Some(identity),
    };

    let kind = route.kind();
    let Some(entry) = policy.entry(kind) else {
        // Unreachable with a validated policy.
        return GateOutcome::RedirectToFallback(RouteKind::Landing);
    };

    if identity.is_none() && !entry.allow_anonymous {
        return GateOutcome::RedirectToLogin;
    }

    match entry.forward {
        Forward::Always(target) => return GateOutcome::RedirectToFallback(target),
        Forward::WhenAuthenticated(target) if identity.is_some() => {
            return GateOutcome::RedirectToFallback(target);
        }
        Forward::WhenAuthenticated(_) | Forward::Never => {}
    }

    let role = identity.map(|identity| identity.role());
    if let Some(role) = role {
        if !entry.permits(role) {
            return match entry.on_denied {
                Some(Denial::Redirect(target)) => GateOutcome::RedirectToFallback(target),
                Some(Denial::Substitute(view)) => GateOutcome::Render(view),
                Some(Denial::Blank) | None => GateOutcome::Render(ViewKind::Blank),
            };
        }
    }

    GateOutcome::Render(entry.views.for_viewer(role).unwrap_or(ViewKind::Blank))
}
