//! Declarative per-route access policy.
//!
//! DESIGN
//! ======
//! Every navigable path has exactly one `PolicyEntry`: whether anonymous
//! visitors may see it, which roles may see it once signed in, what happens
//! to a role that is excluded, and which view each viewer gets. Pages never
//! repeat these checks; the gate consults this table once per navigation.
//!
//! The table is built once, validated once at startup, and never mutated.
//! A validation failure is a configuration bug and aborts startup.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::sync::LazyLock;

use super::gate::{self, GateOutcome};
use super::route::{Route, RouteKind};
use crate::state::identity::{Identity, Role};
use crate::state::session::Session;

/// Redirect hops a single navigation may take before it must render.
const MAX_REDIRECT_HOPS: usize = 4;

/// Screen produced by a `Render` outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Landing,
    Login,
    SeekerDashboard,
    CoachDashboard,
    Chat,
    CoachMessages,
    Jobs,
    Documents,
    Clients,
    Workspaces,
    CoachSettings,
    Profile,
    ClientProfile,
    /// Empty content area.
    Blank,
}

/// What an excluded role gets instead of the route's own view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// Navigate to another route.
    Redirect(RouteKind),
    /// Render a different view in place, without navigating.
    Substitute(ViewKind),
    /// Render an empty content area.
    Blank,
}

/// Unconditional or sign-in-dependent forwarding for a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Forward {
    #[default]
    Never,
    /// Signed-in users are sent elsewhere (landing and login pages).
    WhenAuthenticated(RouteKind),
    /// Everyone is sent elsewhere (unrecognized paths).
    Always(RouteKind),
}

/// View selection by viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleViews {
    pub anonymous: Option<ViewKind>,
    pub seeker: Option<ViewKind>,
    pub coach: Option<ViewKind>,
}

impl RoleViews {
    /// The same view for every viewer.
    #[must_use]
    pub const fn same(view: ViewKind) -> Self {
        Self { anonymous: Some(view), seeker: Some(view), coach: Some(view) }
    }

    /// One view per signed-in role, nothing for anonymous visitors.
    #[must_use]
    pub const fn by_role(seeker: ViewKind, coach: ViewKind) -> Self {
        Self { anonymous: None, seeker: Some(seeker), coach: Some(coach) }
    }

    #[must_use]
    pub fn for_viewer(&self, role: Option<Role>) -> Option<ViewKind> {
        match role {
            None => self.anonymous,
            Some(Role::Seeker) => self.seeker,
            Some(Role::Coach) => self.coach,
        }
    }
}

/// Access rules for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyEntry {
    pub route: RouteKind,
    pub allow_anonymous: bool,
    pub forward: Forward,
    /// Roles allowed once signed in; empty means any role.
    pub roles: Vec<Role>,
    pub on_denied: Option<Denial>,
    pub views: RoleViews,
}

impl PolicyEntry {
    /// A route anyone may visit.
    #[must_use]
    pub fn public(route: RouteKind, view: ViewKind) -> Self {
        Self {
            route,
            allow_anonymous: true,
            forward: Forward::Never,
            roles: Vec::new(),
            on_denied: None,
            views: RoleViews::same(view),
        }
    }

    /// A route that requires sign-in.
    #[must_use]
    pub fn protected(route: RouteKind, views: RoleViews) -> Self {
        Self {
            route,
            allow_anonymous: false,
            forward: Forward::Never,
            roles: Vec::new(),
            on_denied: None,
            views,
        }
    }

    /// A public route whose visitors are always forwarded to `target`.
    #[must_use]
    pub fn forwarding(route: RouteKind, target: RouteKind) -> Self {
        Self {
            route,
            allow_anonymous: true,
            forward: Forward::Always(target),
            roles: Vec::new(),
            on_denied: None,
            views: RoleViews::default(),
        }
    }

    #[must_use]
    pub fn forward_when_authenticated(mut self, target: RouteKind) -> Self {
        self.forward = Forward::WhenAuthenticated(target);
        self
    }

    #[must_use]
    pub fn restricted_to(mut self, roles: &[Role], on_denied: Denial) -> Self {
        self.roles = roles.to_vec();
        self.on_denied = Some(on_denied);
        self
    }

    /// Whether a signed-in `role` passes this entry's role check.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }

    fn restricts(&self) -> bool {
        Role::ALL.iter().any(|role| !self.permits(*role))
    }
}

/// Route policy validation failure. Always fatal at startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("duplicate policy entry for {0:?}")]
    Duplicate(RouteKind),
    #[error("no policy entry for {0:?}")]
    MissingEntry(RouteKind),
    #[error("{0:?} allows anonymous access but restricts roles")]
    ConflictingAccess(RouteKind),
    #[error("{route:?} denies {role} without a fallback")]
    MissingDenial { route: RouteKind, role: &'static str },
    #[error("{route:?} has no view for {viewer}")]
    MissingView { route: RouteKind, viewer: &'static str },
    #[error("{route:?} redirects to {target:?}, which has no fixed path")]
    UnroutableTarget { route: RouteKind, target: RouteKind },
    #[error("{route:?} does not settle on a view for {viewer}")]
    RedirectLoop { route: RouteKind, viewer: &'static str },
}

/// The full route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePolicy {
    entries: Vec<PolicyEntry>,
}

static STANDARD: LazyLock<RoutePolicy> = LazyLock::new(RoutePolicy::standard);

/// Process-wide policy used by the app shell.
#[must_use]
pub fn route_policy() -> &'static RoutePolicy {
    &STANDARD
}

impl RoutePolicy {
    #[must_use]
    pub fn new(entries: Vec<PolicyEntry>) -> Self {
        Self { entries }
    }

    /// The product's route table.
    #[must_use]
    pub fn standard() -> Self {
        use RouteKind as K;
        use ViewKind as V;
        let seeker_only = [Role::Seeker];
        let coach_only = [Role::Coach];
        let to_dashboard = Denial::Redirect(K::Dashboard);

        Self::new(vec![
            PolicyEntry::public(K::Landing, V::Landing).forward_when_authenticated(K::Dashboard),
            PolicyEntry::public(K::Login, V::Login).forward_when_authenticated(K::Dashboard),
            PolicyEntry::protected(K::Dashboard, RoleViews::by_role(V::SeekerDashboard, V::CoachDashboard)),
            PolicyEntry::protected(K::Chat, RoleViews::by_role(V::Chat, V::CoachMessages)),
            PolicyEntry::protected(K::Jobs, RoleViews::by_role(V::Jobs, V::Jobs)).restricted_to(&seeker_only, to_dashboard),
            PolicyEntry::protected(K::Documents, RoleViews::by_role(V::Documents, V::Documents))
                .restricted_to(&seeker_only, to_dashboard),
            PolicyEntry::protected(K::Clients, RoleViews::by_role(V::Clients, V::Clients)).restricted_to(&coach_only, to_dashboard),
            PolicyEntry::protected(K::Workspaces, RoleViews::by_role(V::Workspaces, V::Workspaces))
                .restricted_to(&coach_only, to_dashboard),
            PolicyEntry::protected(K::Settings, RoleViews::by_role(V::CoachSettings, V::CoachSettings))
                .restricted_to(&coach_only, Denial::Substitute(V::Profile)),
            PolicyEntry::protected(K::Profile, RoleViews::by_role(V::Profile, V::Profile)),
            PolicyEntry::protected(K::ClientProfile, RoleViews::by_role(V::ClientProfile, V::ClientProfile))
                .restricted_to(&coach_only, Denial::Blank),
            PolicyEntry::forwarding(K::Unknown, K::Landing),
        ])
    }

    #[must_use]
    pub fn entry(&self, route: RouteKind) -> Option<&PolicyEntry> {
        self.entries.iter().find(|entry| entry.route == route)
    }

    #[must_use]
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Check the table for configuration errors.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for kind in RouteKind::ALL {
            match self.entries.iter().filter(|entry| entry.route == kind).count() {
                0 => return Err(PolicyError::MissingEntry(kind)),
                1 => {}
                _ => return Err(PolicyError::Duplicate(kind)),
            }
        }
        for entry in &self.entries {
            validate_entry(entry)?;
        }
        for kind in RouteKind::ALL {
            let route = probe_route(kind);
            for viewer in viewers() {
                if !self.settles(&route, viewer) {
                    return Err(PolicyError::RedirectLoop { route: kind, viewer: viewer_name(viewer) });
                }
            }
        }
        Ok(())
    }

    /// Whether navigating to `route` as `viewer` reaches `Render` within
    /// [`MAX_REDIRECT_HOPS`] redirects.
    fn settles(&self, route: &Route, viewer: Option<Role>) -> bool {
        let session = match viewer {
            None => Session::Anonymous,
            Some(role) => Session::Authenticated(Identity::new("probe", "probe", "probe@invalid", role)),
        };
        let mut current = route.clone();
        for _ in 0..=MAX_REDIRECT_HOPS {
            current = match gate::resolve(&session, &current, self) {
                GateOutcome::Render(_) => return true,
                GateOutcome::Loading => return false,
                GateOutcome::RedirectToLogin => Route::Login,
                GateOutcome::RedirectToFallback(target) => Route::from_kind(target, None),
            };
        }
        false
    }
}

fn validate_entry(entry: &PolicyEntry) -> Result<(), PolicyError> {
    let route = entry.route;
    if entry.allow_anonymous && !entry.roles.is_empty() {
        return Err(PolicyError::ConflictingAccess(route));
    }

    let targets = [
        match entry.forward {
            Forward::Never => None,
            Forward::WhenAuthenticated(target) | Forward::Always(target) => Some(target),
        },
        match entry.on_denied {
            Some(Denial::Redirect(target)) => Some(target),
            _ => None,
        },
    ];
    for target in targets.into_iter().flatten() {
        if target.static_path().is_none() {
            return Err(PolicyError::UnroutableTarget { route, target });
        }
    }

    if entry.restricts() && entry.on_denied.is_none() {
        let role = Role::ALL.into_iter().find(|role| !entry.permits(*role)).unwrap_or(Role::Seeker);
        return Err(PolicyError::MissingDenial { route, role: role.as_str() });
    }

    let forwards_anonymous = matches!(entry.forward, Forward::Always(_));
    let forwards_signed_in = !matches!(entry.forward, Forward::Never);
    if entry.allow_anonymous && !forwards_anonymous && entry.views.anonymous.is_none() {
        return Err(PolicyError::MissingView { route, viewer: viewer_name(None) });
    }
    if !forwards_signed_in {
        for role in Role::ALL.into_iter().filter(|role| entry.permits(*role)) {
            if entry.views.for_viewer(Some(role)).is_none() {
                return Err(PolicyError::MissingView { route, viewer: role.as_str() });
            }
        }
    }
    Ok(())
}

fn viewers() -> [Option<Role>; 3] {
    [None, Some(Role::Seeker), Some(Role::Coach)]
}

fn viewer_name(viewer: Option<Role>) -> &'static str {
    viewer.map_or("anonymous", Role::as_str)
}

fn probe_route(kind: RouteKind) -> Route {
    match kind {
        RouteKind::ClientProfile => Route::ClientProfile("probe".to_owned()),
        RouteKind::Unknown => Route::Unknown("/probe-unrecognized".to_owned()),
        other => Route::from_kind(other, None),
    }
}
