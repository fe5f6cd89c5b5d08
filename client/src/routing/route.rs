//! Navigable paths.
//!
//! `RouteKind` is the parameter-free key the policy table is indexed by;
//! `Route` is a concrete navigation target, carrying the client id for
//! `/client-profile/{id}` and the raw path for anything unrecognized.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Policy key for a navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Landing,
    Login,
    Dashboard,
    Chat,
    Jobs,
    Documents,
    Clients,
    Workspaces,
    Settings,
    Profile,
    ClientProfile,
    Unknown,
}

impl RouteKind {
    pub const ALL: [RouteKind; 12] = [
        RouteKind::Landing,
        RouteKind::Login,
        RouteKind::Dashboard,
        RouteKind::Chat,
        RouteKind::Jobs,
        RouteKind::Documents,
        RouteKind::Clients,
        RouteKind::Workspaces,
        RouteKind::Settings,
        RouteKind::Profile,
        RouteKind::ClientProfile,
        RouteKind::Unknown,
    ];

    /// Fixed path for kinds that take no parameter.
    ///
    /// Only these kinds may be used as redirect targets.
    #[must_use]
    pub fn static_path(self) -> Option<&'static str> {
        match self {
            Self::Landing => Some("/"),
            Self::Login => Some("/login"),
            Self::Dashboard => Some("/dashboard"),
            Self::Chat => Some("/chat"),
            Self::Jobs => Some("/jobs"),
            Self::Documents => Some("/documents"),
            Self::Clients => Some("/clients"),
            Self::Workspaces => Some("/workspaces"),
            Self::Settings => Some("/settings"),
            Self::Profile => Some("/profile"),
            Self::ClientProfile | Self::Unknown => None,
        }
    }
}

const CLIENT_PROFILE_PREFIX: &str = "/client-profile/";

/// A concrete navigation target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Chat,
    Jobs,
    Documents,
    Clients,
    Workspaces,
    Settings,
    Profile,
    ClientProfile(String),
    Unknown(String),
}

impl Route {
    /// Parse a location pathname. Query strings and fragments are ignored and
    /// a trailing slash is tolerated.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/chat" => Self::Chat,
            "/jobs" => Self::Jobs,
            "/documents" => Self::Documents,
            "/clients" => Self::Clients,
            "/workspaces" => Self::Workspaces,
            "/settings" => Self::Settings,
            "/profile" => Self::Profile,
            other => match other.strip_prefix(CLIENT_PROFILE_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::ClientProfile(id.to_owned()),
                _ => Self::Unknown(path.to_owned()),
            },
        }
    }

    /// Build the route for a policy key. `param` is the client id for
    /// `ClientProfile`; a missing id makes the route unknown.
    #[must_use]
    pub fn from_kind(kind: RouteKind, param: Option<String>) -> Self {
        match kind {
            RouteKind::Landing => Self::Landing,
            RouteKind::Login => Self::Login,
            RouteKind::Dashboard => Self::Dashboard,
            RouteKind::Chat => Self::Chat,
            RouteKind::Jobs => Self::Jobs,
            RouteKind::Documents => Self::Documents,
            RouteKind::Clients => Self::Clients,
            RouteKind::Workspaces => Self::Workspaces,
            RouteKind::Settings => Self::Settings,
            RouteKind::Profile => Self::Profile,
            RouteKind::ClientProfile => match param.filter(|id| !id.is_empty()) {
                Some(id) => Self::ClientProfile(id),
                None => Self::Unknown(CLIENT_PROFILE_PREFIX.to_owned()),
            },
            RouteKind::Unknown => Self::Unknown(param.unwrap_or_default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> RouteKind {
        match self {
            Self::Landing => RouteKind::Landing,
            Self::Login => RouteKind::Login,
            Self::Dashboard => RouteKind::Dashboard,
            Self::Chat => RouteKind::Chat,
            Self::Jobs => RouteKind::Jobs,
            Self::Documents => RouteKind::Documents,
            Self::Clients => RouteKind::Clients,
            Self::Workspaces => RouteKind::Workspaces,
            Self::Settings => RouteKind::Settings,
            Self::Profile => RouteKind::Profile,
            Self::ClientProfile(_) => RouteKind::ClientProfile,
            Self::Unknown(_) => RouteKind::Unknown,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ClientProfile(id) => format!("{CLIENT_PROFILE_PREFIX}{id}"),
            Self::Unknown(raw) => raw.clone(),
            other => other.kind().static_path().unwrap_or("/").to_owned(),
        }
    }
}
