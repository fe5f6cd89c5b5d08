//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per client instance. `App` owns it inside a
//! `RwSignal` provided via context; the route gate and pages only read it.
//! Writers are the startup restore, the login page and the logout action.
//!
//! ERROR HANDLING
//! ==============
//! Identity-provider failures never reach callers. A failed restore degrades
//! to `Anonymous` and asks the provider to sign out so no half-restored
//! state survives.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::identity::Identity;

/// Failure reported by an [`IdentityProvider`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Browser storage could not be reached.
    #[error("browser storage unavailable")]
    StorageUnavailable,
    /// A persisted demo marker exists but cannot be decoded.
    #[error("corrupt demo session marker: {0}")]
    CorruptMarker(String),
    /// The provider's identity lookup failed.
    #[error("identity check failed: {0}")]
    Check(String),
}

/// External source of "who is signed in".
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Look up a previously established identity.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the lookup itself fails; "nobody is
    /// signed in" is `Ok(None)`.
    async fn check_current_identity(&self) -> Result<Option<Identity>, ProviderError>;

    /// Best-effort sign-out. Failures are swallowed by the implementation.
    fn sign_out(&self);
}

/// Lifecycle of the client session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Restore has not finished yet.
    #[default]
    Loading,
    /// Nobody is signed in.
    Anonymous,
    /// An identity is signed in.
    Authenticated(Identity),
}

impl Session {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Loading | Self::Anonymous => None,
        }
    }
}

/// Single source of truth for the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    /// A fresh store, still `Loading` until [`SessionStore::resolve`] runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Recover a prior identity from `provider`.
    ///
    /// Never fails: provider errors are logged, trigger a best-effort
    /// sign-out, and resolve to `Anonymous`.
    pub async fn restore<P>(provider: &P) -> Session
    where
        P: IdentityProvider + ?Sized,
    {
        match provider.check_current_identity().await {
            Ok(Some(identity)) => Session::Authenticated(identity),
            Ok(None) => Session::Anonymous,
            Err(e) => {
                leptos::logging::warn!("session restore failed: {e}");
                provider.sign_out();
                Session::Anonymous
            }
        }
    }

    /// Apply the outcome of [`SessionStore::restore`].
    ///
    /// Only takes effect while the store is still `Loading`; a login that
    /// completed first wins. Returns whether the store changed.
    pub fn resolve(&mut self, restored: Session) -> bool {
        if !self.session.is_loading() || restored.is_loading() {
            return false;
        }
        self.session = restored;
        true
    }

    /// Mark `identity` as signed in, from any prior state.
    pub fn login(&mut self, identity: Identity) {
        leptos::logging::log!("signed in as {} ({})", identity.email(), identity.role().as_str());
        self.session = Session::Authenticated(identity);
    }

    /// Sign out. A no-op when already `Anonymous`, in which case the provider
    /// is not asked to sign out again. Returns whether the store changed.
    pub fn logout<P>(&mut self, provider: &P) -> bool
    where
        P: IdentityProvider + ?Sized,
    {
        if matches!(self.session, Session::Anonymous) {
            return false;
        }
        self.session = Session::Anonymous;
        provider.sign_out();
        true
    }
}
