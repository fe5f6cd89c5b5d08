//! Demo identity provider backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demo has no backend. A successful login writes a small JSON marker
//! naming the role; session restore on the next load reads it back and maps
//! it to the canned demo identity. Outside the browser (SSR, tests) there is
//! never a stored identity.

#[cfg(test)]
#[path = "demo_session_test.rs"]
mod demo_session_test;

use serde::{Deserialize, Serialize};

use crate::data::users::demo_identity;
use crate::state::identity::{Identity, Role};
use crate::state::session::{IdentityProvider, ProviderError};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "careersu_demo_session";

/// Persisted shape of a demo sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoMarker {
    pub role: Role,
}

/// Decode a stored marker into the matching demo identity.
///
/// # Errors
///
/// Returns [`ProviderError::CorruptMarker`] when `raw` is not a valid marker.
pub fn parse_marker(raw: &str) -> Result<Identity, ProviderError> {
    let marker: DemoMarker = serde_json::from_str(raw).map_err(|e| ProviderError::CorruptMarker(e.to_string()))?;
    Ok(demo_identity(marker.role))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DemoSessionProvider;

impl DemoSessionProvider {
    /// Persist the signed-in role so a reload restores it.
    pub fn remember(&self, role: Role) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(&DemoMarker { role }) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for DemoSessionProvider {
    async fn check_current_identity(&self) -> Result<Option<Identity>, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(ProviderError::StorageUnavailable)?;
            let raw = storage
                .get_item(STORAGE_KEY)
                .map_err(|_| ProviderError::Check("localStorage read failed".to_owned()))?;
            raw.as_deref().map(parse_marker).transpose()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
