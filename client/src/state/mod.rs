//! Client-side state: the session plus per-page view state.
//!
//! `identity` and `session` drive authorization. The remaining modules are
//! pure filter/aggregate helpers the pages hold in signals.

pub mod chat;
pub mod documents;
pub mod identity;
pub mod jobs;
pub mod profile;
pub mod roster;
pub mod session;
