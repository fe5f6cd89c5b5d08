//! In-memory demo data source.
//!
//! Everything here is fixed sample content; nothing is persisted or fetched.

pub mod records;
pub mod roster;
pub mod types;
pub mod users;
