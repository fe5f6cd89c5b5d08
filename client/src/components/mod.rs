//! Reusable UI components shared by pages.

pub mod gated_route;
pub mod job_card;
pub mod navigation;
pub mod stat_card;
