//! Route policy and authorization gate.
//!
//! ARCHITECTURE
//! ============
//! `route` parses locations into policy keys, `policy` declares the
//! per-route access table, and `gate` turns (session, route, policy) into a
//! render or redirect decision. None of these touch Leptos; the
//! `components::gated_route` component wires them to the router.

pub mod gate;
pub mod policy;
pub mod route;
