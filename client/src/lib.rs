//! # careersu-client
//!
//! Leptos + WASM frontend for the CareerSU job-search demo.
//!
//! This crate contains the session store, the route policy and authorization
//! gate, the mock data source, and the pages and components that render it.
//! The same crate is compiled with `ssr` into the host binary and with
//! `hydrate` into the browser bundle.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: validate the route policy, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // A malformed policy is fatal before anything renders.
    if let Err(e) = routing::policy::route_policy().validate() {
        panic!("invalid route policy: {e}");
    }

    leptos::mount::hydrate_body(app::App);
}
