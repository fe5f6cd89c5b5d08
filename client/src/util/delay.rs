//! Simulated latency for demo actions.

/// Run `f` after `ms` milliseconds in the browser. Outside the browser there
/// is no event loop to wait on, so `f` runs immediately.
pub fn after_delay<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        f();
    }
}
