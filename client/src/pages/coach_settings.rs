//! Coach account settings.

use leptos::prelude::*;

use super::use_identity;

#[component]
pub fn CoachSettingsPage() -> impl IntoView {
    let identity = use_identity();
    let email_digest = RwSignal::new(true);
    let session_reminders = RwSignal::new(true);

    let field = move |pick: fn(&crate::state::identity::Identity) -> String| {
        move || identity.get().map(|i| pick(&i)).unwrap_or_default()
    };

    view! {
        <div class="settings-page">
            <header class="page-header">
                <h1>"Settings"</h1>
                <p>"Account and notification preferences"</p>
            </header>
            <section class="card">
                <h2>"Account"</h2>
                <dl>
                    <dt>"Name"</dt>
                    <dd>{field(|i| i.name().to_owned())}</dd>
                    <dt>"Email"</dt>
                    <dd>{field(|i| i.email().to_owned())}</dd>
                    <dt>"Location"</dt>
                    <dd>{field(|i| i.profile.location.clone().unwrap_or_default())}</dd>
                </dl>
            </section>
            <section class="card">
                <h2>"Notifications"</h2>
                <label>
                    <input type="checkbox" prop:checked=move || email_digest.get() on:change=move |_| email_digest.update(|v| *v = !*v)/>
                    "Weekly client progress digest"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || session_reminders.get()
                        on:change=move |_| session_reminders.update(|v| *v = !*v)
                    />
                    "Session reminders"
                </label>
            </section>
        </div>
    }
}
