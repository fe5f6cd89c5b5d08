//! Coach client roster.

use leptos::prelude::*;

use super::coach_dashboard::ClientSummaryCard;
use crate::data::roster::clients;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let roster = StoredValue::new(clients());

    let visible = move || {
        let needle = query.get().trim().to_lowercase();
        roster.with_value(|all| {
            all.iter()
                .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle) || c.email.contains(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="clients-page">
            <header class="page-header">
                <h1>"Clients"</h1>
                <p>"Everyone you are coaching right now"</p>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Search clients..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="clients-page__grid">
                <For each=visible key=|client| client.seeker_id.clone() let:client>
                    <ClientSummaryCard client=client/>
                </For>
            </div>
        </div>
    }
}
