//! Coach inbox: one thread per client.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::data::roster::clients;
use crate::util::format::{initials, relative_time};

#[component]
pub fn CoachMessagesPage() -> impl IntoView {
    let now = OffsetDateTime::now_utc();
    let threads = clients()
        .into_iter()
        .map(|client| {
            let preview = client
                .session_notes
                .first()
                .map(|note| note.note.clone())
                .unwrap_or_else(|| "No messages yet".to_owned());
            view! {
                <li class="thread">
                    <span class="avatar">{initials(&client.name)}</span>
                    <div class="thread__body">
                        <p class="thread__name">{client.name}</p>
                        <p class="thread__preview">{preview}</p>
                    </div>
                    <span class="thread__time">{relative_time(client.last_contact, now)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="messages-page">
            <header class="page-header">
                <h1>"Messages"</h1>
                <p>"Conversations with your clients"</p>
            </header>
            <ul class="card messages-page__threads">{threads}</ul>
        </div>
    }
}
