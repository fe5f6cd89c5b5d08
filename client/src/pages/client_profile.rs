//! Coach view of one client's full profile.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::data::roster::find_client;
use crate::data::types::{ClientDocument, CoachingClient};
use crate::state::roster::examples_progress;
use crate::util::format::{initials, long_date, relative_time};

fn document_list(title: &'static str, docs: Vec<ClientDocument>) -> impl IntoView {
    let items = docs
        .into_iter()
        .map(|doc| {
            view! {
                <li class="client-doc">
                    <span>{doc.title}</span>
                    <span class=format!("badge {}", doc.status.css())>{doc.status.badge()}</span>
                    <span class="muted">{long_date(doc.updated)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let empty = items.is_empty();
    view! {
        <section class="card">
            <h2>{title}</h2>
            {empty.then(|| view! { <p class="muted">"Nothing yet"</p> })}
            <ul>{items}</ul>
        </section>
    }
}

fn render_client(client: CoachingClient) -> impl IntoView {
    let now = OffsetDateTime::now_utc();
    let progress = examples_progress(&client);
    let (ready_css, ready_label) =
        if client.meets_criteria { ("badge badge--success", "Ready") } else { ("badge badge--warning", "In Progress") };
    let no_gaps = client.gaps.is_empty();
    let gaps = client.gaps.iter().map(|gap| view! { <li>{gap.clone()}</li> }).collect::<Vec<_>>();
    let notes = client
        .session_notes
        .iter()
        .map(|note| view! { <li><strong>{long_date(note.date)}</strong> " " {note.note.clone()}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="client-profile-page">
            <a class="btn btn--ghost" href="/dashboard">"Back to Dashboard"</a>
            <header class="client-profile-page__header">
                <span class="avatar avatar--large">{initials(&client.name)}</span>
                <div>
                    <h1>{client.name.clone()}</h1>
                    <p class="muted">{client.email.clone()}</p>
                    <p class="muted">"Client Profile · Assigned " {long_date(client.assigned_date)}</p>
                </div>
                <span class=ready_css>{ready_label}</span>
            </header>
            <div class="client-profile-page__stats">
                <div class="card"><p>"Profile Completion"</p><p class="stat">{client.profile_completion} "%"</p></div>
                <div class="card">
                    <p>"Examples"</p>
                    <p class="stat">{format!("{}/{}", client.examples_count, client.target_examples_count)}</p>
                    <progress max="100" value=progress.to_string()></progress>
                </div>
                <div class="card"><p>"Total Sessions"</p><p class="stat">{client.total_sessions}</p></div>
                <div class="card"><p>"Last Contact"</p><p class="stat">{relative_time(client.last_contact, now)}</p></div>
                <div class="card">
                    <p>"Next Session"</p>
                    <p class="stat">{client.next_session.map_or_else(|| "Not scheduled".to_owned(), long_date)}</p>
                </div>
            </div>
            {document_list("Resume", client.resumes)}
            {document_list("Cover Letter", client.cover_letters)}
            <section class="card">
                <h2>"Readiness Gaps"</h2>
                {no_gaps.then(|| view! { <p class="muted">"Meets every readiness criterion"</p> })}
                <ul>{gaps}</ul>
            </section>
            <section class="card">
                <h2>"Session Notes"</h2>
                <ul>{notes}</ul>
            </section>
        </div>
    }
}

#[component]
pub fn ClientProfilePage(seeker_id: String) -> impl IntoView {
    match find_client(&seeker_id) {
        Some(client) => render_client(client).into_any(),
        None => view! {
            <div class="empty-state">
                <h1>"Client Not Found"</h1>
                <p>"The requested client profile could not be found."</p>
                <a class="btn" href="/dashboard">"Back to Dashboard"</a>
            </div>
        }
        .into_any(),
    }
}
