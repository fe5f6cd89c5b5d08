//! Coach home: roster summary and per-client progress.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::stat_card::StatCard;
use crate::data::roster::clients;
use crate::data::types::CoachingClient;
use crate::state::roster::{RosterSummary, examples_progress};
use crate::util::format::{initials, long_date, relative_time};

#[component]
pub fn ClientSummaryCard(client: CoachingClient) -> impl IntoView {
    let now = OffsetDateTime::now_utc();
    let progress = examples_progress(&client);
    let href = format!("/client-profile/{}", client.seeker_id);
    view! {
        <article class="card client-card">
            <header class="client-card__header">
                <span class="avatar">{initials(&client.name)}</span>
                <div>
                    <h3>{client.name.clone()}</h3>
                    <p class="muted">"Last contact " {relative_time(client.last_contact, now)}</p>
                </div>
                {client.meets_criteria.then(|| view! { <span class="badge badge--success">"100% Ready"</span> })}
            </header>
            <div class="client-card__progress">
                <span>"Profile " {client.profile_completion} "%"</span>
                <span>{format!("Examples {}/{}", client.examples_count, client.target_examples_count)}</span>
                <progress max="100" value=progress.to_string()></progress>
            </div>
            <div class="client-card__docs">
                <span>"Resume " <span class=format!("badge {}", client.resume_status.css())>{client.resume_status.badge()}</span></span>
                <span>
                    "Cover Letter "
                    <span class=format!("badge {}", client.cover_letter_status.css())>{client.cover_letter_status.badge()}</span>
                </span>
            </div>
            {client.next_session.map(|date| view! { <p class="muted">"Next session " {long_date(date)}</p> })}
            <div class="client-card__actions">
                <a class="btn" href=href>"View Full Profile"</a>
                <a class="btn btn--ghost" href="/chat">"Message"</a>
            </div>
        </article>
    }
}

#[component]
pub fn CoachDashboard() -> impl IntoView {
    let roster = clients();
    let summary = RosterSummary::from_clients(&roster);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Coach Dashboard"</h1>
                    <p>"Manage your clients and track their progress"</p>
                </div>
                <div class="dashboard-page__badges">
                    <span>{summary.client_count} " Active Clients"</span>
                    <span>{summary.ready_count} " 100% Ready"</span>
                </div>
            </header>
            <div class="dashboard-page__stats">
                <StatCard
                    title="Total Clients"
                    value=summary.client_count.to_string()
                    detail=format!("{} fully ready", summary.ready_count)
                />
                <StatCard title="Sessions This Month" value=summary.total_sessions.to_string() detail="Across all clients"/>
                <StatCard title="Avg. Completion" value=format!("{}%", summary.avg_completion)/>
            </div>
            <section class="dashboard-page__clients">
                <div class="section-header">
                    <h2>"Client Progress"</h2>
                    <a class="btn btn--ghost" href="/clients">"View All Clients"</a>
                </div>
                {roster.into_iter().map(|client| view! { <ClientSummaryCard client=client/> }).collect::<Vec<_>>()}
            </section>
        </div>
    }
}
