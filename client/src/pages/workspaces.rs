//! Coach shared workspaces.

use leptos::prelude::*;

use crate::data::roster::{find_client, workspaces};
use crate::util::format::long_date;

#[component]
pub fn WorkspacesPage() -> impl IntoView {
    let cards = workspaces()
        .into_iter()
        .map(|workspace| {
            let members = workspace
                .client_ids
                .iter()
                .filter_map(|id| find_client(id))
                .map(|client| client.name)
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <article class="card workspace-card">
                    <h3>{workspace.name}</h3>
                    <p>{workspace.description}</p>
                    <p class="muted">"Members: " {members}</p>
                    <p class="muted">
                        {format!("{} documents", workspace.document_count)} " · Updated " {long_date(workspace.updated)}
                    </p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="workspaces-page">
            <header class="page-header">
                <h1>"Workspaces"</h1>
                <p>"Collaborate with clients on shared documents"</p>
            </header>
            <div class="workspaces-page__grid">{cards}</div>
        </div>
    }
}
