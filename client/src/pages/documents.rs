//! Seeker document library.

use leptos::prelude::*;

use crate::data::records::documents;
use crate::data::types::{Document, DocumentType};
use crate::state::documents::{DocumentFilter, count_by_type, job_match_label};
use crate::util::format::long_date;

fn status_badge(status: &str) -> (&'static str, String) {
    match status {
        "current" => ("badge--success", "Current".to_owned()),
        "generated" => ("badge--info", "AI Generated".to_owned()),
        "draft" => ("badge--secondary", "Draft".to_owned()),
        other => ("badge--outline", other.to_owned()),
    }
}

#[component]
fn DocumentRow(doc: Document) -> impl IntoView {
    let (badge_css, badge_text) = status_badge(&doc.status);
    view! {
        <article class="card document-row">
            <div class="document-row__main">
                <h3>{doc.title} <span class=format!("badge {badge_css}")>{badge_text}</span></h3>
                {doc.tailored_for.map(|target| view! { <p class="document-row__target">"Tailored for: " {target}</p> })}
                <p class="document-row__meta">
                    <span>"Modified " {long_date(doc.last_modified)}</span>
                    <span>"Version " {doc.version}</span>
                    <span>"AI Score: " {doc.ai_score} "%"</span>
                    {(doc.fit_jobs > 0).then(|| view! { <span>{job_match_label(doc.fit_jobs)}</span> })}
                </p>
            </div>
        </article>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let all = StoredValue::new(documents());
    let filter = RwSignal::new(DocumentFilter::default());
    let total = all.with_value(Vec::len);

    let visible = move || {
        let filter = filter.get();
        all.with_value(|docs| filter.apply(docs).into_iter().cloned().collect::<Vec<_>>())
    };

    let type_button = move |doc_type: Option<DocumentType>| {
        let label = match doc_type {
            Some(kind) => format!("{} ({})", kind.label(), all.with_value(|docs| count_by_type(docs, kind))),
            None => format!("All ({total})"),
        };
        view! {
            <button
                class="btn btn--filter"
                class:btn--active=move || filter.with(|f| f.doc_type == doc_type)
                on:click=move |_| filter.update(|f| f.doc_type = doc_type)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="documents-page">
            <header class="page-header">
                <h1>"Documents"</h1>
                <p>"Resumes and cover letters, tailored by AI for every application"</p>
            </header>
            <div class="documents-page__controls">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search documents..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                {type_button(None)}
                {DocumentType::ALL.iter().map(|kind| type_button(Some(*kind))).collect::<Vec<_>>()}
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <h3>"No documents found"</h3>
                            <p>"Try a different search or type"</p>
                        </div>
                    }
                }
            >
                <For each=visible key=|doc| doc.id.clone() let:doc>
                    <DocumentRow doc=doc/>
                </For>
            </Show>
        </div>
    }
}
