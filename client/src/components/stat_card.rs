//! Headline metric tile used by both dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] detail: Option<String>,
    #[prop(default = "")] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card {tone}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            {detail.map(|text| view! { <p class="stat-card__detail">{text}</p> })}
        </div>
    }
}
