//! Seeker job tracker with search, fit and status filters.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::stat_card::StatCard;
use crate::data::records::jobs;
use crate::data::types::{FitScore, JobStatus};
use crate::state::jobs::{JobFilter, count_by_fit, count_by_status};

#[component]
pub fn JobsPage() -> impl IntoView {
    let all = StoredValue::new(jobs());
    let filter = RwSignal::new(JobFilter::default());

    let total = all.with_value(Vec::len);
    let count_status = move |status| all.with_value(|jobs| count_by_status(jobs, status));
    let count_fit = move |fit| all.with_value(|jobs| count_by_fit(jobs, fit));

    let visible = move || {
        let filter = filter.get();
        all.with_value(|jobs| filter.apply(jobs).into_iter().cloned().collect::<Vec<_>>())
    };

    let fit_button = move |fit: Option<FitScore>| {
        let label = match fit {
            Some(fit) => format!("{} ({})", fit.label(), count_fit(fit)),
            None => format!("All Jobs ({total})"),
        };
        view! {
            <button
                class="btn btn--filter"
                class:btn--active=move || filter.with(|f| f.fit == fit)
                on:click=move |_| filter.update(|f| f.fit = fit)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="jobs-page">
            <header class="page-header">
                <h1>"Job Tracker"</h1>
                <p>"Track applications and discover roles that fit"</p>
            </header>
            <div class="jobs-page__stats">
                <StatCard title="Total Jobs" value=total.to_string()/>
                <StatCard title="Applied" value=count_status(JobStatus::Applied).to_string()/>
                <StatCard title="Interviews" value=count_status(JobStatus::Interview).to_string()/>
                <StatCard title="Offers" value=count_status(JobStatus::Offer).to_string()/>
                <StatCard title="Great Fit" value=count_fit(FitScore::Green).to_string()/>
            </div>
            <div class="jobs-page__controls">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search jobs, companies, locations..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    class="select"
                    prop:value=move || filter.with(|f| f.status.map_or("all", JobStatus::key))
                    on:change=move |ev| filter.update(|f| f.status = JobStatus::from_key(&event_target_value(&ev)))
                >
                    <option value="all">"All Statuses"</option>
                    {JobStatus::ALL
                        .iter()
                        .map(|status| {
                            view! {
                                <option value=status.key()>
                                    {format!("{} ({})", status.label(), count_status(*status))}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="jobs-page__fit-filters">
                {fit_button(None)}
                {FitScore::ALL.iter().map(|fit| fit_button(Some(*fit))).collect::<Vec<_>>()}
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <h3>"No jobs found"</h3>
                            <p>"Try adjusting your search criteria or filters"</p>
                            <button class="btn" on:click=move |_| filter.update(JobFilter::clear)>
                                "Clear Filters"
                            </button>
                        </div>
                    }
                }
            >
                <div class="jobs-page__grid">
                    <For each=visible key=|job| job.id.clone() let:job>
                        <JobCard job=job/>
                    </For>
                </div>
            </Show>
        </div>
    }
}
