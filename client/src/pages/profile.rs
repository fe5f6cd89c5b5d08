//! Profile view for the signed-in user of either role.

use leptos::prelude::*;

use super::use_identity;
use crate::state::identity::{Identity, WorkPreferences};
use crate::state::profile::{completion_percent, profile_sections};
use crate::util::format::{initials, long_date};

fn preference_labels(prefs: WorkPreferences) -> Vec<&'static str> {
    [
        (prefs.remote, "Remote"),
        (prefs.hybrid, "Hybrid"),
        (prefs.on_site, "On-site"),
        (prefs.willing_to_relocate, "Open to relocation"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect()
}

fn render_profile(identity: &Identity) -> impl IntoView + use<> {
    let profile = identity.profile.clone();
    let completion = completion_percent(identity);
    let sections = profile_sections(identity)
        .into_iter()
        .map(|(label, done)| view! { <li class:done=done>{label}</li> })
        .collect::<Vec<_>>();
    let row = |label: &'static str, value: Option<String>| {
        view! {
            <dt>{label}</dt>
            <dd>{value.unwrap_or_else(|| "Not provided".to_owned())}</dd>
        }
    };
    let interests = profile
        .interests
        .iter()
        .map(|interest| view! { <span class="badge badge--outline">{interest.clone()}</span> })
        .collect::<Vec<_>>();
    let preferences = profile.work_preferences.map(|prefs| {
        view! {
            <section class="card">
                <h2>"Preferences"</h2>
                <p>{preference_labels(prefs).join(" · ")}</p>
            </section>
        }
    });

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <span class="avatar avatar--large">{initials(identity.name())}</span>
                <div>
                    <h1>{identity.name().to_owned()}</h1>
                    <p class="muted">{identity.role().label()}</p>
                    {profile.member_since.map(|d| view! { <p class="muted">"Member since " {long_date(d)}</p> })}
                </div>
            </header>
            <section class="card">
                <h2>"Profile Completion"</h2>
                <p>"Complete your profile to get better job matches"</p>
                <progress max="100" value=completion.to_string()></progress>
                <span>{completion} "% Complete"</span>
                <ul class="checklist">{sections}</ul>
            </section>
            <section class="card">
                <h2>"Basic Info"</h2>
                <dl>
                    {row("Full Name", Some(identity.name().to_owned()))}
                    {row("Email", Some(identity.email().to_owned()))}
                    {row("Phone", profile.phone.clone())}
                    {row("Location", profile.location.clone())}
                </dl>
            </section>
            <section class="card">
                <h2>"Professional"</h2>
                <dl>
                    {row("Professional Summary", profile.bio.clone())}
                    {row("Career Goal", profile.goal.clone())}
                    {row("Career Objectives", profile.career_objectives.clone())}
                </dl>
            </section>
            {preferences}
            <section class="card">
                <h2>"Interests"</h2>
                <div class="badges">{interests}</div>
            </section>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let identity = use_identity();
    move || identity.get().map(|identity| render_profile(&identity))
}
