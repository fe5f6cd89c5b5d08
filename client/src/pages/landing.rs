//! Public marketing page with demo entry points.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    points: [&'static str; 4],
}

const SEEKER_FEATURES: [Feature; 2] = [
    Feature {
        title: "Core Features",
        points: [
            "AI resume and cover letter generation",
            "STAR format example library",
            "Job tracking with AI fit scoring",
            "Chat with AI career assistant",
        ],
    },
    Feature {
        title: "Coach Support",
        points: [
            "Matched with experienced career coach",
            "Real-time feedback on applications",
            "Interview preparation sessions",
            "Progress tracking and goal setting",
        ],
    },
];

const COACH_FEATURES: [Feature; 2] = [
    Feature {
        title: "Client Management",
        points: [
            "Manage multiple client relationships",
            "Track client progress and milestones",
            "Session scheduling and notes",
            "Performance analytics dashboard",
        ],
    },
    Feature {
        title: "Review Tools",
        points: [
            "Review and edit client documents",
            "Provide inline feedback and suggestions",
            "AI-assisted coaching recommendations",
            "Collaborative workspace access",
        ],
    },
];

fn feature_list(features: &'static [Feature]) -> impl IntoView {
    features
        .iter()
        .map(|feature| {
            view! {
                <div class="feature">
                    <h4>{feature.title}</h4>
                    <ul>{feature.points.iter().map(|p| view! { <li>{*p}</li> }).collect::<Vec<_>>()}</ul>
                </div>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <span class="landing-page__brand">"CareerSU"</span>
                <div class="landing-page__actions">
                    <a class="btn btn--ghost" href="/login">"Sign In"</a>
                    <a class="btn" href="/login">"Get Started"</a>
                </div>
            </header>
            <section class="landing-page__hero">
                <h1>"AI-Powered Job Applications"</h1>
                <p>"Tailored applications, a story bank of your best work, and a coach in your corner."</p>
            </section>
            <section class="landing-page__experiences">
                <div class="card landing-page__experience">
                    <h3>"Job Seeker Dashboard"</h3>
                    {feature_list(&SEEKER_FEATURES)}
                    <a class="btn" href="/login?demo=applicant">"Try Seeker Demo"</a>
                </div>
                <div class="card landing-page__experience">
                    <h3>"Career Coach Dashboard"</h3>
                    {feature_list(&COACH_FEATURES)}
                    <a class="btn" href="/login?demo=coach">"Try Coach Demo"</a>
                </div>
            </section>
        </div>
    }
}
