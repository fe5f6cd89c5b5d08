//! Seeker home: progress stats, recent activity and notifications.

use leptos::prelude::*;
use time::OffsetDateTime;

use super::use_identity;
use crate::components::stat_card::StatCard;
use crate::data::records::{activity, dashboard_stats, notifications};
use crate::util::format::{group_thousands, relative_time};

const RECENT_LIMIT: usize = 5;

struct QuickAction {
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { title: "Add Example", description: "Capture a work accomplishment", href: "/chat" },
    QuickAction { title: "Find Jobs", description: "Search new opportunities", href: "/jobs" },
    QuickAction { title: "Chat with AI", description: "Get career guidance", href: "/chat" },
    QuickAction { title: "Create Document", description: "Generate tailored resume", href: "/documents" },
];

#[component]
pub fn SeekerDashboard() -> impl IntoView {
    let identity = use_identity();
    let stats = dashboard_stats();
    let now = OffsetDateTime::now_utc();

    let recent = activity()
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|item| {
            view! {
                <li class="activity">
                    <p class="activity__title">{item.title}</p>
                    <p class="activity__description">{item.description}</p>
                    <span class="activity__time">{relative_time(item.timestamp, now)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let alerts = notifications();
    let unread = alerts.iter().filter(|n| !n.read).count();
    let alerts = alerts
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|n| {
            view! {
                <li class="notification" class:notification--unread=!n.read>
                    <a href=n.action_url.unwrap_or_else(|| "/dashboard".to_owned())>
                        <p class="notification__title">{n.title}</p>
                        <p class="notification__message">{n.message}</p>
                    </a>
                    <span class="notification__time">{relative_time(n.created_at, now)}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{move || format!("Welcome back, {}!", identity.get().map(|i| i.name().to_owned()).unwrap_or_default())}</h1>
                    <p>"Ready to advance your career today?"</p>
                </div>
                <div class="dashboard-page__badges">
                    <span>{stats.level} " Level"</span>
                    <span>{stats.current_streak} " Day Streak"</span>
                    <span>{group_thousands(stats.total_points)} " Points"</span>
                </div>
            </header>
            <div class="dashboard-page__stats">
                <StatCard title="Profile Level" value=stats.level.to_string() detail="+2 this week"/>
                <StatCard title="Current Streak" value=format!("{} days", stats.current_streak) detail="Keep it up!"/>
                <StatCard title="Total Points" value=group_thousands(stats.total_points) detail="+150 this week"/>
                <StatCard title="Profile Complete" value=format!("{}%", stats.profile_completion) tone="stat-card--warning"/>
            </div>
            <Show when=move || { stats.profile_completion < 100 }>
                <div class="card dashboard-page__nudge">
                    <h3>"Complete Your Profile"</h3>
                    <progress max="100" value=stats.profile_completion.to_string()></progress>
                    <a class="btn" href="/profile">"Finish Profile"</a>
                </div>
            </Show>
            <section class="dashboard-page__quick">
                <h2>"Quick Actions"</h2>
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <a class="card quick-action" href=action.href>
                                <h4>{action.title}</h4>
                                <p>{action.description}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
            <div class="dashboard-page__columns">
                <section class="card">
                    <h2>"Recent Activity"</h2>
                    <p class="muted">"Your latest actions and achievements"</p>
                    <ul>{recent}</ul>
                </section>
                <section class="card">
                    <h2>"Notifications " <span class="badge">{unread}</span></h2>
                    <p class="muted">"Important updates and reminders"</p>
                    <ul>{alerts}</ul>
                </section>
            </div>
        </div>
    }
}
