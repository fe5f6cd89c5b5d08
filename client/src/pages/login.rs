//! Demo login page: credential form plus one-click demo accounts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::data::users::{DEMO_PASSWORD, authenticate, demo_identity};
use crate::state::identity::{Identity, Role};
use crate::state::session::SessionStore;
use crate::util::auth::sign_in;
use crate::util::delay::after_delay;

/// Simulated round trip for the credential form.
const FORM_DELAY_MS: u32 = 1000;
/// Simulated round trip for a demo-card login.
const DEMO_DELAY_MS: u32 = 1500;

const MISSING_FIELDS: &str = "Please fill in all fields";
const INVALID_CREDENTIALS: &str = "Invalid credentials. Try demo accounts: applicant@demo.com or coach@demo.com";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn check_credentials(email: &str, password: &str) -> Result<Identity, &'static str> {
    authenticate(email, password).ok_or(INVALID_CREDENTIALS)
}

/// Role preselected by a `?demo=applicant|coach` link.
fn demo_choice(param: Option<&str>) -> Option<Role> {
    match param? {
        "applicant" => Some(Role::Seeker),
        "coach" => Some(Role::Coach),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let active_demo = RwSignal::new(None::<Role>);

    let choose_demo = move |role: Role| {
        active_demo.set(Some(role));
        email.set(demo_identity(role).email().to_owned());
        password.set(DEMO_PASSWORD.to_owned());
        error.set(String::new());
    };

    Effect::new(move || {
        if let Some(role) = demo_choice(query.read().get("demo").as_deref()) {
            choose_demo(role);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        // The gate forwards a signed-in user away from this page.
        after_delay(FORM_DELAY_MS, move || {
            match check_credentials(&email_value, &password_value) {
                Ok(identity) => sign_in(session, identity),
                Err(message) => error.set(message.to_owned()),
            }
            busy.set(false);
        });
    };

    let on_demo_continue = move |_| {
        let Some(role) = active_demo.get() else {
            return;
        };
        busy.set(true);
        error.set(String::new());
        after_delay(DEMO_DELAY_MS, move || {
            sign_in(session, demo_identity(role));
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <section class="login-page__brand">
                <h1>"Welcome to " <span class="login-page__accent">"CareerSU"</span></h1>
                <p>"AI-powered job applications that get you hired faster"</p>
                <Show
                    when=move || active_demo.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="login-page__demos">
                                <h3>"Try Our Demo"</h3>
                                <button class="card demo-card" on:click=move |_| choose_demo(Role::Seeker)>
                                    <h4>"Job Seeker"</h4>
                                    <p>"Track jobs, build your story bank, chat with the AI coach."</p>
                                </button>
                                <button class="card demo-card" on:click=move |_| choose_demo(Role::Coach)>
                                    <h4>"Career Coach"</h4>
                                    <p>"Manage clients, review documents, track progress."</p>
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="card login-page__active-demo">
                        <h3>{move || active_demo.get().map(|r| format!("{} Demo", r.label())).unwrap_or_default()}</h3>
                        <button class="btn" on:click=on_demo_continue disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Continue to Dashboard" }}
                        </button>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                active_demo.set(None);
                                email.set(String::new());
                                password.set(String::new());
                            }
                        >
                            "Choose Different Demo"
                        </button>
                    </div>
                </Show>
            </section>
            <section class="card login-card">
                <h2>"Sign In"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <p class="login-card__hint">"Demo accounts use the password " <code>{DEMO_PASSWORD}</code></p>
            </section>
        </div>
    }
}
