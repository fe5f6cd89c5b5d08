//! Seeker AI-coach chat.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::data::records::conversation;
use crate::data::types::Speaker;
use crate::state::chat::{ChatState, EXAMPLE_PROMPTS, REPLY_DELAY_MS, random_seed};
use crate::util::delay::after_delay;
use crate::util::format::relative_time;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(conversation()));
    let input = RwSignal::new(String::new());

    let send = move || {
        let text = input.get_untracked();
        let mut accepted = false;
        chat.update(|state| accepted = state.send(&text, OffsetDateTime::now_utc()).is_some());
        if !accepted {
            return;
        }
        input.set(String::new());
        after_delay(REPLY_DELAY_MS, move || {
            chat.update(|state| state.reply(random_seed(), OffsetDateTime::now_utc()));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="chat-page">
            <header class="page-header">
                <h1>"AI Career Coach"</h1>
                <p>"Let me help you capture your work accomplishments in STAR format"</p>
            </header>
            <div class="chat-page__messages">
                <For each=move || chat.get().messages key=|message| message.id.clone() let:message>
                    <div
                        class="chat-message"
                        class:chat-message--user={message.speaker == Speaker::User}
                        class:chat-message--assistant={message.speaker == Speaker::Assistant}
                    >
                        <p>{message.content.clone()}</p>
                        <span class="chat-message__time">
                            {relative_time(message.timestamp, OffsetDateTime::now_utc())}
                        </span>
                    </div>
                </For>
            </div>
            <Show when=move || input.get().is_empty()>
                <div class="chat-page__prompts">
                    {EXAMPLE_PROMPTS
                        .iter()
                        .map(|prompt| {
                            view! {
                                <button class="btn btn--ghost" on:click=move |_| input.set((*prompt).to_owned())>
                                    {*prompt}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
            <div class="chat-page__composer">
                <textarea
                    class="chat-input"
                    placeholder="Describe an accomplishment..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn" on:click=move |_| send() disabled=move || input.get().trim().is_empty()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
