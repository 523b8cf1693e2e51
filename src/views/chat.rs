use dioxus::events::Key;
use dioxus::prelude::*;

use crate::api;
use crate::session::SessionState;
use crate::types::Sender;

#[derive(Clone, Debug, PartialEq)]
struct Bubble {
    text: String,
    class: &'static str,
    typing: bool,
}

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "bubble user",
        Sender::Bot => "bubble bot",
    }
}

/// Pure projection of the session state into the bubble list: one bubble per
/// message, aligned by sender, plus a transient typing bubble while a request
/// is in flight.
fn transcript(state: &SessionState) -> Vec<Bubble> {
    let mut bubbles: Vec<Bubble> = state
        .history()
        .iter()
        .map(|msg| Bubble {
            text: msg.text.clone(),
            class: bubble_class(msg.sender),
            typing: false,
        })
        .collect();

    if state.is_pending() {
        bubbles.push(Bubble {
            text: "Thinking…".to_string(),
            class: "bubble bot typing",
            typing: true,
        });
    }

    bubbles
}

#[component]
pub fn ChatView() -> Element {
    let mut state = use_signal(SessionState::new);

    let mut submit_draft = move || {
        let Some(pending) = state.with_mut(SessionState::begin_submit) else {
            return;
        };
        spawn(async move {
            let outcome = api::send_chat(&pending.request).await;
            if let Err(err) = &outcome {
                tracing::error!("chat request failed: {err}");
            }
            state.with_mut(|session| session.resolve(pending, outcome));
        });
    };

    let snapshot = state();
    let send_disabled = snapshot.is_pending() || snapshot.input().trim().is_empty();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for bubble in transcript(&snapshot) {
                        div { class: "{bubble.class}",
                            if bubble.typing {
                                span { class: "spinner", aria_hidden: "true" }
                            }
                            "{bubble.text}"
                        }
                    }
                }
            }

            if let Some(error) = snapshot.last_error() {
                div { class: "error-banner", "{error}" }
            }

            div { class: "composer",
                input {
                    class: "composer-input",
                    r#type: "text",
                    placeholder: "Ask the domain assistant…",
                    value: "{snapshot.input()}",
                    oninput: move |ev| state.with_mut(|session| session.set_input(ev.value())),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            submit_draft();
                        }
                    },
                    disabled: snapshot.is_pending(),
                    autofocus: true,
                }
                button {
                    class: "composer-send",
                    r#type: "button",
                    disabled: send_disabled,
                    onclick: move |_| submit_draft(),
                    if snapshot.is_pending() { "Sending…" } else { "Send" }
                }
            }
        }
    }
}
