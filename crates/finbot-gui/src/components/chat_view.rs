//! Chat view for one symbol.
//!
//! Owns a [`ChatSession`] for as long as it is mounted: the session is
//! initialized on mount and released on unmount or "Back", whichever comes
//! first. The network calls run in spawned tasks between the session's
//! `begin_*` and `finish_*` steps so that no signal borrow is held across
//! an await.

use std::rc::Rc;

use dioxus::prelude::*;
use finbot_sdk::session::release;
use finbot_sdk::{ChatMessage, ChatSession, FinbotClient};
use tracing::{debug, warn};

use crate::components::shared::{MessageBubble, TypingIndicator};
use crate::routes::Route;

#[component]
pub fn ChatView(symbol: String) -> Element {
    let client = use_context::<FinbotClient>();
    let mut session = use_signal(|| {
        let symbol = symbol.trim();
        ChatSession::new((!symbol.is_empty()).then(|| symbol.to_string()))
    });
    let mut list_end: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut input_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Initialize once per mount.
    let init_client = client.clone();
    use_hook(move || {
        let Ok(ticket) = session.write().begin_init() else {
            return;
        };
        let client = init_client.clone();
        spawn(async move {
            if let Some(previous) = &ticket.superseded {
                release(&client, previous).await;
            }
            let result = client.get_ticker_data(&ticket.session_id, &ticket.symbol).await;
            session.write().finish_init(&ticket, result);
        });
    });

    // Release on unmount unless "Back" already did. The cleanup must outlive
    // this scope, hence spawn_forever.
    let drop_client = client.clone();
    use_drop(move || {
        let Ok(mut state) = session.try_write() else {
            warn!("chat session state unavailable on unmount; session not released");
            return;
        };
        if let Some(session_id) = state.take_teardown() {
            let client = drop_client.clone();
            spawn_forever(async move {
                release(&client, &session_id).await;
            });
        }
    });

    let message_count = use_memo(move || session.read().transcript().len());
    let waiting = use_memo(move || session.read().is_waiting());
    let ready = use_memo(move || session.read().accepts_input());

    // Keep the newest message in view.
    use_effect(move || {
        let _ = (message_count(), waiting());
        if let Some(el) = list_end() {
            spawn(async move {
                let _ = el.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    // Focus the input whenever it becomes usable.
    use_effect(move || {
        if !ready() {
            return;
        }
        if let Some(el) = input_el() {
            spawn(async move {
                let _ = el.set_focus(true).await;
            });
        }
    });

    let send_client = client.clone();
    let mut dispatch_send = move || {
        let Some(pending) = session.write().begin_send() else {
            return;
        };
        let client = send_client.clone();
        spawn(async move {
            let result = client.chat(&pending.session_id, &pending.text).await;
            session.write().finish_send(&pending, result);
        });
    };

    let back_client = client.clone();
    let on_back = move |_: MouseEvent| {
        if let Some(session_id) = session.write().take_teardown() {
            debug!(%session_id, "leaving chat view");
            let client = back_client.clone();
            spawn_forever(async move {
                release(&client, &session_id).await;
            });
        }
        navigator().push(Route::Landing {});
    };

    let state = session.read();
    let title_symbol = state.symbol().unwrap_or_default().to_string();
    let initializing = state.is_initializing();
    let messages: Vec<ChatMessage> = state.transcript().messages().to_vec();
    let input = state.input().to_string();
    let accepts_input = state.accepts_input();
    let can_submit = state.can_submit();
    let is_waiting = state.is_waiting();
    drop(state);

    rsx! {
        div { class: "chat",
            div { class: "chat-header",
                button { class: "btn btn-ghost", onclick: on_back, "← Back" }
                div {
                    h2 { class: "chat-title", "Stock Analysis - {title_symbol}" }
                    if initializing {
                        span { class: "chat-subtitle", "Initializing chat..." }
                    }
                }
            }

            div { class: "chat-messages",
                for message in messages {
                    MessageBubble { key: "{message.id}", message }
                }
                if is_waiting {
                    TypingIndicator {}
                }
                div {
                    class: "chat-end",
                    onmounted: move |evt| list_end.set(Some(evt.data())),
                }
            }

            form {
                class: "chat-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch_send();
                },
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{input}",
                    disabled: !accepts_input,
                    oninput: move |evt: FormEvent| session.write().set_input(&evt.value()),
                    onmounted: move |evt| input_el.set(Some(evt.data())),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Send"
                }
            }
        }
    }
}
