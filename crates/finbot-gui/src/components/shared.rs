use dioxus::prelude::*;
use finbot_sdk::{ChatMessage, MessageStatus};

/// One chat turn, aligned by sender and styled by delivery status.
#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let (row_class, mut bubble_class) = if message.is_from_user() {
        ("bubble-row bubble-row-user", "bubble bubble-user".to_string())
    } else {
        ("bubble-row bubble-row-bot", "bubble bubble-bot".to_string())
    };
    match message.status {
        MessageStatus::Sending => bubble_class.push_str(" bubble-sending"),
        MessageStatus::Error => bubble_class.push_str(" bubble-error"),
        MessageStatus::Sent => {}
    }
    let time_str = message.timestamp.format("%H:%M").to_string();

    rsx! {
        div { class: "{row_class}",
            div { class: "{bubble_class}",
                div { class: "bubble-text", "{message.content}" }
                div { class: "bubble-meta",
                    span { class: "bubble-time", "{time_str}" }
                    if message.status == MessageStatus::Sending {
                        span { class: "bubble-status", "Sending..." }
                    }
                }
            }
        }
    }
}

/// Placeholder shown while the assistant is answering.
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "bubble-row bubble-row-bot",
            div { class: "bubble bubble-bot bubble-typing",
                div { class: "typing-bar" }
            }
        }
    }
}

/// Inline destructive alert.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { class: "alert-icon", "⚠" }
            div {
                div { class: "alert-title", "Error" }
                div { class: "alert-body", "{message}" }
            }
        }
    }
}
