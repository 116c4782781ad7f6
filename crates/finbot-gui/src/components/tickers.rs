use dioxus::prelude::*;
use finbot_sdk::{FinbotClient, TickerLookup};

use crate::components::shared::ErrorAlert;
use crate::components::stock_panel::StockPanel;

/// Landing body: ticker input, lookup result and error alert.
#[component]
pub fn Tickers() -> Element {
    let client = use_context::<FinbotClient>();
    let mut lookup = use_signal(TickerLookup::new);

    let state = lookup.read();
    let ticker = state.ticker().to_string();
    let busy = state.is_busy();
    let error = state.error().map(String::from);
    let info = state.stock_info().cloned();
    let chat_symbol = state.chat_symbol().map(String::from);
    drop(state);

    rsx! {
        div { class: "tickers",
            h2 { class: "tickers-title", "Welcome to Finbot" }
            p { class: "tickers-lede",
                "Get real-time insights and analysis on your favorite stocks. Simply enter the ticker symbol below."
            }
            form {
                class: "tickers-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let Some(ticker) = lookup.write().begin_analyze() else {
                        return;
                    };
                    let client = client.clone();
                    spawn(async move {
                        let result = client.ticker(&ticker).await;
                        lookup.write().finish_analyze(result);
                    });
                },
                input {
                    class: "text-input",
                    r#type: "text",
                    placeholder: "Enter stock ticker",
                    value: "{ticker}",
                    oninput: move |evt: FormEvent| lookup.write().set_ticker(&evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Analyzing..." } else { "Analyze" }
                }
            }

            if let Some(message) = error {
                ErrorAlert { message }
            }

            if let Some(info) = info {
                StockPanel { info, chat_symbol }
            }
        }
    }
}
