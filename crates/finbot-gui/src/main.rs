//! Finbot GUI: ticker lookup landing page and per-symbol chat.

mod components;
mod routes;

use dioxus::prelude::*;
use finbot_sdk::{ApiConfig, FinbotClient};

use routes::Route;

fn main() {
    let config = ApiConfig::from_env();
    let client = match FinbotClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("finbot-gui: {e}");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new().with_context(client).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        style { {include_str!("style.css")} }
        Router::<Route> {}
    }
}
