//! The two screens and the paths they live at.

use dioxus::prelude::*;

use crate::components::chat_view::ChatView;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::tickers::Tickers;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    // a missing `symbol` decodes to ""
    #[route("/chat?:symbol")]
    Chat { symbol: String },
}

#[component]
fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            Navbar {}
            Tickers {}
            Footer {}
        }
    }
}

/// Keyed by symbol so that switching symbols unmounts the old session.
#[component]
fn Chat(symbol: String) -> Element {
    rsx! {
        ChatView { key: "{symbol}", symbol: symbol.clone() }
    }
}
