use dioxus::prelude::*;
use finbot_sdk::StockInfo;

use crate::routes::Route;

/// Company snapshot plus the "chat with me" action.
///
/// The action stays disabled unless `chat_symbol` carries the symbol of a
/// successful lookup.
#[component]
pub fn StockPanel(info: StockInfo, chat_symbol: Option<String>) -> Element {
    let price = info.price_display();
    let market_cap = info.market_cap_display();
    let address = info.address_line();
    let employees = info.employees_display();
    let chart = info.chart().map(String::from);
    let chat_disabled = chat_symbol.is_none();

    rsx! {
        div { class: "stock-panel",
            h3 { class: "stock-name", "{info.name}" }
            if let Some(url) = chart {
                img { class: "stock-chart", src: "{url}", alt: "Stock Chart" }
            }
            div { class: "stock-grid",
                ul {
                    li { "Symbol: " span { class: "value", "{info.symbol}" } }
                    li { "Current Price: " span { class: "value", "{price}" } }
                    li { "Market Cap: " span { class: "value", "{market_cap}" } }
                    li { "Sector: " span { class: "value", "{info.sector}" } }
                    li { "Industry: " span { class: "value", "{info.industry}" } }
                }
                ul {
                    li {
                        "Website: "
                        a { href: "{info.website}", target: "_blank", rel: "noopener noreferrer", "{info.website}" }
                    }
                    li { "Country: " span { class: "value", "{info.country}" } }
                    li { "Phone: " span { class: "value", "{info.phone}" } }
                    li { "Address: " span { class: "value", "{address}" } }
                    li { "Full Time Employees: " span { class: "value", "{employees}" } }
                }
            }
            div { class: "stock-description",
                h4 { "Description" }
                p { "{info.description}" }
            }
            button {
                class: "btn btn-chat",
                disabled: chat_disabled,
                onclick: move |_| {
                    if let Some(symbol) = chat_symbol.clone() {
                        navigator().push(Route::Chat { symbol });
                    }
                },
                "Is there follow up questions? Chat with me!"
            }
        }
    }
}
