use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    rsx! {
        footer { class: "footer",
            p { "© {year} Finbot. All rights reserved." }
        }
    }
}
