use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { class: "navbar-brand", to: Route::Landing {}, "Finbot" }
                ul { class: "navbar-links",
                    li { "Contact" }
                }
            }
        }
    }
}
