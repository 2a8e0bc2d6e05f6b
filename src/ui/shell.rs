use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        main { class: "board-shell",
            header {
                h1 { class: "board-title",
                    "{APP_NAME}"
                    span { class: "board-version", "{version_label()}" }
                }
            }
            {children}
        }
    }
}
