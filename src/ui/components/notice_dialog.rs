use dioxus::prelude::*;

/// Modal notice that blocks the board until acknowledged.
#[component]
pub fn NoticeDialog(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            div {
                class: "dialog",
                role: "alertdialog",
                p { class: "dialog__text", "{message}" }
                div {
                    class: "dialog__actions",
                    button {
                        class: "btn btn--release",
                        autofocus: true,
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
