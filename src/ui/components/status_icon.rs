use dioxus::prelude::*;

use crate::ui::theme;

const AVAILABLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" width="20" height="20"><path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.857-9.809a.75.75 0 00-1.214-.882l-3.483 4.79-1.88-1.88a.75.75 0 10-1.06 1.061l2.5 2.5a.75.75 0 001.137-.089l4-5.5z" clip-rule="evenodd"/></svg>"#;
const SUSPENDED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" width="20" height="20"><path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zM8.28 7.22a.75.75 0 00-1.06 1.06L8.94 10l-1.72 1.72a.75.75 0 101.06 1.06L10 11.06l1.72 1.72a.75.75 0 101.06-1.06L11.06 10l1.72-1.72a.75.75 0 00-1.06-1.06L10 8.94 8.28 7.22z" clip-rule="evenodd"/></svg>"#;

/// Check mark for an open market, cross for a suspended one.
#[component]
pub fn StatusIcon(suspended: bool) -> Element {
    let (svg, title) = if suspended {
        (SUSPENDED_SVG, "Suspended")
    } else {
        (AVAILABLE_SVG, "Available")
    };

    rsx! {
        span {
            class: theme::status_icon(suspended),
            title: title,
            dangerous_inner_html: svg,
        }
    }
}
