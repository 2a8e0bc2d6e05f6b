use dioxus::prelude::*;

use crate::domain::{BulkAction, FilterCategory, SelectedFilters};
use crate::ui::theme;

const FILTER_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" width="20" height="20"><path fill-rule="evenodd" d="M2.628 1.601C5.028 1.206 7.49 1 10 1s4.973.206 7.372.601a.75.75 0 01.628.74v2.288a2.25 2.25 0 01-.659 1.59l-4.682 4.683a2.25 2.25 0 00-.659 1.59v3.037c0 .684-.31 1.33-.844 1.757l-1.937 1.55A.75.75 0 018 18.25v-5.757a2.25 2.25 0 00-.659-1.591L2.659 6.22A2.25 2.25 0 012 4.629V2.34a.75.75 0 01.628-.74z" clip-rule="evenodd"/></svg>"#;

/// Search box, filter menu and the manual suspend/release button.
#[component]
pub fn FilterBar(
    search: String,
    filters: SelectedFilters,
    bulk_action: Option<BulkAction>,
    on_search: EventHandler<String>,
    on_toggle_filter: EventHandler<(&'static str, &'static str)>,
    on_clear_filters: EventHandler<()>,
    on_bulk_action: EventHandler<BulkAction>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let filter_on = filters.is_active();

    rsx! {
        div {
            class: "filter-bar",
            div {
                class: "filter-bar__left",
                input {
                    r#type: "search",
                    class: "search-input",
                    value: "{search}",
                    placeholder: "Search by player name or team",
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
                div {
                    class: "filter-menu",
                    button {
                        class: "filter-menu__toggle",
                        title: "Filters",
                        onclick: move |_| menu_open.toggle(),
                        if filter_on {
                            span { class: "filter-menu__indicator" }
                        }
                        span { dangerous_inner_html: FILTER_ICON_SVG }
                    }
                    if menu_open() {
                        ul {
                            class: "filter-menu__panel",
                            for category in FilterCategory::ALL {
                                FilterGroup {
                                    key: "{category.key()}",
                                    category,
                                    filters: filters.clone(),
                                    on_toggle: on_toggle_filter.clone(),
                                }
                            }
                            if filter_on {
                                li {
                                    a {
                                        class: "filter-menu__clear",
                                        onclick: move |_| on_clear_filters.call(()),
                                        "Clear Filter"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                if let Some(action) = bulk_action {
                    button {
                        class: theme::bulk_button(action),
                        onclick: move |_| on_bulk_action.call(action),
                        "{action.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn FilterGroup(
    category: FilterCategory,
    filters: SelectedFilters,
    on_toggle: EventHandler<(&'static str, &'static str)>,
) -> Element {
    rsx! {
        li { class: "filter-menu__title", "Filter By {category.label()}:" }
        for option in category.options().iter().copied() {
            li {
                key: "{option}",
                a {
                    class: theme::filter_option(filters.is_selected(category, option)),
                    onclick: move |_| on_toggle.call((category.key(), option)),
                    "{option}"
                }
            }
        }
    }
}
