use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{filter_markets, BoardState, BulkAction},
    ui::components::{
        filter_bar::FilterBar,
        market_table::{MarketRow, MarketTable},
    },
};

pub const UPDATE_NOTICE: &str = "Successfully updated markets!";

#[component]
pub fn BoardPage() -> Element {
    let state = use_context::<Signal<BoardState>>();
    let notice = use_context::<Signal<Option<String>>>();

    let (rows, selected, filters, search, bulk_action, summary, load_error) = state.with(|st| {
        let rows = filter_markets(&st.markets, &st.search, &st.filters)
            .into_iter()
            .map(|(idx, market)| MarketRow::new(idx, market))
            .collect::<Vec<_>>();
        (
            rows,
            st.selection.rows().to_vec(),
            st.filters.clone(),
            st.search.clone(),
            st.bulk_action(),
            st.summary(),
            st.load_error.clone(),
        )
    });

    let empty_message = match load_error {
        Some(err) => format!("Market data could not be loaded: {err}"),
        None if summary.total == 0 => "No markets in the feed.".to_string(),
        None => "No markets match the current search and filters.".to_string(),
    };

    let on_search = {
        let mut state = state.clone();
        move |value: String| state.with_mut(|st| st.set_search(value))
    };

    let on_toggle_filter = {
        let mut state = state.clone();
        move |(key, option): (&'static str, &'static str)| {
            state.with_mut(|st| {
                st.toggle_filter(key, option);
            })
        }
    };

    let on_clear_filters = {
        let mut state = state.clone();
        move |_: ()| state.with_mut(|st| st.clear_filters())
    };

    let on_toggle = {
        let mut state = state.clone();
        move |row: usize| state.with_mut(|st| st.toggle_row(row))
    };

    let on_bulk_action = {
        let mut state = state.clone();
        let mut notice = notice.clone();
        move |action: BulkAction| {
            let updated = state.with_mut(|st| st.apply_bulk_action(action));
            info!(updated, action = action.label(), "manual update confirmed to user");
            notice.set(Some(UPDATE_NOTICE.to_string()));
        }
    };

    rsx! {
        FilterBar {
            search,
            filters,
            bulk_action,
            on_search,
            on_toggle_filter,
            on_clear_filters,
            on_bulk_action,
        }
        p {
            class: "board-summary",
            {format!(
                "Showing {} of {} markets · {} suspended · {} selected",
                summary.visible, summary.total, summary.suspended, summary.selected
            )}
        }
        MarketTable {
            rows,
            selected,
            empty_message,
            on_toggle,
        }
    }
}
