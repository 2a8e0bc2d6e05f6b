use tracing::{debug, info};

use super::{
    entities::{Alternate, Market, Prop},
    filter::{filtered_indices, SelectedFilters},
    market::derive_markets,
    selection::{BulkAction, Selection},
};

/// Session state behind the board. Nothing here outlives the running app.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub markets: Vec<Market>,
    pub search: String,
    pub filters: SelectedFilters,
    pub selection: Selection,
    /// Set when the feed could not be loaded; the board stays empty.
    pub load_error: Option<String>,
}

/// Row counts shown above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardSummary {
    pub total: usize,
    pub visible: usize,
    pub suspended: usize,
    pub selected: usize,
}

impl BoardState {
    pub fn new(props: &[Prop], alternates: &[Alternate]) -> Self {
        let markets = derive_markets(props, alternates);
        info!(
            markets = markets.len(),
            alternates = alternates.len(),
            suspended = markets.iter().filter(|m| m.suspended).count(),
            "derived markets"
        );
        Self {
            markets,
            ..Self::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            load_error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Toggles an option in the menu named by `key`. Unknown menus are ignored.
    pub fn toggle_filter(&mut self, key: &str, option: &str) -> bool {
        let known = self.filters.toggle_by_key(key, option);
        if known {
            debug!(key, option, "toggled filter");
        } else {
            debug!(key, option, "ignored unknown filter menu");
        }
        known
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        debug!("cleared filters");
    }

    /// Positions of the markets currently shown, in list order.
    pub fn visible_rows(&self) -> Vec<usize> {
        filtered_indices(&self.markets, &self.search, &self.filters)
    }

    /// Checks or unchecks a row. Only rows in the current view can be checked;
    /// a selected row can always be unchecked.
    pub fn toggle_row(&mut self, row: usize) {
        if !self.selection.is_selected(row) && !self.visible_rows().contains(&row) {
            debug!(row, "ignored check on hidden row");
            return;
        }
        self.selection.toggle(row);
    }

    pub fn bulk_action(&self) -> Option<BulkAction> {
        BulkAction::available_for(&self.markets, &self.selection)
    }

    pub fn apply_bulk_action(&mut self, action: BulkAction) -> usize {
        let updated = self.selection.apply(action, &mut self.markets);
        info!(action = action.label(), updated, "applied manual market update");
        updated
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            total: self.markets.len(),
            visible: self.visible_rows().len(),
            suspended: self.markets.iter().filter(|m| m.suspended).count(),
            selected: self.selection.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::unique_key;
    use crate::domain::filter::{FilterCategory, STATUS_SUSPENDED};
    use crate::domain::test_support::{market, prop};

    fn state() -> BoardState {
        BoardState {
            markets: vec![
                market("LeBron James", "Lakers", "SF", "points", false),
                market("Anthony Davis", "Lakers", "PF", "rebounds", true),
                market("Stephen Curry", "Warriors", "PG", "points", false),
            ],
            ..BoardState::default()
        }
    }

    #[test]
    fn test_new_derives_one_market_per_prop() {
        let props = vec![prop("LeBron James", "Lakers", "SF", "points")];
        let state = BoardState::new(&props, &[]);

        assert_eq!(state.markets.len(), 1);
        assert!(state.markets[0].suspended);
        assert!(state.load_error.is_none());
        assert_eq!(state.visible_rows(), vec![0]);
    }

    #[test]
    fn test_hidden_rows_cannot_be_checked() {
        let mut state = state();
        state.set_search("warriors");

        state.toggle_row(0);
        state.toggle_row(2);

        assert_eq!(state.selection.rows(), &[2]);
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut state = state();
        state.toggle_row(0);
        assert!(state.toggle_filter(FilterCategory::MarketStatus.key(), STATUS_SUSPENDED));

        assert_eq!(state.visible_rows(), vec![1]);
        assert!(state.selection.is_selected(0));

        state.toggle_row(0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_bulk_suspend_flow() {
        let mut state = state();
        state.toggle_row(0);
        state.toggle_row(2);
        assert_eq!(state.bulk_action(), Some(BulkAction::Suspend));

        let updated = state.apply_bulk_action(BulkAction::Suspend);

        assert_eq!(updated, 2);
        assert_eq!(
            state.summary(),
            BoardSummary {
                total: 3,
                visible: 3,
                suspended: 3,
                selected: 0,
            }
        );
        assert_eq!(state.bulk_action(), None);
    }

    #[test]
    fn test_unknown_filter_menu_is_ignored() {
        let mut state = state();
        assert!(!state.toggle_filter("team", "Lakers"));
        assert!(!state.filters.is_active());
        assert_eq!(state.visible_rows(), vec![0, 1, 2]);
    }

    #[test]
    fn test_colliding_keys_keep_rows_independent() {
        let mut first = prop("Player One", "Lakers", "PG", "points");
        first.player_id = 1;
        first.stat_type_id = 72;
        let mut second = prop("Player Seventeen", "Celtics", "C", "points");
        second.player_id = 17;
        second.stat_type_id = 2;
        assert_eq!(first.unique_key(), second.unique_key());

        let alternates = vec![Alternate {
            player_name: "Player One".to_string(),
            player_id: 1,
            stat_type: "points".to_string(),
            stat_type_id: 72,
            line: first.line,
            under_odds: 0.5,
            over_odds: 0.45,
            push_odds: 0.05,
        }];
        let mut state = BoardState::new(&[first, second], &alternates);
        assert_eq!(state.markets[0].unique_key, unique_key(1, 72));
        assert!(state.markets.iter().all(|m| !m.suspended));

        state.toggle_row(1);
        assert!(!state.selection.is_selected(0));
        state.apply_bulk_action(BulkAction::Suspend);

        assert!(!state.markets[0].suspended);
        assert!(state.markets[1].suspended);
    }

    #[test]
    fn test_failed_state_is_empty() {
        let state = BoardState::failed("props.json: missing");
        assert!(state.markets.is_empty());
        assert_eq!(state.load_error.as_deref(), Some("props.json: missing"));
        assert_eq!(state.summary(), BoardSummary::default());
    }
}
