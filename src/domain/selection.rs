//! Row selection and the manual suspend/release action.

use super::entities::Market;

/// Manual override applied to every selected market.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkAction {
    Suspend,
    Release,
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Suspend => "Suspend",
            Self::Release => "Release",
        }
    }

    pub fn suspended(&self) -> bool {
        matches!(self, Self::Suspend)
    }

    /// Suspend is offered when every selected market is open, Release when every one is
    /// suspended. A mixed or empty selection offers nothing.
    pub fn available_for(markets: &[Market], selection: &Selection) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        let mut states = selection
            .rows()
            .iter()
            .filter_map(|&row| markets.get(row))
            .map(|market| market.suspended);
        let first = states.next()?;
        if !states.all(|state| state == first) {
            return None;
        }
        Some(if first { Self::Release } else { Self::Suspend })
    }
}

/// Selected rows, by position in the loaded market list, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    rows: Vec<usize>,
}

impl Selection {
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn set_checked(&mut self, row: usize, checked: bool) {
        if checked {
            if !self.is_selected(row) {
                self.rows.push(row);
            }
        } else if let Some(pos) = self.rows.iter().position(|&selected| selected == row) {
            self.rows.remove(pos);
        }
    }

    pub fn toggle(&mut self, row: usize) {
        let checked = !self.is_selected(row);
        self.set_checked(row, checked);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Applies the action to every selected market and empties the selection.
    /// Returns how many markets were updated.
    pub fn apply(&mut self, action: BulkAction, markets: &mut [Market]) -> usize {
        let mut updated = 0;
        for &row in &self.rows {
            if let Some(market) = markets.get_mut(row) {
                market.suspended = action.suspended();
                updated += 1;
            }
        }
        self.clear();
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::market;

    fn board() -> Vec<Market> {
        vec![
            market("LeBron James", "Lakers", "SF", "points", false),
            market("Anthony Davis", "Lakers", "PF", "rebounds", true),
            market("Stephen Curry", "Warriors", "PG", "points", false),
        ]
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = Selection::default();
        selection.toggle(2);
        let before = selection.clone();

        selection.toggle(0);
        assert!(selection.is_selected(0));
        selection.toggle(0);

        assert_eq!(selection, before);
    }

    #[test]
    fn test_set_checked_keeps_pick_order_without_duplicates() {
        let mut selection = Selection::default();
        selection.set_checked(2, true);
        selection.set_checked(0, true);
        selection.set_checked(2, true);
        assert_eq!(selection.rows(), &[2, 0]);

        selection.set_checked(1, false);
        selection.set_checked(2, false);
        assert_eq!(selection.rows(), &[0]);
    }

    #[test]
    fn test_suspend_sets_flag_and_clears_selection() {
        let mut markets = board();
        let mut selection = Selection::default();
        selection.toggle(0);
        selection.toggle(2);

        let updated = selection.apply(BulkAction::Suspend, &mut markets);

        assert_eq!(updated, 2);
        assert!(markets.iter().all(|m| m.suspended));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_release_only_touches_selected_rows() {
        let mut markets = board();
        markets[0].suspended = true;
        let mut selection = Selection::default();
        selection.toggle(1);

        selection.apply(BulkAction::Release, &mut markets);

        assert!(markets[0].suspended);
        assert!(!markets[1].suspended);
        assert!(!markets[2].suspended);
    }

    #[test]
    fn test_available_action_depends_on_uniform_selection() {
        let markets = board();
        let mut selection = Selection::default();
        assert_eq!(BulkAction::available_for(&markets, &selection), None);

        selection.toggle(0);
        selection.toggle(2);
        assert_eq!(BulkAction::available_for(&markets, &selection), Some(BulkAction::Suspend));

        selection.toggle(1);
        assert_eq!(BulkAction::available_for(&markets, &selection), None);

        selection.clear();
        selection.toggle(1);
        assert_eq!(BulkAction::available_for(&markets, &selection), Some(BulkAction::Release));
    }
}
