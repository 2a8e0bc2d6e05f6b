//! Search and category filtering over derived markets.

use std::collections::{BTreeMap, BTreeSet};

use super::entities::Market;

pub const STATUS_SUSPENDED: &str = "suspended";
pub const STATUS_NOT_SUSPENDED: &str = "not suspended";

/// The filter menus offered on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCategory {
    Position,
    StatType,
    MarketStatus,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Position,
        FilterCategory::StatType,
        FilterCategory::MarketStatus,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::StatType => "statType",
            Self::MarketStatus => "marketStatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::StatType => "Stat Type",
            Self::MarketStatus => "Availability",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Position => &["PG", "SG", "SF", "PF", "C"],
            Self::StatType => &["assists", "rebounds", "points", "steals"],
            Self::MarketStatus => &[STATUS_SUSPENDED, STATUS_NOT_SUSPENDED],
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

/// Options picked per category. An empty set leaves that category unrestricted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFilters {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl Default for SelectedFilters {
    fn default() -> Self {
        Self {
            selected: FilterCategory::ALL
                .into_iter()
                .map(|category| (category, BTreeSet::new()))
                .collect(),
        }
    }
}

impl SelectedFilters {
    /// Adds the option if absent, removes it if present.
    pub fn toggle(&mut self, category: FilterCategory, option: &str) {
        let set = self.selected.entry(category).or_default();
        if !set.remove(option) {
            set.insert(option.to_string());
        }
    }

    /// Same as [`Self::toggle`] addressed by menu key; unknown keys are ignored.
    pub fn toggle_by_key(&mut self, key: &str, option: &str) -> bool {
        match FilterCategory::from_key(key) {
            Some(category) => {
                self.toggle(category, option);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected.values_mut().for_each(BTreeSet::clear);
    }

    /// True when any category has at least one option picked.
    pub fn is_active(&self) -> bool {
        self.selected.values().any(|set| !set.is_empty())
    }

    pub fn is_selected(&self, category: FilterCategory, option: &str) -> bool {
        self.selected
            .get(&category)
            .map(|set| set.contains(option))
            .unwrap_or(false)
    }

    fn allows(&self, category: FilterCategory, value: &str) -> bool {
        match self.selected.get(&category) {
            Some(set) if !set.is_empty() => set.contains(value),
            _ => true,
        }
    }

    fn allows_status(&self, suspended: bool) -> bool {
        match self.selected.get(&FilterCategory::MarketStatus) {
            Some(set) if !set.is_empty() => {
                (suspended && set.contains(STATUS_SUSPENDED))
                    || (!suspended && set.contains(STATUS_NOT_SUSPENDED))
            }
            _ => true,
        }
    }

    pub fn matches(&self, market: &Market) -> bool {
        self.allows(FilterCategory::Position, market.position())
            && self.allows(FilterCategory::StatType, market.stat_type())
            && self.allows_status(market.suspended)
    }
}

/// Case-insensitive substring match on player name or team nickname.
pub fn matches_search(market: &Market, search: &str) -> bool {
    let lowered = search.to_lowercase();
    let needle = lowered.trim();
    if needle.is_empty() {
        return true;
    }
    market.player_name().to_lowercase().contains(needle)
        || market.team_nickname().to_lowercase().contains(needle)
}

/// Markets that pass every filter, paired with their position in the list, in list order.
pub fn filter_markets<'a>(
    markets: &'a [Market],
    search: &str,
    filters: &SelectedFilters,
) -> Vec<(usize, &'a Market)> {
    markets
        .iter()
        .enumerate()
        .filter(|(_, market)| matches_search(market, search))
        .filter(|(_, market)| filters.matches(market))
        .collect()
}

pub fn filtered_indices(markets: &[Market], search: &str, filters: &SelectedFilters) -> Vec<usize> {
    filter_markets(markets, search, filters)
        .into_iter()
        .map(|(idx, _)| idx)
        .collect()
}
