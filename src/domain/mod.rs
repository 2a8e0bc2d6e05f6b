//! Domain logic for the prop board lives here.

pub mod board_state;
pub mod entities;
pub mod filter;
pub mod market;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

#[allow(unused_imports)]
pub use board_state::{BoardState, BoardSummary};
#[allow(unused_imports)]
pub use entities::{unique_key, Alternate, Market, Prop, UniqueKey};
#[allow(unused_imports)]
pub use filter::{
    filter_markets, filtered_indices, matches_search, FilterCategory, SelectedFilters,
    STATUS_NOT_SUSPENDED, STATUS_SUSPENDED,
};
#[allow(unused_imports)]
pub use market::{
    derive_market, derive_markets, group_alternates, is_suspended, AlternateGroups,
    SUSPENSION_ODDS_THRESHOLD,
};
#[allow(unused_imports)]
pub use selection::{BulkAction, Selection};
