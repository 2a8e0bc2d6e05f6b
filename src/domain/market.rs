//! Derives board markets from the prop feed and its alternate lines.

use std::collections::HashMap;

use super::entities::{Alternate, Market, Prop, UniqueKey};

/// A matching alternate whose under, over and push odds all sit below this is treated as pulled.
pub const SUSPENSION_ODDS_THRESHOLD: f64 = 0.4;

/// Alternates bucketed by join key, each bucket sorted ascending by line.
pub type AlternateGroups = HashMap<UniqueKey, Vec<Alternate>>;

pub fn group_alternates(alternates: &[Alternate]) -> AlternateGroups {
    let mut groups: AlternateGroups = HashMap::new();
    for alt in alternates {
        groups
            .entry(alt.unique_key())
            .or_default()
            .push(alt.clone());
    }
    // Stable sort keeps feed order among equal lines.
    for alts in groups.values_mut() {
        alts.sort_by(|a, b| a.line.total_cmp(&b.line));
    }
    groups
}

/// Decides whether a prop should be shown as suspended.
///
/// Fails safe: a prop with no alternates, or whose own line is not quoted
/// among them, is suspended.
pub fn is_suspended(alternates: Option<&[Alternate]>, prop: &Prop) -> bool {
    let Some(alts) = alternates else {
        return true;
    };

    if prop.is_flagged_suspended() {
        return true;
    }

    let Some(optimal) = alts.iter().find(|alt| alt.line == prop.line) else {
        return true;
    };

    optimal.under_odds < SUSPENSION_ODDS_THRESHOLD
        && optimal.over_odds < SUSPENSION_ODDS_THRESHOLD
        && optimal.push_odds < SUSPENSION_ODDS_THRESHOLD
}

pub fn derive_market(prop: &Prop, groups: &AlternateGroups) -> Market {
    let unique_key = prop.unique_key();
    let alts = groups
        .get(&unique_key)
        .map(|alts| alts.as_slice())
        .filter(|alts| !alts.is_empty());

    let (low, high) = match alts {
        Some(alts) => (
            alts.first().map(|alt| alt.line).unwrap_or_default(),
            alts.last().map(|alt| alt.line).unwrap_or_default(),
        ),
        None => (0.0, 0.0),
    };

    Market {
        prop: prop.clone(),
        suspended: is_suspended(alts, prop),
        low,
        high,
        unique_key,
    }
}

/// One market per prop, in feed order.
pub fn derive_markets(props: &[Prop], alternates: &[Alternate]) -> Vec<Market> {
    let groups = group_alternates(alternates);
    props
        .iter()
        .map(|prop| derive_market(prop, &groups))
        .collect()
}
