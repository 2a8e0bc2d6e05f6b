use serde::{Deserialize, Serialize};

/// Composite key joining props to their alternates: player id followed by stat type id.
pub type UniqueKey = String;

/// Builds the join key exactly as the feed does: the two ids concatenated as decimal text.
pub fn unique_key(player_id: u64, stat_type_id: u64) -> UniqueKey {
    format!("{player_id}{stat_type_id}")
}

/// One market offer on a player's statistic, as shipped in `props.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    pub player_name: String,
    pub player_id: u64,
    pub team_id: u64,
    pub team_nickname: String,
    pub team_abbr: String,
    pub stat_type: String,
    pub stat_type_id: u64,
    pub position: String,
    /// Raw feed flag; any non-zero value means the book pulled the market.
    pub market_suspended: i64,
    pub line: f64,
}

impl Prop {
    pub fn unique_key(&self) -> UniqueKey {
        unique_key(self.player_id, self.stat_type_id)
    }

    pub fn is_flagged_suspended(&self) -> bool {
        self.market_suspended != 0
    }
}

/// An alternate quoted line for a player/stat-type pair, as shipped in `alternates.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternate {
    pub player_name: String,
    pub player_id: u64,
    pub stat_type: String,
    pub stat_type_id: u64,
    pub line: f64,
    pub under_odds: f64,
    pub over_odds: f64,
    pub push_odds: f64,
}

impl Alternate {
    pub fn unique_key(&self) -> UniqueKey {
        unique_key(self.player_id, self.stat_type_id)
    }
}

/// A prop enriched with its derived availability and alternate-line bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub prop: Prop,
    pub suspended: bool,
    pub low: f64,
    pub high: f64,
    pub unique_key: UniqueKey,
}

impl Market {
    pub fn player_name(&self) -> &str {
        &self.prop.player_name
    }

    pub fn team_nickname(&self) -> &str {
        &self.prop.team_nickname
    }

    pub fn position(&self) -> &str {
        &self.prop.position
    }

    pub fn stat_type(&self) -> &str {
        &self.prop.stat_type
    }

    /// The offered ("optimal") line.
    pub fn line(&self) -> f64 {
        self.prop.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_key_concatenates_ids() {
        assert_eq!(unique_key(17, 2), "172");
        // Different id pairs can collapse onto the same key.
        assert_eq!(unique_key(1, 72), unique_key(17, 2));
    }

    #[test]
    fn test_prop_deserializes_from_feed_shape() {
        let prop: Prop = serde_json::from_value(serde_json::json!({
            "playerName": "Russell Westbrook",
            "playerId": 8,
            "teamId": 1,
            "teamNickname": "Lakers",
            "teamAbbr": "LAL",
            "statType": "assists",
            "statTypeId": 2,
            "position": "PG",
            "marketSuspended": 1,
            "line": 8.5
        }))
        .unwrap();

        assert_eq!(prop.unique_key(), "82");
        assert!(prop.is_flagged_suspended());
        assert_eq!(prop.line, 8.5);
    }
}
