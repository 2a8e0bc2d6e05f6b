use super::entities::{Market, Prop};

pub fn prop(player_name: &str, team_nickname: &str, position: &str, stat_type: &str) -> Prop {
    let player_id = player_name.len() as u64;
    Prop {
        player_name: player_name.to_string(),
        player_id,
        team_id: team_nickname.len() as u64,
        team_nickname: team_nickname.to_string(),
        team_abbr: team_nickname.chars().take(3).collect::<String>().to_uppercase(),
        stat_type: stat_type.to_string(),
        stat_type_id: 1,
        position: position.to_string(),
        market_suspended: 0,
        line: 10.5,
    }
}

pub fn market(
    player_name: &str,
    team_nickname: &str,
    position: &str,
    stat_type: &str,
    suspended: bool,
) -> Market {
    let prop = prop(player_name, team_nickname, position, stat_type);
    Market {
        unique_key: prop.unique_key(),
        prop,
        suspended,
        low: 9.5,
        high: 11.5,
    }
}
