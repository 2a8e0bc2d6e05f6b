use dioxus::prelude::*;

use super::status_icon::StatusIcon;
use crate::domain::Market;

#[derive(Clone, PartialEq)]
pub struct MarketRow {
    /// Position in the loaded market list; identifies the row for selection.
    pub row: usize,
    pub unique_key: String,
    pub player_name: String,
    pub team_nickname: String,
    pub position: String,
    pub stat_type: String,
    pub line: f64,
    pub suspended: bool,
    pub low: f64,
    pub high: f64,
}

impl MarketRow {
    pub fn new(row: usize, market: &Market) -> Self {
        Self {
            row,
            unique_key: market.unique_key.clone(),
            player_name: market.player_name().to_string(),
            team_nickname: market.team_nickname().to_string(),
            position: market.position().to_string(),
            stat_type: market.stat_type().to_string(),
            line: market.line(),
            suspended: market.suspended,
            low: market.low,
            high: market.high,
        }
    }
}

#[component]
pub fn MarketTable(
    rows: Vec<MarketRow>,
    selected: Vec<usize>,
    empty_message: String,
    on_toggle: EventHandler<usize>,
) -> Element {
    let is_empty = rows.is_empty();
    let rendered_rows = rows
        .into_iter()
        .map(|row| {
            let checked = selected.contains(&row.row);
            (row, checked)
        })
        .collect::<Vec<_>>();
    rsx! {
        div {
            class: "table-wrap",
            table {
                class: "market-table",
                thead {
                    tr {
                        th {}
                        th { "Name" }
                        th { "Team" }
                        th { "Position" }
                        th { "Type" }
                        th { "Optimal" }
                        th { "Available" }
                        th { "Low" }
                        th { "High" }
                    }
                }
                tbody {
                    for (row, checked) in rendered_rows {
                        MarketRowView {
                            key: "{row.row}-{row.unique_key}",
                            row: row.clone(),
                            checked,
                            on_toggle: on_toggle.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "market-table__empty",
                                colspan: "9",
                                "{empty_message}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MarketRowViewProps {
    row: MarketRow,
    checked: bool,
    on_toggle: EventHandler<usize>,
}

#[component]
fn MarketRowView(props: MarketRowViewProps) -> Element {
    let row = props.row;
    let index = row.row;
    let checked = props.checked;
    rsx! {
        tr {
            th {
                label {
                    input {
                        r#type: "checkbox",
                        checked: checked,
                        onclick: move |_| props.on_toggle.call(index),
                    }
                }
            }
            td { "{row.player_name}" }
            td { "{row.team_nickname}" }
            td { "{row.position}" }
            td { "{row.stat_type}" }
            td { "{row.line}" }
            td { StatusIcon { suspended: row.suspended } }
            td { "{row.low}" }
            td { "{row.high}" }
        }
    }
}
