pub mod filter_bar;
pub mod market_table;
pub mod notice_dialog;
pub mod status_icon;
pub mod toast;
