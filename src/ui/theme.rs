//! Class helpers for the board's stylesheet.

use crate::domain::BulkAction;
use crate::ui::components::toast::ToastKind;

pub fn bulk_button(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Suspend => "btn btn--suspend",
        BulkAction::Release => "btn btn--release",
    }
}

pub fn filter_option(active: bool) -> &'static str {
    if active {
        "filter-menu__option filter-menu__option--active"
    } else {
        "filter-menu__option"
    }
}

pub fn status_icon(suspended: bool) -> &'static str {
    if suspended {
        "status-icon status-icon--suspended"
    } else {
        "status-icon status-icon--available"
    }
}

pub fn toast(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "toast toast--info",
        ToastKind::Warning => "toast toast--warning",
        ToastKind::Error => "toast toast--error",
    }
}
