use dioxus::{prelude::*, signals::Signal};
use tracing::{error, info, warn};

use crate::{
    domain::BoardState,
    infra::dataset::Dataset,
    ui::{
        components::{
            notice_dialog::NoticeDialog,
            toast::{push_toast, Toast, ToastKind, ToastMessage},
        },
        pages::BoardPage,
        shell::Shell,
    },
    util::{
        assets,
        settings::{settings, settings_error},
        version::APP_NAME,
    },
};

#[component]
pub fn App() -> Element {
    let state = use_signal(load_board);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Blocking notice shown after a manual update.
    let mut notice = use_signal(|| None::<String>);
    use_context_provider(|| notice.clone());

    use_hook({
        let toasts = toasts.clone();
        move || announce_load(state, toasts)
    });

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Style { "{assets::main_css()}" }
        Shell { BoardPage {} }
        if let Some(message) = notice() {
            NoticeDialog {
                message,
                on_dismiss: move |_| notice.set(None),
            }
        }
        Toast {}
    }
}

fn load_board() -> BoardState {
    let settings = settings();
    match Dataset::load(&settings) {
        Ok(dataset) => BoardState::new(&dataset.props, &dataset.alternates),
        Err(err) => {
            error!("failed to load market feeds: {err}");
            BoardState::failed(err.to_string())
        }
    }
}

fn announce_load(state: Signal<BoardState>, toasts: Signal<Vec<ToastMessage>>) {
    if let Some(err) = settings_error() {
        warn!("ignoring unusable settings file: {err}");
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            format!("Settings could not be read, using defaults: {err}"),
        );
    }

    if settings().uses_custom_feeds() {
        info!("using feed paths from settings");
        push_toast(toasts.clone(), ToastKind::Info, "Loaded markets from custom feed files.");
    }

    if let Some(err) = state.with(|st| st.load_error.clone()) {
        push_toast(
            toasts.clone(),
            ToastKind::Error,
            format!("Failed to load markets: {err}"),
        );
    }
}
