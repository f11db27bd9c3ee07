use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, MarketCatalog},
    infra::history::HistoryStore,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AnalyzePage, HistoryPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
        version::{version_label, APP_NAME},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Analyze {},
    #[route("/history")]
    History {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook(move || {
        tracing::info!("starting {} {}", APP_NAME, version_label());
        let mut state = state;
        if let Some(saved) = load_persisted_state() {
            state.with_mut(|st| st.apply_persisted(saved));
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_context_provider(MarketCatalog::builtin);

    let store = use_hook(|| match HistoryStore::open_default() {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::warn!("history disabled: {err}");
            push_toast(
                toasts,
                ToastKind::Warning,
                "History unavailable",
                "Analyses will not be saved on this device.",
            );
            None
        }
    });
    use_hook({
        let store = store.clone();
        move || {
            if let Some(store) = store.as_ref() {
                refresh_history(state, store);
            }
        }
    });
    use_context_provider(|| store);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist user state: {err}");
    }
}

/// Reloads the saved analyses into the shared state.
pub fn refresh_history(mut state: Signal<AppState>, store: &HistoryStore) {
    match store.list() {
        Ok(records) => state.with_mut(|st| st.history = records),
        Err(err) => tracing::warn!("failed to load history: {err}"),
    }
}

#[component]
pub fn Analyze() -> Element {
    rsx! { Shell { AnalyzePage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
