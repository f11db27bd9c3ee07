use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, refresh_history},
    domain::{AppState, MarketCatalog, Preferences, QuantityUnit},
    infra::history::HistoryStore,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::version_label,
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let catalog = use_context::<&'static MarketCatalog>();
    let store = use_context::<Option<HistoryStore>>();

    let initial = state.with(|st| st.preferences.clone());
    let mut location_input = use_signal(|| initial.default_location.clone().unwrap_or_default());
    let mut unit_input = use_signal(|| initial.default_unit);

    let locations = catalog.locations().to_vec();
    let history_count = state.with(|st| st.history.len());
    let selected_location = location_input();
    let quintals_class = theme::toggle_button(unit_input() == QuantityUnit::Quintals);
    let tons_class = theme::toggle_button(unit_input() == QuantityUnit::Tons);

    let on_save = move |_| {
        let mut state = state;
        let location = location_input();
        let default_location = if location.trim().is_empty() {
            None
        } else if catalog.location(&location).is_some() {
            Some(location)
        } else {
            push_toast(toasts, ToastKind::Error, "Unknown location", location);
            return;
        };
        state.with_mut(|st| {
            st.set_preferences(Preferences {
                default_location,
                default_unit: unit_input(),
            })
        });
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Success, "Saved", "New analyses start from these defaults.");
    };

    let on_clear = move |_| {
        let Some(store) = store.as_ref() else {
            push_toast(toasts, ToastKind::Error, "History unavailable", "No storage directory.");
            return;
        };
        match store.clear() {
            Ok(()) => {
                refresh_history(state, store);
                push_toast(toasts, ToastKind::Info, "History cleared", "All saved calculations removed.");
            }
            Err(err) => {
                tracing::warn!("failed to clear history: {err}");
                push_toast(toasts, ToastKind::Error, "Clear failed", err.to_string());
            }
        }
    };

    rsx! {
        div { class: "stack",
            header {
                h1 { class: "page-title", "Settings" }
                p { class: "muted", "Defaults for new analyses and saved data." }
            }

            section { class: "card",
                h2 { class: "card-title", "Defaults" }
                label { class: "field-label", r#for: "default-location", "Home location" }
                select {
                    id: "default-location",
                    class: "field",
                    value: "{selected_location}",
                    onchange: move |evt| location_input.set(evt.value()),
                    option { value: "", selected: selected_location.is_empty(), "Ask every time" }
                    for location in locations {
                        option {
                            key: "{location.id}",
                            value: "{location.id}",
                            selected: selected_location == location.id,
                            "{location.name}"
                        }
                    }
                }
                p { class: "field-label", "Quantity unit" }
                div { class: "toggle-group",
                    button {
                        class: "{quintals_class}",
                        onclick: move |_| unit_input.set(QuantityUnit::Quintals),
                        "Quintals"
                    }
                    button {
                        class: "{tons_class}",
                        onclick: move |_| unit_input.set(QuantityUnit::Tons),
                        "Tons"
                    }
                }
                div { class: "button-row",
                    button { class: "button button-primary", onclick: on_save, "Save defaults" }
                }
            }

            section { class: "card",
                h2 { class: "card-title", "History" }
                p { class: "muted", "{history_count} saved calculations." }
                button {
                    class: "button button-danger",
                    disabled: history_count == 0,
                    onclick: on_clear,
                    "Clear history"
                }
            }

            p { class: "muted small version", "{version_label()}" }
        }
    }
}
