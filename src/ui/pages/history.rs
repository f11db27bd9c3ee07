use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    app::{refresh_history, Route},
    domain::{format_currency, format_number, AppState, HistoryRecord, MarketCatalog},
    infra::history::HistoryStore,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let catalog = use_context::<&'static MarketCatalog>();
    let store = use_context::<Option<HistoryStore>>();

    let records = state.with(|st| st.history.clone());
    let rows: Vec<HistoryRow> = records
        .iter()
        .map(|record| HistoryRow::new(catalog, record))
        .collect();

    let on_delete = use_callback(move |id: Uuid| {
        let Some(store) = store.as_ref() else {
            push_toast(toasts, ToastKind::Error, "History unavailable", "No storage directory.");
            return;
        };
        match store.delete(id) {
            Ok(true) => {
                refresh_history(state, store);
                push_toast(toasts, ToastKind::Success, "Deleted", "Calculation removed from history.");
            }
            Ok(false) => refresh_history(state, store),
            Err(err) => {
                tracing::warn!(%id, "failed to delete history record: {err}");
                push_toast(toasts, ToastKind::Error, "Delete failed", err.to_string());
            }
        }
    });

    rsx! {
        div { class: "stack",
            header {
                h1 { class: "page-title", "📜 Calculation History" }
                p { class: "muted", "Your past market comparisons, newest first." }
            }

            if rows.is_empty() {
                section { class: "card empty-state",
                    h2 { class: "card-title", "No calculations yet" }
                    p { class: "muted", "Run an analysis and it will show up here." }
                    Link { class: "button button-primary", to: Route::Analyze {}, "Start an analysis" }
                }
            } else {
                ul { class: "history-list",
                    for row in rows {
                        HistoryItem { key: "{row.id}", row, on_delete }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct HistoryRow {
    id: Uuid,
    title: String,
    when: String,
    location: String,
    best_market: String,
    net_profit: String,
    profit_class: &'static str,
    markets_compared: usize,
}

impl HistoryRow {
    fn new(catalog: &MarketCatalog, record: &HistoryRecord) -> Self {
        let location = catalog
            .location(&record.location)
            .map(|location| location.name.clone())
            .unwrap_or_else(|| record.location.clone());
        Self {
            id: record.id,
            title: format!(
                "{} {} • {} {}",
                record.crop.emoji(),
                record.crop.name(),
                format_number(record.quantity),
                record.quantity_unit.label()
            ),
            when: record.created_label(),
            location,
            best_market: record.best_market.clone(),
            net_profit: format_currency(record.net_profit),
            profit_class: theme::signed_amount(record.net_profit),
            markets_compared: record.all_results.len(),
        }
    }
}

#[component]
fn HistoryItem(row: HistoryRow, on_delete: EventHandler<Uuid>) -> Element {
    let id = row.id;
    rsx! {
        li { class: "card history-item",
            div {
                p { class: "strong", "{row.title}" }
                p { class: "muted small", "{row.when} • from {row.location}" }
                p { class: "small", "🏆 {row.best_market} ({row.markets_compared} markets compared)" }
            }
            div { class: "history-actions",
                p { class: "strong {row.profit_class}", "{row.net_profit}" }
                button {
                    class: "button button-outline button-small",
                    title: "Delete record",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
