use std::time::Duration;

use dioxus::{dioxus_core::spawn_forever, prelude::*};
use tokio::time::sleep;

use crate::{
    app::refresh_history,
    domain::{
        calculate_profits, format_number, navigation_url, validate_input, weight_estimate, Analysis,
        AnalysisInput, AnalysisView, AppState, Crop, MarketCatalog, QuantityUnit,
    },
    infra::history::HistoryStore,
    ui::{
        components::{
            action_checklist::ActionChecklist,
            comparison_table::ComparisonTable,
            future_potential::FuturePotentialPanel,
            loading_analysis::LoadingAnalysis,
            toast::{push_toast, ToastKind, ToastMessage},
            winner_card::WinnerCard,
        },
        theme,
    },
};

/// Simulated analysis time so the loading steps are readable.
const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn AnalyzePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let view = state.with(|st| st.view.clone());

    match view {
        AnalysisView::Input => rsx! { AnalysisForm {} },
        AnalysisView::Loading => rsx! { LoadingAnalysis {} },
        AnalysisView::Results(analysis) => rsx! { AnalysisResults { analysis } },
    }
}

/// Switches to the loading view and ranks the markets after [`ANALYSIS_DELAY`].
///
/// The task is owned by the root scope: the form that starts it unmounts as
/// soon as the view leaves [`AnalysisView::Input`].
pub(crate) fn start_analysis(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    catalog: &'static MarketCatalog,
    store: Option<HistoryStore>,
    input: AnalysisInput,
) {
    state.with_mut(|st| st.view = AnalysisView::Loading);
    spawn_forever(async move {
        sleep(ANALYSIS_DELAY).await;
        let results = calculate_profits(catalog, &input);
        tracing::info!(
            crop = %input.crop,
            markets = results.len(),
            "analysis finished"
        );

        if let Some(store) = store.as_ref() {
            match store.record(catalog, &input, &results) {
                Ok(Some(_)) => refresh_history(state, store),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("failed to save analysis: {err}");
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Could not save to history",
                        err.to_string(),
                    );
                }
            }
        }

        state.with_mut(|st| st.view = AnalysisView::Results(Analysis { input, results }));
    });
}

#[component]
fn AnalysisForm() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let catalog = use_context::<&'static MarketCatalog>();
    let store = use_context::<Option<HistoryStore>>();

    let (form, is_harvested, complete) =
        state.with(|st| (st.form.clone(), st.is_harvested, st.form_complete()));

    let estimate = form
        .quantity
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|q| *q > 0.0)
        .map(|q| weight_estimate(q, form.unit));

    let crops: Vec<Crop> = catalog.crops();
    let locations = catalog.locations().to_vec();
    let quintals_class = theme::toggle_button(form.unit == QuantityUnit::Quintals);
    let tons_class = theme::toggle_button(form.unit == QuantityUnit::Tons);
    let harvest_class = theme::toggle_button(is_harvested);
    let harvest_label = if is_harvested {
        "Harvested & Ready to Sell"
    } else {
        "Still in Field"
    };

    let on_analyze = move |_| {
        let form = state.with(|st| st.form.clone());
        let input = match validate_input(catalog, &form) {
            Ok(input) => input,
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, "Missing Information", err.to_string());
                return;
            }
        };

        start_analysis(state, toasts, catalog, store.clone(), input);
    };

    rsx! {
        div { class: "stack",
            header {
                h1 { class: "page-title", "Where should I sell?" }
                p { class: "muted", "Compare nearby mandis by what you actually take home." }
            }

            section { class: "card",
                label { class: "field-label", r#for: "crop", "🌾 Crop" }
                select {
                    id: "crop",
                    class: "field",
                    value: "{form.crop}",
                    onchange: move |evt| state.with_mut(|st| st.form.crop = evt.value()),
                    option { value: "", disabled: true, selected: form.crop.is_empty(), "Select your crop" }
                    for crop in crops {
                        option {
                            key: "{crop.name()}",
                            value: "{crop.name()}",
                            selected: form.crop == crop.name(),
                            "{crop.emoji()} {crop.name()}"
                        }
                    }
                }
            }

            section { class: "card",
                label { class: "field-label", r#for: "quantity", "⚖ Quantity" }
                div { class: "input-row",
                    input {
                        id: "quantity",
                        class: "field",
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: "{form.quantity}",
                        oninput: move |evt| state.with_mut(|st| st.form.quantity = evt.value()),
                    }
                    div { class: "toggle-group",
                        button {
                            class: "{quintals_class}",
                            onclick: move |_| state.with_mut(|st| st.form.unit = QuantityUnit::Quintals),
                            "Quintals"
                        }
                        button {
                            class: "{tons_class}",
                            onclick: move |_| state.with_mut(|st| st.form.unit = QuantityUnit::Tons),
                            "Tons"
                        }
                    }
                }
                if let Some(estimate) = estimate {
                    p { class: "muted small", "{estimate}" }
                }
            }

            section { class: "card",
                label { class: "field-label", r#for: "location", "📍 Your Location" }
                select {
                    id: "location",
                    class: "field",
                    value: "{form.location_id}",
                    onchange: move |evt| state.with_mut(|st| st.form.location_id = evt.value()),
                    option { value: "", disabled: true, selected: form.location_id.is_empty(), "Select your village" }
                    for location in locations {
                        option {
                            key: "{location.id}",
                            value: "{location.id}",
                            selected: form.location_id == location.id,
                            "{location.name}"
                        }
                    }
                }
            }

            section { class: "card",
                p { class: "field-label", "🚜 Harvest Status" }
                button {
                    class: "{harvest_class}",
                    onclick: move |_| state.with_mut(|st| st.is_harvested = !st.is_harvested),
                    "{harvest_label}"
                }
            }

            button {
                class: "button button-primary button-wide",
                disabled: !complete,
                onclick: on_analyze,
                "Find Best Market"
            }
        }
    }
}

#[component]
fn AnalysisResults(analysis: Analysis) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let catalog = use_context::<&'static MarketCatalog>();

    let origin = catalog.location(&analysis.input.location_id).cloned();
    let crop = analysis.input.crop;
    let quantity_quintals = analysis.input.quantity_in_quintals();
    let summary = format!(
        "{} {} of {} from {}",
        format_number(analysis.input.quantity),
        analysis.input.unit.label(),
        crop.name(),
        origin
            .as_ref()
            .map(|location| location.name.as_str())
            .unwrap_or(analysis.input.location_id.as_str()),
    );

    let on_reset = move |_| state.with_mut(|st| st.reset_form());

    let Some(winner) = analysis.winner().cloned() else {
        return rsx! {
            div { class: "stack",
                section { class: "card empty-state",
                    h2 { class: "card-title", "No markets found" }
                    p { class: "muted", "No markets currently trade {crop.name()}. Try another crop." }
                }
                button { class: "button button-outline button-wide", onclick: on_reset, "New Analysis" }
            }
        };
    };
    let runner_up = analysis.runner_up().cloned();
    let maps_url = navigation_url(&winner, origin.as_ref()).map(|url| url.to_string());
    let market_name = winner.market.name.clone();

    rsx! {
        div { class: "stack",
            p { class: "muted", "{summary}" }
            WinnerCard { winner: winner.clone(), runner_up, maps_url: maps_url.clone() }
            ComparisonTable { results: analysis.results.clone() }
            FuturePotentialPanel { winner, crop, quantity_quintals }
            ActionChecklist { maps_url, market_name }
            button { class: "button button-outline button-wide", onclick: on_reset, "New Analysis" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, ScopeId};
    use uuid::Uuid;

    use super::*;

    fn rice_input() -> AnalysisInput {
        AnalysisInput {
            crop: Crop::Rice,
            quantity: 10.0,
            unit: QuantityUnit::Quintals,
            location_id: "kothaguda".to_string(),
        }
    }

    /// Mounts a starter only while the view is `Input`, the same way the
    /// analyze page swaps its form out for the loading panel.
    fn harness(store: HistoryStore) -> Element {
        let state = use_signal(AppState::default);
        use_context_provider(|| state);
        let toasts = use_signal(Vec::<ToastMessage>::new);
        use_context_provider(|| toasts);

        match state.with(|st| st.view.clone()) {
            AnalysisView::Input => rsx! { Starter { store } },
            _ => rsx! { div {} },
        }
    }

    #[component]
    fn Starter(store: HistoryStore) -> Element {
        let state = use_context::<Signal<AppState>>();
        let toasts = use_context::<Signal<Vec<ToastMessage>>>();
        use_hook(move || {
            start_analysis(state, toasts, MarketCatalog::builtin(), Some(store), rice_input())
        });
        rsx! { p { "form" } }
    }

    #[tokio::test]
    async fn analysis_finishes_after_the_form_unmounts() {
        let path = std::env::temp_dir()
            .join(format!("mandi-analyze-{}", Uuid::new_v4()))
            .join("history.json");
        let store = HistoryStore::new(path);
        let mut dom = VirtualDom::new_with_props(harness, store.clone());
        dom.rebuild_in_place();

        let analysis = tokio::time::timeout(Duration::from_secs(10), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
                let view = dom.in_scope(ScopeId::APP, || {
                    consume_context::<Signal<AppState>>().with(|st| st.view.clone())
                });
                if let AnalysisView::Results(analysis) = view {
                    return analysis;
                }
            }
        })
        .await
        .expect("analysis task never completed");

        assert_eq!(
            analysis.winner().map(|winner| winner.market.id.as_str()),
            Some("rice-gajwel")
        );
        assert_eq!(analysis.results.len(), 3);

        let saved = store.list().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].best_market, "Gajwel Market");
    }
}
