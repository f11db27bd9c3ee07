use dioxus::prelude::*;

use crate::{
    domain::{analyze_future_potential, format_currency, CalculationResult, Crop, MarketCatalog},
    ui::theme,
};

/// Sell-now versus store-one-period panel for the winning market.
#[component]
pub fn FuturePotentialPanel(winner: CalculationResult, crop: Crop, quantity_quintals: f64) -> Element {
    let catalog = use_context::<&'static MarketCatalog>();

    let Some(profile) = catalog.storage_profile(crop) else {
        return rsx! { Fragment {} };
    };
    let outlook = analyze_future_potential(&winner, profile, quantity_quintals);

    let verdict = if outlook.is_better_later {
        format!(
            "Storing could earn {} more, but prices are not guaranteed.",
            format_currency(outlook.extra_profit)
        )
    } else {
        "Selling now is the safer choice for this crop.".to_string()
    };
    let badge_class = theme::risk_badge(outlook.risk);
    let risk_label = outlook.risk.label();
    let extra_class = theme::signed_amount(outlook.extra_profit);
    let current = format_currency(outlook.current_net_profit);
    let later = format_currency(outlook.future_net_profit);
    let storage_cost = format_currency(outlook.storage_cost);
    let future_price = format_currency(outlook.future_price);
    let extra = format_currency(outlook.extra_profit);

    rsx! {
        section { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "⏳ Sell Now or Later?" }
                span { class: "{badge_class}", "{risk_label} Storage Risk" }
            }
            div { class: "compare-grid",
                div { class: "compare-cell",
                    p { class: "muted small", "Sell today" }
                    p { class: "strong", "{current}" }
                }
                div { class: "compare-cell",
                    p { class: "muted small", "After storage" }
                    p { class: "strong", "{later}" }
                    p { class: "muted small", "at {future_price}/qt, storage {storage_cost}" }
                }
            }
            p { class: "small",
                "Difference: "
                span { class: "{extra_class}", "{extra}" }
            }
            p { class: "reason", "{verdict}" }
        }
    }
}
