use dioxus::prelude::*;

use crate::{
    domain::{format_currency, format_number, recommendation_reason, CalculationResult},
    ui::{
        clipboard::copy_text_to_clipboard,
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn WinnerCard(
    winner: CalculationResult,
    #[props(!optional)] runner_up: Option<CalculationResult>,
    #[props(!optional)] maps_url: Option<String>,
) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let reason = recommendation_reason(&winner, runner_up.as_ref());
    let market = &winner.market;
    let subtitle = if market.is_farm_gate() {
        market.operating_hours.clone()
    } else {
        format!(
            "{} km away • {}",
            format_number(market.distance_km),
            market.operating_hours
        )
    };
    let margin = winner
        .profit_margin
        .map(|margin| format!("{margin:.1}% margin"))
        .unwrap_or_else(|| "margin n/a".to_string());
    let badge_class = theme::risk_badge(market.risk);
    let risk_label = market.risk.label();
    let profit_class = theme::signed_amount(winner.net_profit);
    let net_profit = format_currency(winner.net_profit);

    let on_copy = {
        let maps_url = maps_url.clone();
        move |_| {
            let Some(url) = maps_url.clone() else {
                return;
            };
            spawn(async move {
                if copy_text_to_clipboard(url.clone()).await {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "Directions Copied!",
                        "Share with your driver or paste in browser.",
                    );
                } else {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Copy failed",
                        format!("Please copy this link manually: {url}"),
                    );
                }
            });
        }
    };

    rsx! {
        section { class: "card winner-card",
            div { class: "card-header",
                h2 { class: "card-title", "🏆 Best Market" }
                span { class: "{badge_class}", "{risk_label} Risk" }
            }
            h3 { class: "winner-name", "📍 {market.name}" }
            p { class: "muted", "{subtitle}" }

            div { class: "profit-box",
                p { class: "muted", "Your Net Profit" }
                p { class: "profit-value {profit_class}", "{net_profit}" }
                p { class: "muted", "{margin}" }
            }

            div { class: "kpi-grid",
                KpiCard {
                    title: "Gross Revenue".to_string(),
                    value: format_currency(winner.gross_revenue),
                    description: None,
                }
                KpiCard {
                    title: "Transport".to_string(),
                    value: format_currency(winner.transport_cost),
                    description: Some("Round trip".to_string()),
                }
                KpiCard {
                    title: "Loading".to_string(),
                    value: format_currency(winner.loading_cost),
                    description: None,
                }
            }

            p { class: "reason", "💡 {reason}" }

            if let Some(url) = maps_url {
                div { class: "button-row",
                    a {
                        class: "button button-primary",
                        href: "{url}",
                        target: "_blank",
                        "Navigate to Market"
                    }
                    button {
                        class: "button button-outline",
                        title: "Copy directions link",
                        onclick: on_copy,
                        "Copy link"
                    }
                }
            }
        }
    }
}
