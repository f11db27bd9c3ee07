use dioxus::prelude::*;

use crate::domain::{format_currency, format_number, CalculationResult};

#[component]
pub fn ComparisonTable(results: Vec<CalculationResult>) -> Element {
    let rows: Vec<RowView> = results
        .iter()
        .enumerate()
        .map(|(rank, result)| RowView::new(rank, result))
        .collect();

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "📊 All Market Options" }
            table { class: "comparison-table",
                thead {
                    tr {
                        th { class: "left", "Market" }
                        th { class: "right", "Price/Qt" }
                        th { class: "right", "Costs" }
                        th { class: "right", "Net Profit" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}", class: if row.is_winner { "row-winner" } else { "" },
                            td { class: "left",
                                p { class: "market-name",
                                    if row.is_winner {
                                        span { "🏆 " }
                                    }
                                    "{row.name}"
                                }
                                p { class: "muted small",
                                    "{row.distance}"
                                    if row.is_high_risk {
                                        span { class: "badge risk-high", "⚠ Far" }
                                    }
                                }
                            }
                            td { class: "right", "{row.price}" }
                            td { class: "right muted", "{row.costs}" }
                            td { class: "right strong", "{row.net_profit}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct RowView {
    id: String,
    name: String,
    distance: String,
    is_high_risk: bool,
    is_winner: bool,
    price: String,
    costs: String,
    net_profit: String,
}

impl RowView {
    fn new(rank: usize, result: &CalculationResult) -> Self {
        Self {
            id: result.market.id.clone(),
            name: result.market.name.clone(),
            distance: format!("{} km ", format_number(result.market.distance_km)),
            is_high_risk: result.is_high_risk,
            is_winner: rank == 0,
            price: format_currency(result.market.price_per_quintal),
            costs: format_currency(result.total_cost),
            net_profit: format_currency(result.net_profit),
        }
    }
}
