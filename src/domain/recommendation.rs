//! One-line explanation of why the winning market wins, plus rupee formatting.

use super::entities::CalculationResult;

/// Picks the first matching justification; the order of checks is fixed.
pub fn recommendation_reason(
    winner: &CalculationResult,
    runner_up: Option<&CalculationResult>,
) -> String {
    let Some(runner_up) = runner_up else {
        return "Best option available for your crop.".to_string();
    };

    let profit_diff = winner.net_profit - runner_up.net_profit;
    let transport_savings = runner_up.transport_cost - winner.transport_cost;

    if transport_savings > 0.0 && winner.market.distance_km < runner_up.market.distance_km {
        return format!(
            "Sell at {}. You save {} on transport.",
            winner.market.name,
            format_currency(transport_savings)
        );
    }

    if winner.market.price_per_quintal > runner_up.market.price_per_quintal {
        let price_diff = winner.market.price_per_quintal - runner_up.market.price_per_quintal;
        return format!(
            "{} pays {}/quintal more. Extra {} in your pocket.",
            winner.market.name,
            format_currency(price_diff),
            format_currency(profit_diff)
        );
    }

    if winner.market.distance_km == 0.0 {
        return format!(
            "No transport needed. Keep {} by selling at farm gate.",
            format_currency(runner_up.transport_cost)
        );
    }

    format!(
        "Best net profit. You earn {} more than the next option.",
        format_currency(profit_diff)
    )
}

/// Whole rupees with Indian digit grouping, e.g. `₹1,23,456`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_indian(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Indian digit grouping with up to three fraction digits, e.g. `12,345.5`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };
    let grouped = group_indian(whole);
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Groups an unsigned digit string: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
