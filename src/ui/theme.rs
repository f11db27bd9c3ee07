//! Class helpers shared across pages.

use crate::domain::RiskLevel;

pub fn risk_badge(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "badge risk-low",
        RiskLevel::Medium => "badge risk-medium",
        RiskLevel::High => "badge risk-high",
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}

pub fn toggle_button(active: bool) -> &'static str {
    if active {
        "toggle toggle-on"
    } else {
        "toggle"
    }
}

pub fn checklist_item(done: bool) -> &'static str {
    if done {
        "checklist-item checklist-item-done"
    } else {
        "checklist-item"
    }
}

/// Green for gains, red for losses.
pub fn signed_amount(value: f64) -> &'static str {
    if value >= 0.0 {
        "amount-positive"
    } else {
        "amount-negative"
    }
}
