//! Sell-now versus store-for-one-period comparison.

use serde::{Deserialize, Serialize};

use super::entities::{CalculationResult, RiskLevel};

/// Per-crop assumptions for holding a harvest through one storage period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageProfile {
    /// Expected price after one period relative to today's price.
    pub volatility_multiplier: f64,
    /// Fraction of the quantity lost to spoilage per period.
    pub loss_rate_per_period: f64,
    /// INR per quintal per period.
    pub storage_cost_per_quintal: f64,
}

impl StorageProfile {
    pub fn risk(&self) -> RiskLevel {
        if self.loss_rate_per_period <= 0.02 {
            RiskLevel::Low
        } else if self.loss_rate_per_period <= 0.05 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuturePotential {
    pub current_net_profit: f64,
    pub future_price: f64,
    pub saleable_quantity: f64,
    pub storage_cost: f64,
    pub future_net_profit: f64,
    pub extra_profit: f64,
    pub is_better_later: bool,
    pub risk: RiskLevel,
}

/// Projects the profit of selling `quantity_quintals` at the same market one
/// period later. Transport and loading costs are carried over unchanged.
pub fn analyze_future_potential(
    current: &CalculationResult,
    profile: &StorageProfile,
    quantity_quintals: f64,
) -> FuturePotential {
    let future_price = current.market.price_per_quintal * profile.volatility_multiplier;
    let saleable_quantity = quantity_quintals * (1.0 - profile.loss_rate_per_period);
    let storage_cost = profile.storage_cost_per_quintal * quantity_quintals;
    let future_net_profit = future_price * saleable_quantity
        - current.transport_cost
        - current.loading_cost
        - storage_cost;
    let extra_profit = future_net_profit - current.net_profit;

    FuturePotential {
        current_net_profit: current.net_profit,
        future_price,
        saleable_quantity,
        storage_cost,
        future_net_profit,
        extra_profit,
        is_better_later: extra_profit > 0.0,
        risk: profile.risk(),
    }
}
