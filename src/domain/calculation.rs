//! Net-profit comparison across the markets of one crop.

use super::{
    catalog::MarketCatalog,
    entities::{AnalysisInput, CalculationResult, Market, HIGH_RISK_DISTANCE_KM},
};

/// Ranks every market for `input.crop` by net profit, highest first.
///
/// Ties keep catalog order. A crop without markets yields an empty list.
/// Quantity is not validated here; see [`super::validation::validate_input`].
pub fn calculate_profits(catalog: &MarketCatalog, input: &AnalysisInput) -> Vec<CalculationResult> {
    let quantity_quintals = input.quantity_in_quintals();

    let mut results: Vec<CalculationResult> = catalog
        .markets_for(input.crop)
        .map(|market| evaluate_market(market, quantity_quintals))
        .collect();

    // `sort_by` is stable, which preserves catalog order on equal profit.
    results.sort_by(|a, b| {
        b.net_profit
            .partial_cmp(&a.net_profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        crop = %input.crop,
        quantity_quintals,
        markets = results.len(),
        "calculated market profits"
    );

    results
}

/// Profit of selling `quantity_quintals` at a single market.
pub fn evaluate_market(market: &Market, quantity_quintals: f64) -> CalculationResult {
    let transport_cost = round_trip_transport_cost(market);
    let loading_cost = market.loading_fee_per_quintal * quantity_quintals;
    let total_cost = transport_cost + loading_cost;
    let gross_revenue = market.price_per_quintal * quantity_quintals;
    let net_profit = gross_revenue - total_cost;
    let profit_margin = if gross_revenue == 0.0 {
        None
    } else {
        Some(net_profit / gross_revenue * 100.0)
    };

    CalculationResult {
        market: market.clone(),
        gross_revenue,
        transport_cost,
        loading_cost,
        total_cost,
        net_profit,
        profit_margin,
        is_high_risk: market.distance_km > HIGH_RISK_DISTANCE_KM,
    }
}

/// There and back again.
pub fn round_trip_transport_cost(market: &Market) -> f64 {
    market.distance_km * 2.0 * market.transport_rate_per_km
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::entities::{Coordinates, Crop, QuantityUnit, RiskLevel};

    fn input(crop: Crop, quantity: f64, unit: QuantityUnit) -> AnalysisInput {
        AnalysisInput {
            crop,
            quantity,
            unit,
            location_id: "kothaguda".to_string(),
        }
    }

    fn fixture_market(id: &str, crop: Crop, price: f64, distance: f64, rate: f64) -> Market {
        Market {
            id: id.to_string(),
            name: id.to_string(),
            crop,
            price_per_quintal: price,
            distance_km: distance,
            transport_rate_per_km: rate,
            loading_fee_per_quintal: 10.0,
            risk: RiskLevel::Low,
            coordinates: Coordinates::new(17.0, 78.0),
            operating_hours: "Always".to_string(),
        }
    }

    #[test]
    fn rice_ten_quintals_ranks_gajwel_first() {
        let results = calculate_profits(
            MarketCatalog::builtin(),
            &input(Crop::Rice, 10.0, QuantityUnit::Quintals),
        );

        let ids: Vec<_> = results.iter().map(|r| r.market.id.as_str()).collect();
        assert_eq!(ids, ["rice-gajwel", "rice-bowenpally", "rice-farmgate"]);

        let best = &results[0];
        assert_eq!(best.gross_revenue, 22_000.0);
        assert_eq!(best.transport_cost, 750.0);
        assert_eq!(best.loading_cost, 400.0);
        assert_eq!(best.total_cost, 1_150.0);
        assert_eq!(best.net_profit, 20_850.0);
        assert!(!best.is_high_risk);

        let bowenpally = &results[1];
        assert_eq!(bowenpally.gross_revenue, 24_000.0);
        assert_eq!(bowenpally.transport_cost, 2_800.0);
        assert_eq!(bowenpally.loading_cost, 500.0);
        assert_eq!(bowenpally.total_cost, 3_300.0);
        assert_eq!(bowenpally.net_profit, 20_700.0);
        assert_eq!(bowenpally.profit_margin, Some(20_700.0 / 24_000.0 * 100.0));
    }

    #[test]
    fn one_ton_matches_ten_quintals() {
        let catalog = MarketCatalog::builtin();
        for crop in Crop::ALL {
            for quantity in [0.5, 1.0, 7.25, 120.0] {
                let tons = calculate_profits(catalog, &input(crop, quantity, QuantityUnit::Tons));
                let quintals = calculate_profits(
                    catalog,
                    &input(crop, quantity * 10.0, QuantityUnit::Quintals),
                );
                assert_eq!(tons, quintals, "{crop} at {quantity} tons");
            }
        }
    }

    #[test]
    fn results_are_sorted_by_net_profit() {
        let catalog = MarketCatalog::builtin();
        for crop in Crop::ALL {
            for quantity in [1.0, 10.0, 500.0] {
                let results = calculate_profits(catalog, &input(crop, quantity, QuantityUnit::Quintals));
                assert!(results
                    .windows(2)
                    .all(|pair| pair[0].net_profit >= pair[1].net_profit));
            }
        }
    }

    #[test]
    fn calculation_is_deterministic() {
        let request = input(Crop::Cotton, 42.0, QuantityUnit::Quintals);
        let first = calculate_profits(MarketCatalog::builtin(), &request);
        let second = calculate_profits(MarketCatalog::builtin(), &request);
        assert_eq!(first, second);
    }

    #[test]
    fn transport_is_a_round_trip_and_farm_gate_is_free() {
        let catalog = MarketCatalog::builtin();
        for crop in Crop::ALL {
            for result in calculate_profits(catalog, &input(crop, 10.0, QuantityUnit::Quintals)) {
                let market = &result.market;
                assert_eq!(
                    result.transport_cost,
                    2.0 * market.distance_km * market.transport_rate_per_km
                );
                if market.distance_km == 0.0 {
                    assert_eq!(result.transport_cost, 0.0);
                    assert!(!result.is_high_risk);
                }
                assert_eq!(result.is_high_risk, market.distance_km > 50.0);
            }
        }
    }

    #[test]
    fn equal_profits_keep_catalog_order() {
        let catalog = MarketCatalog::new(
            vec![
                fixture_market("first", Crop::Maize, 1000.0, 10.0, 5.0),
                fixture_market("second", Crop::Maize, 1000.0, 10.0, 5.0),
                fixture_market("best", Crop::Maize, 2000.0, 10.0, 5.0),
                fixture_market("third", Crop::Maize, 1000.0, 10.0, 5.0),
            ],
            Vec::new(),
            HashMap::new(),
        );
        let results = calculate_profits(&catalog, &input(Crop::Maize, 3.0, QuantityUnit::Quintals));
        let ids: Vec<_> = results.iter().map(|r| r.market.id.as_str()).collect();
        assert_eq!(ids, ["best", "first", "second", "third"]);
    }

    #[test]
    fn crop_without_markets_yields_nothing() {
        let catalog = MarketCatalog::new(
            vec![fixture_market("only-rice", Crop::Rice, 1000.0, 0.0, 0.0)],
            Vec::new(),
            HashMap::new(),
        );
        assert!(calculate_profits(&catalog, &input(Crop::Tea, 10.0, QuantityUnit::Quintals)).is_empty());
    }

    #[test]
    fn zero_price_leaves_margin_undefined() {
        let market = fixture_market("free", Crop::Jute, 0.0, 20.0, 5.0);
        let result = evaluate_market(&market, 10.0);
        assert_eq!(result.gross_revenue, 0.0);
        assert_eq!(result.net_profit, -(200.0 + 100.0));
        assert_eq!(result.profit_margin, None);
    }
}
