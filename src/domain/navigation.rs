//! Driving-directions links from the farmer's village to a market.

use url::Url;

use super::entities::{CalculationResult, Coordinates, Location};

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

pub fn maps_url(origin: Coordinates, destination: Coordinates) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{DIRECTIONS_BASE}?api=1&origin={},{}&destination={},{}&travelmode=driving",
        origin.latitude, origin.longitude, destination.latitude, destination.longitude
    ))
}

/// Directions to the market of `result`, or `None` for farm-gate sales and
/// unknown origins.
pub fn navigation_url(result: &CalculationResult, origin: Option<&Location>) -> Option<Url> {
    if result.market.is_farm_gate() {
        return None;
    }
    let origin = origin?;
    match maps_url(origin.coordinates, result.market.coordinates) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(market = %result.market.id, "failed to build directions link: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{
        calculation::calculate_profits,
        catalog::MarketCatalog,
        entities::{AnalysisInput, Crop, Market, QuantityUnit, RiskLevel},
    };

    #[test]
    fn builds_templated_driving_link() {
        let url = maps_url(
            Coordinates::new(17.4526, 78.3792),
            Coordinates::new(17.4725, 78.4469),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.google.com/maps/dir/?api=1&origin=17.4526,78.3792&destination=17.4725,78.4469&travelmode=driving"
        );
    }

    #[test]
    fn links_real_markets_from_known_origin() {
        let catalog = MarketCatalog::builtin();
        let input = AnalysisInput {
            crop: Crop::Rice,
            quantity: 10.0,
            unit: QuantityUnit::Quintals,
            location_id: "warangal".to_string(),
        };
        let results = calculate_profits(catalog, &input);
        let origin = catalog.location(&input.location_id);

        let winner_link = navigation_url(&results[0], origin).unwrap();
        assert!(winner_link.as_str().contains("origin=17.9689,79.5941"));
        assert!(navigation_url(&results[0], None).is_none());
    }

    #[test]
    fn farm_gate_only_crop_never_links() {
        let farm_gate = Market {
            id: "tea-farmgate".to_string(),
            name: "Farm Gate Pickup".to_string(),
            crop: Crop::Tea,
            price_per_quintal: 14_000.0,
            distance_km: 0.0,
            transport_rate_per_km: 0.0,
            loading_fee_per_quintal: 40.0,
            risk: RiskLevel::Low,
            coordinates: Coordinates::new(17.4526, 78.3792),
            operating_hours: "On Demand".to_string(),
        };
        let fixture = MarketCatalog::new(
            vec![farm_gate],
            MarketCatalog::builtin().locations().to_vec(),
            HashMap::new(),
        );
        let input = AnalysisInput {
            crop: Crop::Tea,
            quantity: 3.0,
            unit: QuantityUnit::Tons,
            location_id: "kothaguda".to_string(),
        };

        let results = calculate_profits(&fixture, &input);
        assert_eq!(results.len(), 1);
        for location in fixture.locations() {
            assert!(results
                .iter()
                .all(|result| navigation_url(result, Some(location)).is_none()));
        }
    }
}
