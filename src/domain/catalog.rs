//! Read-only market data: markets per crop, home locations and storage profiles.

use std::{collections::HashMap, sync::OnceLock};

use super::{
    entities::{Coordinates, Crop, Location, Market, QuantityUnit, RiskLevel},
    storage::StorageProfile,
};

/// Immutable table every calculation reads from.
///
/// The built-in Telangana table is available through [`MarketCatalog::builtin`];
/// tests and alternative regions construct their own with [`MarketCatalog::new`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketCatalog {
    markets: Vec<Market>,
    locations: Vec<Location>,
    storage: HashMap<Crop, StorageProfile>,
}

impl MarketCatalog {
    pub fn new(
        markets: Vec<Market>,
        locations: Vec<Location>,
        storage: HashMap<Crop, StorageProfile>,
    ) -> Self {
        Self {
            markets,
            locations,
            storage,
        }
    }

    pub fn builtin() -> &'static MarketCatalog {
        static CATALOG: OnceLock<MarketCatalog> = OnceLock::new();
        CATALOG.get_or_init(telangana)
    }

    /// Markets buying `crop`, in catalog order.
    pub fn markets_for(&self, crop: Crop) -> impl Iterator<Item = &Market> + '_ {
        self.markets.iter().filter(move |market| market.crop == crop)
    }

    pub fn market(&self, id: &str) -> Option<&Market> {
        self.markets.iter().find(|market| market.id == id)
    }

    pub fn has_markets(&self, crop: Crop) -> bool {
        self.markets_for(crop).next().is_some()
    }

    /// Crops with at least one market.
    pub fn crops(&self) -> Vec<Crop> {
        Crop::ALL
            .into_iter()
            .filter(|crop| self.has_markets(*crop))
            .collect()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn storage_profile(&self, crop: Crop) -> Option<&StorageProfile> {
        self.storage.get(&crop)
    }
}

/// Rough vehicle size for a load, shown under the quantity field.
pub fn weight_estimate(quantity: f64, unit: QuantityUnit) -> String {
    let quintals = unit.to_quintals(quantity);
    if quintals <= 5.0 {
        "About 1 small tempo load".to_string()
    } else if quintals <= 15.0 {
        "About 1 mini-truck (2 ton)".to_string()
    } else if quintals <= 40.0 {
        "About 1 standard truck (4 ton)".to_string()
    } else if quintals <= 100.0 {
        "About 1 large truck (10 ton)".to_string()
    } else {
        format!("About {} large truck loads", (quintals / 100.0).ceil())
    }
}

const FARM: Coordinates = Coordinates::new(17.4526, 78.3792);

#[allow(clippy::too_many_arguments)]
fn market(
    id: &str,
    name: &str,
    crop: Crop,
    price_per_quintal: f64,
    distance_km: f64,
    transport_rate_per_km: f64,
    loading_fee_per_quintal: f64,
    risk: RiskLevel,
    coordinates: Coordinates,
    operating_hours: &str,
) -> Market {
    Market {
        id: id.to_string(),
        name: name.to_string(),
        crop,
        price_per_quintal,
        distance_km,
        transport_rate_per_km,
        loading_fee_per_quintal,
        risk,
        coordinates,
        operating_hours: operating_hours.to_string(),
    }
}

fn farm_gate(id: &str, crop: Crop, price_per_quintal: f64, loading_fee: f64) -> Market {
    market(
        id,
        "Farm Gate Pickup",
        crop,
        price_per_quintal,
        0.0,
        0.0,
        loading_fee,
        RiskLevel::Low,
        FARM,
        "On Demand",
    )
}

fn location(id: &str, name: &str, latitude: f64, longitude: f64) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        coordinates: Coordinates::new(latitude, longitude),
    }
}

fn telangana() -> MarketCatalog {
    use Crop::*;
    use RiskLevel::{High, Low, Medium};

    let markets = vec![
        market("rice-bowenpally", "Bowenpally Mandi", Rice, 2400.0, 40.0, 35.0, 50.0, Low, Coordinates::new(17.4725, 78.4469), "6:00 AM - 6:00 PM"),
        market("rice-gajwel", "Gajwel Market", Rice, 2200.0, 15.0, 25.0, 40.0, Low, Coordinates::new(17.8535, 78.6826), "7:00 AM - 5:00 PM"),
        farm_gate("rice-farmgate", Rice, 1900.0, 20.0),
        market("wheat-erragadda", "Erragadda Market", Wheat, 2800.0, 35.0, 32.0, 45.0, Low, Coordinates::new(17.4532, 78.4276), "6:00 AM - 5:00 PM"),
        market("wheat-nizamabad", "Nizamabad APMC", Wheat, 2950.0, 175.0, 28.0, 55.0, High, Coordinates::new(18.6725, 78.0940), "5:00 AM - 4:00 PM"),
        farm_gate("wheat-farmgate", Wheat, 2500.0, 20.0),
        market("millets-sangareddy", "Sangareddy Mandi", Millets, 3200.0, 55.0, 30.0, 40.0, Medium, Coordinates::new(17.6249, 78.0866), "6:00 AM - 5:00 PM"),
        market("millets-mahbubnagar", "Mahbubnagar APMC", Millets, 3400.0, 100.0, 28.0, 50.0, Medium, Coordinates::new(16.7372, 77.9850), "5:30 AM - 4:30 PM"),
        farm_gate("millets-farmgate", Millets, 2800.0, 20.0),
        market("maize-karimnagar", "Karimnagar Yard", Maize, 2100.0, 165.0, 26.0, 45.0, High, Coordinates::new(18.4386, 79.1288), "6:00 AM - 6:00 PM"),
        market("maize-medak", "Medak Market", Maize, 1950.0, 95.0, 28.0, 40.0, Medium, Coordinates::new(18.0459, 78.2641), "5:30 AM - 5:00 PM"),
        farm_gate("maize-farmgate", Maize, 1700.0, 20.0),
        market("pulses-adilabad", "Adilabad APMC", Pulses, 7200.0, 300.0, 25.0, 60.0, High, Coordinates::new(19.6641, 78.5320), "5:00 AM - 4:00 PM"),
        market("pulses-bowenpally", "Bowenpally Mandi", Pulses, 6800.0, 40.0, 35.0, 50.0, Low, Coordinates::new(17.4725, 78.4469), "6:00 AM - 6:00 PM"),
        farm_gate("pulses-farmgate", Pulses, 6200.0, 25.0),
        market("sugarcane-nizam", "Nizam Sugar Factory", Sugarcane, 350.0, 120.0, 22.0, 30.0, Medium, Coordinates::new(17.9932, 79.5587), "24/7 during season"),
        market("sugarcane-medak", "Medak Cooperative", Sugarcane, 320.0, 95.0, 24.0, 25.0, Medium, Coordinates::new(18.0459, 78.2641), "6:00 AM - 8:00 PM"),
        farm_gate("sugarcane-farmgate", Sugarcane, 280.0, 15.0),
        market("cotton-adilabad", "Adilabad Cotton Yard", Cotton, 6500.0, 300.0, 25.0, 70.0, High, Coordinates::new(19.6641, 78.5320), "5:00 AM - 5:00 PM"),
        market("cotton-warangal", "Warangal CCI", Cotton, 6200.0, 140.0, 28.0, 60.0, Medium, Coordinates::new(17.9689, 79.5941), "6:00 AM - 6:00 PM"),
        farm_gate("cotton-farmgate", Cotton, 5800.0, 30.0),
        market("jute-kolkata", "Kolkata Jute Mills", Jute, 5500.0, 1500.0, 18.0, 80.0, High, Coordinates::new(22.5726, 88.3639), "8:00 AM - 5:00 PM"),
        market("jute-visakhapatnam", "Vizag Port Yard", Jute, 5000.0, 620.0, 20.0, 65.0, High, Coordinates::new(17.6868, 83.2185), "6:00 AM - 6:00 PM"),
        farm_gate("jute-farmgate", Jute, 4200.0, 25.0),
        market("oilseeds-kurnool", "Kurnool Oil Market", Oilseeds, 5800.0, 210.0, 26.0, 55.0, High, Coordinates::new(15.8281, 78.0373), "5:00 AM - 5:00 PM"),
        market("oilseeds-secunderabad", "Secunderabad Market", Oilseeds, 5400.0, 30.0, 32.0, 45.0, Low, Coordinates::new(17.4399, 78.4983), "6:00 AM - 6:00 PM"),
        farm_gate("oilseeds-farmgate", Oilseeds, 4900.0, 25.0),
        market("tea-nilgiris", "Nilgiris Auction", Tea, 18000.0, 750.0, 22.0, 100.0, High, Coordinates::new(11.4102, 76.6950), "Auction Days Only"),
        market("tea-coimbatore", "Coimbatore Tea Market", Tea, 16500.0, 680.0, 24.0, 90.0, High, Coordinates::new(11.0168, 76.9558), "7:00 AM - 4:00 PM"),
        farm_gate("tea-farmgate", Tea, 14000.0, 40.0),
    ];

    let locations = vec![
        location("kothaguda", "Kothaguda", 17.4526, 78.3792),
        location("shamshabad", "Shamshabad", 17.2403, 78.4294),
        location("warangal", "Warangal", 17.9689, 79.5941),
    ];

    // (volatility multiplier, loss per period, storage INR per quintal)
    let storage = [
        (Rice, 1.08, 0.02, 40.0),
        (Wheat, 1.10, 0.015, 35.0),
        (Millets, 1.06, 0.03, 30.0),
        (Maize, 1.07, 0.04, 30.0),
        (Pulses, 1.12, 0.02, 50.0),
        (Sugarcane, 1.00, 0.08, 20.0),
        (Cotton, 1.09, 0.01, 45.0),
        (Jute, 1.05, 0.02, 40.0),
        (Oilseeds, 1.10, 0.03, 45.0),
        (Tea, 1.04, 0.06, 120.0),
    ]
    .into_iter()
    .map(|(crop, volatility_multiplier, loss_rate_per_period, storage_cost_per_quintal)| {
        (
            crop,
            StorageProfile {
                volatility_multiplier,
                loss_rate_per_period,
                storage_cost_per_quintal,
            },
        )
    })
    .collect();

    MarketCatalog::new(markets, locations, storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_markets_per_crop() {
        let catalog = MarketCatalog::builtin();
        for crop in Crop::ALL {
            assert_eq!(catalog.markets_for(crop).count(), 3, "{crop}");
            assert!(catalog.storage_profile(crop).is_some(), "{crop}");
        }
        assert_eq!(catalog.crops(), Crop::ALL.to_vec());
    }

    #[test]
    fn every_crop_has_a_farm_gate_option() {
        let catalog = MarketCatalog::builtin();
        for crop in Crop::ALL {
            let farm_gate = catalog
                .markets_for(crop)
                .find(|market| market.is_farm_gate())
                .expect("farm gate market");
            assert_eq!(farm_gate.transport_rate_per_km, 0.0);
            assert_eq!(farm_gate.name, "Farm Gate Pickup");
        }
    }

    #[test]
    fn lookups_by_id() {
        let catalog = MarketCatalog::builtin();
        assert_eq!(
            catalog.market("rice-gajwel").map(|m| m.name.as_str()),
            Some("Gajwel Market")
        );
        assert!(catalog.market("rice-nowhere").is_none());
        assert_eq!(
            catalog.location("warangal").map(|l| l.name.as_str()),
            Some("Warangal")
        );
        assert!(catalog.location("atlantis").is_none());
    }

    #[test]
    fn empty_catalog_lists_no_crops() {
        let catalog = MarketCatalog::default();
        assert!(catalog.crops().is_empty());
        assert!(!catalog.has_markets(Crop::Rice));
    }

    #[test]
    fn weight_estimate_buckets() {
        assert_eq!(weight_estimate(5.0, QuantityUnit::Quintals), "About 1 small tempo load");
        assert_eq!(weight_estimate(1.0, QuantityUnit::Tons), "About 1 mini-truck (2 ton)");
        assert_eq!(weight_estimate(40.0, QuantityUnit::Quintals), "About 1 standard truck (4 ton)");
        assert_eq!(weight_estimate(10.0, QuantityUnit::Tons), "About 1 large truck (10 ton)");
        assert_eq!(weight_estimate(250.0, QuantityUnit::Quintals), "About 3 large truck loads");
    }
}
