use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Quintals per ton. The app treats a ton as ten quintals.
pub const QUINTALS_PER_TON: f64 = 10.0;

/// Markets farther than this (km) are flagged as high risk at query time.
pub const HIGH_RISK_DISTANCE_KM: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Wheat,
    Millets,
    Maize,
    Pulses,
    Sugarcane,
    Cotton,
    Jute,
    Oilseeds,
    Tea,
}

impl Crop {
    pub const ALL: [Crop; 10] = [
        Crop::Rice,
        Crop::Wheat,
        Crop::Millets,
        Crop::Maize,
        Crop::Pulses,
        Crop::Sugarcane,
        Crop::Cotton,
        Crop::Jute,
        Crop::Oilseeds,
        Crop::Tea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Millets => "Millets",
            Crop::Maize => "Maize",
            Crop::Pulses => "Pulses",
            Crop::Sugarcane => "Sugarcane",
            Crop::Cotton => "Cotton",
            Crop::Jute => "Jute",
            Crop::Oilseeds => "Oilseeds",
            Crop::Tea => "Tea",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Crop::Rice | Crop::Wheat => "🌾",
            Crop::Millets => "🌿",
            Crop::Maize => "🌽",
            Crop::Pulses => "🫘",
            Crop::Sugarcane => "🎋",
            Crop::Cotton => "☁️",
            Crop::Jute => "🧵",
            Crop::Oilseeds => "🥜",
            Crop::Tea => "🍵",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown crop: {0}")]
pub struct UnknownCrop(pub String);

impl FromStr for Crop {
    type Err = UnknownCrop;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCrop(trimmed.to_string()))
    }
}

/// Qualitative risk label. Catalog markets carry one; storage analysis derives one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place that buys one crop. Prices and fees are in INR.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub name: String,
    pub crop: Crop,
    pub price_per_quintal: f64,
    /// Zero marks a farm-gate pickup: no transport, no navigation.
    pub distance_km: f64,
    pub transport_rate_per_km: f64,
    pub loading_fee_per_quintal: f64,
    pub risk: RiskLevel,
    pub coordinates: Coordinates,
    pub operating_hours: String,
}

impl Market {
    pub fn is_farm_gate(&self) -> bool {
        self.distance_km == 0.0
    }
}

/// A farmer's home village, used as the origin for directions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    #[default]
    Quintals,
    Tons,
}

impl QuantityUnit {
    pub fn label(&self) -> &'static str {
        match self {
            QuantityUnit::Quintals => "quintals",
            QuantityUnit::Tons => "tons",
        }
    }

    /// Converts a quantity in this unit to quintals.
    pub fn to_quintals(&self, quantity: f64) -> f64 {
        match self {
            QuantityUnit::Quintals => quantity,
            QuantityUnit::Tons => quantity * QUINTALS_PER_TON,
        }
    }
}

impl FromStr for QuantityUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quintals" | "quintal" | "qtl" => Ok(QuantityUnit::Quintals),
            "tons" | "ton" => Ok(QuantityUnit::Tons),
            other => Err(format!("invalid quantity unit: {other}")),
        }
    }
}

/// A fully populated request for a market comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub crop: Crop,
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub location_id: String,
}

impl AnalysisInput {
    pub fn quantity_in_quintals(&self) -> f64 {
        self.unit.to_quintals(self.quantity)
    }
}

/// Outcome of selling the whole quantity at one market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub market: Market,
    pub gross_revenue: f64,
    pub transport_cost: f64,
    pub loading_cost: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    /// `None` when gross revenue is zero and the margin is undefined.
    pub profit_margin: Option<f64>,
    pub is_high_risk: bool,
}
