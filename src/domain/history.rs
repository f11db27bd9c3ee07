use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{
    entities::{AnalysisInput, CalculationResult, Crop, QuantityUnit},
    validation::{sanitize_text, MAX_TEXT_LENGTH},
};

/// One saved analysis: the winning market plus the full ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub crop: Crop,
    pub quantity: f64,
    pub quantity_unit: QuantityUnit,
    pub location: String,
    pub best_market: String,
    pub net_profit: f64,
    pub all_results: Vec<CalculationResult>,
}

impl HistoryRecord {
    /// Builds a record from a ranked result list; `None` when nothing ranked.
    pub fn from_analysis(input: &AnalysisInput, results: &[CalculationResult]) -> Option<Self> {
        let best = results.first()?;
        Some(Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            crop: input.crop,
            quantity: input.quantity,
            quantity_unit: input.unit,
            location: input.location_id.clone(),
            best_market: sanitize_text(&best.market.name, MAX_TEXT_LENGTH),
            net_profit: best.net_profit,
            all_results: results.to_vec(),
        })
    }

    pub fn created_label(&self) -> String {
        let format = time::macros::format_description!(
            "[day] [month repr:short] [year], [hour]:[minute]"
        );
        self.created_at
            .format(&format)
            .unwrap_or_else(|_| self.created_at.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{calculation::calculate_profits, catalog::MarketCatalog};

    #[test]
    fn record_keeps_winner_and_ranking() {
        let input = AnalysisInput {
            crop: Crop::Rice,
            quantity: 1.0,
            unit: QuantityUnit::Tons,
            location_id: "kothaguda".to_string(),
        };
        let results = calculate_profits(MarketCatalog::builtin(), &input);
        let record = HistoryRecord::from_analysis(&input, &results).unwrap();

        assert_eq!(record.best_market, "Gajwel Market");
        assert_eq!(record.net_profit, 20_850.0);
        assert_eq!(record.quantity_unit, QuantityUnit::Tons);
        assert_eq!(record.all_results.len(), 3);

        let json = serde_json::to_string(&record).unwrap();
        let restored: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, record.id);
        assert_eq!(restored.all_results, record.all_results);
    }

    #[test]
    fn empty_ranking_is_not_recorded() {
        let input = AnalysisInput {
            crop: Crop::Tea,
            quantity: 1.0,
            unit: QuantityUnit::Quintals,
            location_id: "kothaguda".to_string(),
        };
        assert!(HistoryRecord::from_analysis(&input, &[]).is_none());
    }
}
