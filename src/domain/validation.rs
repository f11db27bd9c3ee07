//! Input-boundary checks for analyses and saved history records.

use thiserror::Error;

use super::{
    catalog::MarketCatalog,
    entities::{AnalysisInput, Crop, QuantityUnit},
    history::HistoryRecord,
};

/// Quantities must be strictly greater than this.
pub const MIN_QUANTITY: f64 = 0.01;
pub const MAX_QUANTITY: f64 = 10_000.0;
pub const MAX_TEXT_LENGTH: usize = 255;
pub const MAX_RESULTS: usize = 20;
/// Byte cap on the serialized result list of a history record.
pub const MAX_SERIALIZED_RESULTS: usize = 50_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("select a crop")]
    MissingCrop,
    #[error("invalid crop type: {0}")]
    UnknownCrop(String),
    #[error("no markets are known for {0}")]
    NoMarkets(Crop),
    #[error("select your location")]
    MissingLocation,
    #[error("invalid location: {0}")]
    UnknownLocation(String),
    #[error("quantity must be a number, got {0:?}")]
    QuantityNotANumber(String),
    #[error("quantity must be greater than 0.01")]
    QuantityTooSmall,
    #[error("quantity cannot exceed 10000")]
    QuantityTooLarge,
    #[error("best market is required")]
    MissingBestMarket,
    #[error("best market name too long")]
    BestMarketTooLong,
    #[error("net profit must be a valid number")]
    NonFiniteProfit,
    #[error("too many results ({0}, max 20)")]
    TooManyResults(usize),
    #[error("results too large ({0} bytes, max 50000)")]
    ResultsTooLarge(usize),
    #[error("results could not be serialized: {0}")]
    Unserializable(String),
}

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormInput {
    pub crop: String,
    pub quantity: String,
    pub unit: QuantityUnit,
    pub location_id: String,
}

/// Turns raw form values into an [`AnalysisInput`] the calculator can trust.
pub fn validate_input(
    catalog: &MarketCatalog,
    form: &FormInput,
) -> Result<AnalysisInput, ValidationError> {
    let crop = parse_crop(catalog, &form.crop)?;

    let location_id = form.location_id.trim();
    if location_id.is_empty() {
        return Err(ValidationError::MissingLocation);
    }
    check_location(catalog, location_id)?;

    let raw_quantity = form.quantity.trim();
    let quantity = raw_quantity
        .parse::<f64>()
        .map_err(|_| ValidationError::QuantityNotANumber(raw_quantity.to_string()))?;
    check_quantity(quantity)?;

    Ok(AnalysisInput {
        crop,
        quantity,
        unit: form.unit,
        location_id: location_id.to_string(),
    })
}

/// Checks a record before it is written to the history store.
pub fn validate_record(
    catalog: &MarketCatalog,
    record: &HistoryRecord,
) -> Result<(), ValidationError> {
    if !catalog.has_markets(record.crop) {
        return Err(ValidationError::NoMarkets(record.crop));
    }
    check_location(catalog, &record.location)?;
    check_quantity(record.quantity)?;

    if record.best_market.trim().is_empty() {
        return Err(ValidationError::MissingBestMarket);
    }
    if record.best_market.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::BestMarketTooLong);
    }
    if !record.net_profit.is_finite() {
        return Err(ValidationError::NonFiniteProfit);
    }
    if record.all_results.len() > MAX_RESULTS {
        return Err(ValidationError::TooManyResults(record.all_results.len()));
    }

    let size = serde_json::to_vec(&record.all_results)
        .map_err(|err| ValidationError::Unserializable(err.to_string()))?
        .len();
    if size > MAX_SERIALIZED_RESULTS {
        return Err(ValidationError::ResultsTooLarge(size));
    }

    Ok(())
}

/// Trims and caps free text at `max_chars` characters.
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    input.trim().chars().take(max_chars).collect()
}

fn parse_crop(catalog: &MarketCatalog, raw: &str) -> Result<Crop, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingCrop);
    }
    let crop = raw
        .parse::<Crop>()
        .map_err(|err| ValidationError::UnknownCrop(err.0))?;
    if !catalog.has_markets(crop) {
        return Err(ValidationError::NoMarkets(crop));
    }
    Ok(crop)
}

fn check_location(catalog: &MarketCatalog, id: &str) -> Result<(), ValidationError> {
    catalog
        .location(id)
        .map(|_| ())
        .ok_or_else(|| ValidationError::UnknownLocation(id.to_string()))
}

fn check_quantity(quantity: f64) -> Result<(), ValidationError> {
    if quantity.is_nan() || quantity <= MIN_QUANTITY {
        return Err(ValidationError::QuantityTooSmall);
    }
    if quantity > MAX_QUANTITY {
        return Err(ValidationError::QuantityTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculation::calculate_profits;

    fn form(crop: &str, quantity: &str, location: &str) -> FormInput {
        FormInput {
            crop: crop.to_string(),
            quantity: quantity.to_string(),
            unit: QuantityUnit::Quintals,
            location_id: location.to_string(),
        }
    }

    fn record() -> HistoryRecord {
        let input = AnalysisInput {
            crop: Crop::Pulses,
            quantity: 12.0,
            unit: QuantityUnit::Quintals,
            location_id: "shamshabad".to_string(),
        };
        let results = calculate_profits(MarketCatalog::builtin(), &input);
        HistoryRecord::from_analysis(&input, &results).unwrap()
    }

    #[test]
    fn accepts_complete_form() {
        let input = validate_input(MarketCatalog::builtin(), &form(" rice ", "10", "kothaguda")).unwrap();
        assert_eq!(input.crop, Crop::Rice);
        assert_eq!(input.quantity, 10.0);
        assert_eq!(input.location_id, "kothaguda");
    }

    #[test]
    fn rejects_missing_and_unknown_fields() {
        let catalog = MarketCatalog::builtin();
        assert_eq!(
            validate_input(catalog, &form("", "10", "kothaguda")),
            Err(ValidationError::MissingCrop)
        );
        assert_eq!(
            validate_input(catalog, &form("Barley", "10", "kothaguda")),
            Err(ValidationError::UnknownCrop("Barley".to_string()))
        );
        assert_eq!(
            validate_input(catalog, &form("Rice", "10", "")),
            Err(ValidationError::MissingLocation)
        );
        assert_eq!(
            validate_input(catalog, &form("Rice", "10", "mars")),
            Err(ValidationError::UnknownLocation("mars".to_string()))
        );
    }

    #[test]
    fn enforces_quantity_bounds() {
        let catalog = MarketCatalog::builtin();
        for bad in ["0", "-3", "0.01", "NaN"] {
            assert_eq!(
                validate_input(catalog, &form("Rice", bad, "kothaguda")),
                Err(ValidationError::QuantityTooSmall),
                "{bad}"
            );
        }
        assert_eq!(
            validate_input(catalog, &form("Rice", "10000.5", "kothaguda")),
            Err(ValidationError::QuantityTooLarge)
        );
        assert_eq!(
            validate_input(catalog, &form("Rice", "ten", "kothaguda")),
            Err(ValidationError::QuantityNotANumber("ten".to_string()))
        );
        assert!(validate_input(catalog, &form("Rice", "10000", "kothaguda")).is_ok());
        assert!(validate_input(catalog, &form("Rice", "0.02", "kothaguda")).is_ok());
    }

    #[test]
    fn crop_without_markets_is_rejected() {
        let empty = MarketCatalog::default();
        assert_eq!(
            validate_input(&empty, &form("Rice", "10", "kothaguda")),
            Err(ValidationError::NoMarkets(Crop::Rice))
        );
    }

    #[test]
    fn accepts_calculated_record() {
        assert_eq!(validate_record(MarketCatalog::builtin(), &record()), Ok(()));
    }

    #[test]
    fn rejects_oversized_records() {
        let catalog = MarketCatalog::builtin();

        let mut too_many = record();
        let filler = too_many.all_results[0].clone();
        too_many.all_results = vec![filler.clone(); MAX_RESULTS + 1];
        assert_eq!(
            validate_record(catalog, &too_many),
            Err(ValidationError::TooManyResults(MAX_RESULTS + 1))
        );

        let mut too_large = record();
        let mut bloated = filler;
        bloated.market.operating_hours = "x".repeat(5_000);
        too_large.all_results = vec![bloated; MAX_RESULTS];
        assert!(matches!(
            validate_record(catalog, &too_large),
            Err(ValidationError::ResultsTooLarge(_))
        ));
    }

    #[test]
    fn rejects_bad_record_fields() {
        let catalog = MarketCatalog::builtin();

        let mut blank = record();
        blank.best_market = "  ".to_string();
        assert_eq!(validate_record(catalog, &blank), Err(ValidationError::MissingBestMarket));

        let mut long_name = record();
        long_name.best_market = "m".repeat(MAX_TEXT_LENGTH + 1);
        assert_eq!(validate_record(catalog, &long_name), Err(ValidationError::BestMarketTooLong));

        let mut infinite = record();
        infinite.net_profit = f64::INFINITY;
        assert_eq!(validate_record(catalog, &infinite), Err(ValidationError::NonFiniteProfit));
    }

    #[test]
    fn sanitize_trims_and_truncates() {
        assert_eq!(sanitize_text("  Ramesh Kumar  ", 100), "Ramesh Kumar");
        assert_eq!(sanitize_text(" Bowenpally ", 4), "Bowe");
    }
}
