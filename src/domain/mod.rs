//! Market comparison logic lives here.

pub mod app_state;
pub mod calculation;
pub mod catalog;
pub mod entities;
pub mod history;
pub mod navigation;
pub mod recommendation;
pub mod storage;
pub mod validation;

#[allow(unused_imports)]
pub use app_state::{Analysis, AnalysisView, AppState, PersistedState, Preferences};
#[allow(unused_imports)]
pub use calculation::calculate_profits;
#[allow(unused_imports)]
pub use catalog::{weight_estimate, MarketCatalog};
#[allow(unused_imports)]
pub use entities::{
    AnalysisInput, CalculationResult, Crop, Location, Market, QuantityUnit, RiskLevel,
};
#[allow(unused_imports)]
pub use history::HistoryRecord;
#[allow(unused_imports)]
pub use navigation::navigation_url;
#[allow(unused_imports)]
pub use recommendation::{format_currency, format_number, recommendation_reason};
#[allow(unused_imports)]
pub use storage::{analyze_future_potential, FuturePotential};
#[allow(unused_imports)]
pub use validation::{validate_input, validate_record, FormInput, ValidationError};
