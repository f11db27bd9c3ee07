use serde::{Deserialize, Serialize};

use super::{
    entities::{AnalysisInput, CalculationResult, QuantityUnit},
    history::HistoryRecord,
    validation::FormInput,
};

/// Defaults applied to a fresh analysis form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub default_location: Option<String>,
    #[serde(default)]
    pub default_unit: QuantityUnit,
}

/// Where the analyze page currently is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisView {
    #[default]
    Input,
    Loading,
    Results(Analysis),
}

/// A finished comparison kept until the next query replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub input: AnalysisInput,
    pub results: Vec<CalculationResult>,
}

impl Analysis {
    pub fn winner(&self) -> Option<&CalculationResult> {
        self.results.first()
    }

    pub fn runner_up(&self) -> Option<&CalculationResult> {
        self.results.get(1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub preferences: Preferences,
    pub form: FormInput,
    pub is_harvested: bool,
    pub view: AnalysisView,
    pub history: Vec<HistoryRecord>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            preferences: Preferences::default(),
            form: FormInput {
                quantity: "10".to_string(),
                ..FormInput::default()
            },
            is_harvested: true,
            view: AnalysisView::Input,
            history: Vec::new(),
        }
    }
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.preferences = persisted.preferences;
        self.reset_form();
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            preferences: self.preferences.clone(),
        }
    }

    /// Stores new defaults. The current form and results are left alone; the
    /// next [`AppState::reset_form`] picks them up.
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Back to an empty form seeded from the preferences.
    pub fn reset_form(&mut self) {
        self.form = FormInput {
            crop: String::new(),
            quantity: "10".to_string(),
            unit: self.preferences.default_unit,
            location_id: self.preferences.default_location.clone().unwrap_or_default(),
        };
        self.is_harvested = true;
        self.view = AnalysisView::Input;
    }

    /// The analyze button stays disabled until this holds.
    pub fn form_complete(&self) -> bool {
        !self.form.crop.trim().is_empty()
            && !self.form.location_id.trim().is_empty()
            && self
                .form
                .quantity
                .trim()
                .parse::<f64>()
                .map(|q| q > 0.0)
                .unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Crop;

    #[test]
    fn reset_form_uses_preferences() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState {
            preferences: Preferences {
                default_location: Some("warangal".to_string()),
                default_unit: QuantityUnit::Tons,
            },
        });
        state.form.crop = "Rice".to_string();
        state.view = AnalysisView::Loading;

        state.reset_form();
        assert_eq!(state.form.crop, "");
        assert_eq!(state.form.quantity, "10");
        assert_eq!(state.form.unit, QuantityUnit::Tons);
        assert_eq!(state.form.location_id, "warangal");
        assert_eq!(state.view, AnalysisView::Input);
    }

    #[test]
    fn saving_preferences_keeps_current_analysis() {
        let mut state = AppState::default();
        state.form.crop = "Rice".to_string();
        state.form.location_id = "kothaguda".to_string();
        state.is_harvested = false;
        let analysis = Analysis {
            input: AnalysisInput {
                crop: Crop::Rice,
                quantity: 10.0,
                unit: QuantityUnit::Quintals,
                location_id: "kothaguda".to_string(),
            },
            results: Vec::new(),
        };
        state.view = AnalysisView::Results(analysis.clone());

        state.set_preferences(Preferences {
            default_location: Some("warangal".to_string()),
            default_unit: QuantityUnit::Tons,
        });

        assert_eq!(state.view, AnalysisView::Results(analysis));
        assert_eq!(state.form.crop, "Rice");
        assert_eq!(state.form.location_id, "kothaguda");
        assert_eq!(state.form.unit, QuantityUnit::Quintals);
        assert!(!state.is_harvested);

        state.reset_form();
        assert_eq!(state.form.location_id, "warangal");
        assert_eq!(state.form.unit, QuantityUnit::Tons);
    }

    #[test]
    fn form_completeness() {
        let mut state = AppState::default();
        assert!(!state.form_complete());
        state.form.crop = "Maize".to_string();
        state.form.location_id = "kothaguda".to_string();
        assert!(state.form_complete());
        state.form.quantity = "0".to_string();
        assert!(!state.form_complete());
    }
}
