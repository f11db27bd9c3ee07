//! On-disk store for saved analyses.

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    validate_record, AnalysisInput, CalculationResult, HistoryRecord, MarketCatalog,
    ValidationError,
};

const HISTORY_FILENAME: &str = "history.json";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("record rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// JSON-file backed list of [`HistoryRecord`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the per-user data directory.
    pub fn open_default() -> Result<Self, HistoryError> {
        let base = dirs::data_local_dir()
            .ok_or(HistoryError::StorageUnavailable)?
            .join("mandi-profit-finder");
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(HISTORY_FILENAME)))
    }

    /// All records, newest first. A missing file is an empty history.
    pub fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let mut records = self.load()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Saves the winner of `results` with the full ranking. Returns `None`
    /// when there was nothing to save.
    pub fn record(
        &self,
        catalog: &MarketCatalog,
        input: &AnalysisInput,
        results: &[CalculationResult],
    ) -> Result<Option<HistoryRecord>, HistoryError> {
        let Some(record) = HistoryRecord::from_analysis(input, results) else {
            tracing::debug!(crop = %input.crop, "no markets ranked; skipping history");
            return Ok(None);
        };
        self.insert(catalog, record.clone())?;
        Ok(Some(record))
    }

    pub fn insert(&self, catalog: &MarketCatalog, record: HistoryRecord) -> Result<(), HistoryError> {
        validate_record(catalog, &record)?;
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Removes one record; `Ok(false)` when the id was not stored.
    pub fn delete(&self, id: Uuid) -> Result<bool, HistoryError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        self.save(&[])
    }

    /// Records in insertion order.
    pub fn load(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn save(&self, records: &[HistoryRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(records)?;
        // Rename is atomic on one filesystem; readers see the old or new file.
        let staging = self.staging_path();
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        tracing::info!(
            records = records.len(),
            path = %self.path.display(),
            "saved analysis history"
        );
        Ok(())
    }
}
