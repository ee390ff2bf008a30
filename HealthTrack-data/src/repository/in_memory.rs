use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::models::{BmiRecord, BmrRecord, CalorieEntry, HealthDocument};
use super::errors::RepositoryError;

/// In-memory working copy of the health document
///
/// All reads and appends go through this copy; the single mutex matches
/// the one-writer model of the application.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    document: Arc<Mutex<HealthDocument>>,
}

impl InMemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store seeded with a loaded document
    pub fn from_document(document: HealthDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Append a BMI record
    pub fn append_bmi(&self, record: BmiRecord) -> Result<BmiRecord, RepositoryError> {
        let mut document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        document.bmi_records.push(record.clone());
        Ok(record)
    }

    /// Append a metabolic-rate record
    pub fn append_bmr(&self, record: BmrRecord) -> Result<BmrRecord, RepositoryError> {
        let mut document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        document.bmr_records.push(record.clone());
        Ok(record)
    }

    /// Append an intake entry under its date key, creating the key if absent
    pub fn append_intake(
        &self,
        date: NaiveDate,
        entry: CalorieEntry,
    ) -> Result<CalorieEntry, RepositoryError> {
        let mut document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        document
            .calorie_intake
            .entry(date)
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    /// Get all BMI records in append order
    pub fn bmi_records(&self) -> Result<Vec<BmiRecord>, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.bmi_records.clone())
    }

    /// Get all metabolic-rate records in append order
    pub fn bmr_records(&self) -> Result<Vec<BmrRecord>, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.bmr_records.clone())
    }

    /// Get the intake entries recorded for a day
    pub fn entries_for(&self, date: NaiveDate) -> Result<Vec<CalorieEntry>, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.entries_for(date).to_vec())
    }

    /// Get the total calories recorded for a day
    pub fn total_intake(&self, date: NaiveDate) -> Result<u32, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.total_intake(date))
    }

    /// As-of lookup of the TDEE governing a day
    pub fn latest_tdee(&self, date: NaiveDate) -> Result<Option<i32>, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.latest_tdee(date))
    }

    /// Clone of the current document, for persistence
    pub fn snapshot(&self) -> Result<HealthDocument, RepositoryError> {
        let document = self.document.lock().map_err(|e| RepositoryError::Lock(e.to_string()))?;
        Ok(document.clone())
    }
}
