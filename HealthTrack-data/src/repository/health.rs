use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{BmiRecord, BmrRecord, CalorieEntry};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::FileStorage;

/// Repository trait for health metric records
pub trait HealthRecordRepositoryTrait {
    /// Append a BMI record
    fn append_bmi(&self, record: BmiRecord) -> Result<BmiRecord, RepositoryError>;

    /// Append a metabolic-rate record
    fn append_bmr(&self, record: BmrRecord) -> Result<BmrRecord, RepositoryError>;

    /// Append a food-intake entry under its date
    fn append_intake(
        &self,
        date: NaiveDate,
        entry: CalorieEntry,
    ) -> Result<CalorieEntry, RepositoryError>;

    /// Get all BMI records in append order
    fn bmi_records(&self) -> Result<Vec<BmiRecord>, RepositoryError>;

    /// Get all metabolic-rate records in append order
    fn bmr_records(&self) -> Result<Vec<BmrRecord>, RepositoryError>;

    /// Get the intake entries recorded for a day, in insertion order
    fn entries_for(&self, date: NaiveDate) -> Result<Vec<CalorieEntry>, RepositoryError>;

    /// Get the total calories recorded for a day, 0 when none
    fn total_intake(&self, date: NaiveDate) -> Result<u32, RepositoryError>;

    /// Get the TDEE of the most recent metabolic-rate record on or before a day
    fn latest_tdee(&self, date: NaiveDate) -> Result<Option<i32>, RepositoryError>;
}

/// Repository for health metric records.
/// Keeps the whole document in memory and rewrites the backing file in
/// full after every append. Without file backing it acts as a purely
/// in-memory store.
#[derive(Debug, Clone, Default)]
pub struct HealthRecordRepository {
    /// In-memory working copy of the document
    storage: InMemoryStorage,

    /// File backing, absent for in-memory repositories
    file: Option<FileStorage>,
}

impl HealthRecordRepository {
    /// Open a file-backed repository, loading the document once
    ///
    /// A missing file starts the repository empty; a malformed file is a
    /// fatal startup error so the user's data is never overwritten by the
    /// next save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let file = FileStorage::new(path.as_ref());
        let document = file.load()?;

        Ok(Self {
            storage: InMemoryStorage::from_document(document),
            file: Some(file),
        })
    }

    /// Create a repository without file backing
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Rewrite the backing file from the in-memory document
    fn persist(&self) -> Result<(), RepositoryError> {
        if let Some(file) = &self.file {
            file.save(&self.storage.snapshot()?)?;
        }
        Ok(())
    }
}

impl HealthRecordRepositoryTrait for HealthRecordRepository {
    fn append_bmi(&self, record: BmiRecord) -> Result<BmiRecord, RepositoryError> {
        debug!("Appending BMI record dated {}", record.date);
        let record = self.storage.append_bmi(record)?;
        self.persist()?;
        Ok(record)
    }

    fn append_bmr(&self, record: BmrRecord) -> Result<BmrRecord, RepositoryError> {
        debug!("Appending metabolic-rate record dated {}", record.date);
        let record = self.storage.append_bmr(record)?;
        self.persist()?;
        Ok(record)
    }

    fn append_intake(
        &self,
        date: NaiveDate,
        entry: CalorieEntry,
    ) -> Result<CalorieEntry, RepositoryError> {
        debug!("Appending intake entry for {}: {}", date, entry.food);
        let entry = self.storage.append_intake(date, entry)?;
        self.persist()?;
        Ok(entry)
    }

    fn bmi_records(&self) -> Result<Vec<BmiRecord>, RepositoryError> {
        self.storage.bmi_records()
    }

    fn bmr_records(&self) -> Result<Vec<BmrRecord>, RepositoryError> {
        self.storage.bmr_records()
    }

    fn entries_for(&self, date: NaiveDate) -> Result<Vec<CalorieEntry>, RepositoryError> {
        self.storage.entries_for(date)
    }

    fn total_intake(&self, date: NaiveDate) -> Result<u32, RepositoryError> {
        self.storage.total_intake(date)
    }

    fn latest_tdee(&self, date: NaiveDate) -> Result<Option<i32>, RepositoryError> {
        self.storage.latest_tdee(date)
    }
}
