use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bmi::BmiRecord;
use super::calorie::CalorieEntry;
use super::metabolic::BmrRecord;

/// Top-level persisted document holding all record collections
///
/// This is the entire on-disk state of the application: three append-only
/// collections serialized as one JSON object. All three keys must be
/// present in a persisted file; a document with any of them missing is
/// rejected on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthDocument {
    /// BMI measurements in append order
    pub bmi_records: Vec<BmiRecord>,

    /// Food-intake entries grouped by day, insertion order kept per day
    pub calorie_intake: BTreeMap<NaiveDate, Vec<CalorieEntry>>,

    /// Metabolic-rate measurements in append order
    pub bmr_records: Vec<BmrRecord>,
}

impl HealthDocument {
    /// Intake entries recorded for a day, in insertion order
    pub fn entries_for(&self, date: NaiveDate) -> &[CalorieEntry] {
        self.calorie_intake
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total calories recorded for a day, 0 when nothing was recorded
    pub fn total_intake(&self, date: NaiveDate) -> u32 {
        self.entries_for(date)
            .iter()
            .map(|entry| entry.calories)
            .sum()
    }

    /// As-of lookup of the daily energy expenditure governing a day
    ///
    /// Returns the TDEE of the most recent metabolic-rate record taken on
    /// or before the given day, or `None` when no such record exists. When
    /// several records share the winning date, the last-appended one wins.
    pub fn latest_tdee(&self, date: NaiveDate) -> Option<i32> {
        self.bmr_records
            .iter()
            .filter(|record| record.date <= date)
            .max_by_key(|record| record.date)
            .map(|record| record.tdee)
    }
}
