use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::entities::{
    BalanceReport, BmiRecord, BmrRecord, CalorieEntry, CreateBmiRequest, CreateBmrRequest,
    CreateCalorieEntryRequest, DailyIntake,
};
use crate::services::balance::calorie_balance;
use crate::services::metrics::{
    basal_metabolic_rate, body_mass_index, classify_bmi, total_daily_energy_expenditure,
};
use health_track_data::repository::{HealthRecordRepositoryTrait, RepositoryError};

/// Health tracking service errors
#[derive(Debug, Error)]
pub enum HealthServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Insufficient data error
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Health tracking service for domain logic
///
/// Validates incoming requests, derives the stored record fields, and
/// drives the repository. Validation failures are reported before any
/// mutation takes place.
pub struct HealthTracker<R: HealthRecordRepositoryTrait> {
    repository: R,
}

impl<R: HealthRecordRepositoryTrait> HealthTracker<R> {
    /// Create a new health tracking service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Record a BMI measurement stamped with today's date
    pub fn record_bmi(&self, request: CreateBmiRequest) -> Result<BmiRecord, HealthServiceError> {
        self.validate_bmi_request(&request)?;
        debug!("Recording BMI measurement");

        let bmi = body_mass_index(request.weight, request.height);
        let record = BmiRecord {
            date: today(),
            weight: request.weight,
            height: request.height,
            bmi,
            category: classify_bmi(bmi),
        };

        self.repository
            .append_bmi(record)
            .map_err(|e| self.map_repo_error(e))
    }

    /// Record a metabolic-rate measurement stamped with today's date
    pub fn record_metabolic_rate(
        &self,
        request: CreateBmrRequest,
    ) -> Result<BmrRecord, HealthServiceError> {
        self.validate_bmr_request(&request)?;
        debug!("Recording metabolic-rate measurement");

        let bmr = basal_metabolic_rate(request.weight, request.height, request.age, request.gender);
        let tdee = total_daily_energy_expenditure(bmr, request.activity_level);
        let record = BmrRecord {
            date: today(),
            weight: request.weight,
            height: request.height,
            age: request.age,
            gender: request.gender,
            activity_level: request.activity_level,
            activity_description: request.activity_level.description().to_string(),
            bmr,
            tdee,
        };

        self.repository
            .append_bmr(record)
            .map_err(|e| self.map_repo_error(e))
    }

    /// Record a food-intake entry for the requested day
    pub fn add_intake(
        &self,
        request: CreateCalorieEntryRequest,
    ) -> Result<CalorieEntry, HealthServiceError> {
        self.validate_intake_request(&request)?;
        debug!("Recording intake entry for {}", request.date);

        let entry = CalorieEntry {
            food: request.food.trim().to_string(),
            calories: request.calories,
        };

        self.repository
            .append_intake(request.date, entry)
            .map_err(|e| self.map_repo_error(e))
    }

    /// All intake entries recorded for a day, with their total
    pub fn daily_intake(&self, date: NaiveDate) -> Result<DailyIntake, HealthServiceError> {
        let entries = self
            .repository
            .entries_for(date)
            .map_err(|e| self.map_repo_error(e))?;
        let total = entries.iter().map(|entry| entry.calories).sum();

        Ok(DailyIntake {
            date,
            entries,
            total,
        })
    }

    /// All BMI records, most recent first
    pub fn bmi_history(&self) -> Result<Vec<BmiRecord>, HealthServiceError> {
        let mut records = self
            .repository
            .bmi_records()
            .map_err(|e| self.map_repo_error(e))?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// All metabolic-rate records, most recent first
    pub fn metabolic_history(&self) -> Result<Vec<BmrRecord>, HealthServiceError> {
        let mut records = self
            .repository
            .bmr_records()
            .map_err(|e| self.map_repo_error(e))?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Compare expenditure and intake for a day
    ///
    /// Uses the most recent metabolic-rate record on or before the day;
    /// without one the balance is undefined and an `InsufficientData`
    /// error is returned.
    pub fn analyze_balance(&self, date: NaiveDate) -> Result<BalanceReport, HealthServiceError> {
        let tdee = self
            .repository
            .latest_tdee(date)
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                HealthServiceError::InsufficientData(format!(
                    "no metabolic-rate record on or before {}",
                    date
                ))
            })?;

        let intake = self
            .repository
            .total_intake(date)
            .map_err(|e| self.map_repo_error(e))?;

        Ok(calorie_balance(date, tdee, intake))
    }

    /// Validate a BMI request
    fn validate_bmi_request(&self, request: &CreateBmiRequest) -> Result<(), HealthServiceError> {
        validate_positive("weight", request.weight)?;
        validate_positive("height", request.height)?;
        Ok(())
    }

    /// Validate a metabolic-rate request
    fn validate_bmr_request(&self, request: &CreateBmrRequest) -> Result<(), HealthServiceError> {
        if let Err(errors) = request.validate() {
            return Err(HealthServiceError::Validation(validation_message(&errors)));
        }

        validate_positive("weight", request.weight)?;
        validate_positive("height", request.height)?;
        Ok(())
    }

    /// Validate an intake request
    fn validate_intake_request(
        &self,
        request: &CreateCalorieEntryRequest,
    ) -> Result<(), HealthServiceError> {
        if let Err(errors) = request.validate() {
            return Err(HealthServiceError::Validation(validation_message(&errors)));
        }

        // A whitespace-only name passes the length check
        if request.food.trim().is_empty() {
            return Err(HealthServiceError::Validation(
                "food: Food name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> HealthServiceError {
        HealthServiceError::Repository(err.to_string())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Require a measurement to be strictly positive
fn validate_positive(field: &str, value: f64) -> Result<(), HealthServiceError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(HealthServiceError::Validation(format!(
            "{}: must be a positive number",
            field
        )))
    }
}

/// Convert validation errors to a meaningful error message
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}
