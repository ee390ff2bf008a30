use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use health_track_data::models::{ActivityLevel, Gender};

/// Request payload for recording a BMI measurement
///
/// Both measurements must be strictly positive; the service checks this
/// before any record is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBmiRequest {
    /// Body weight in kilograms, must be positive
    pub weight: f64,

    /// Height in centimetres, must be positive
    pub height: f64,
}

/// Request payload for recording a metabolic-rate measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBmrRequest {
    /// Body weight in kilograms, must be positive
    pub weight: f64,

    /// Height in centimetres, must be positive
    pub height: f64,

    /// Age in whole years
    #[validate(range(min = 1, message = "Age must be a positive number of years"))]
    pub age: u32,

    /// Gender used by the BMR formula
    pub gender: Gender,

    /// Self-reported activity level
    pub activity_level: ActivityLevel,
}

/// Request payload for recording a food-intake entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCalorieEntryRequest {
    /// Day the food was consumed
    pub date: NaiveDate,

    /// Name of the food; leading and trailing whitespace is trimmed
    #[validate(length(min = 1, message = "Food name must not be empty"))]
    pub food: String,

    /// Energy content in kilocalories
    #[validate(range(min = 1, message = "Calories must be a positive number"))]
    pub calories: u32,
}
