use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage model for a body-mass-index measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    /// Day the measurement was taken
    pub date: NaiveDate,

    /// Body weight in kilograms
    pub weight: f64,

    /// Height in centimetres
    pub height: f64,

    /// Computed BMI, rounded to one decimal
    pub bmi: f64,

    /// Weight category the BMI falls into, fixed at creation time
    pub category: BmiCategory,
}

/// Weight category derived from a BMI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI in [18.5, 24)
    Normal,

    /// BMI in [24, 28)
    Overweight,

    /// BMI of 28 or above
    Obese,
}

impl ToString for BmiCategory {
    fn to_string(&self) -> String {
        match self {
            BmiCategory::Underweight => "underweight".to_string(),
            BmiCategory::Normal => "normal".to_string(),
            BmiCategory::Overweight => "overweight".to_string(),
            BmiCategory::Obese => "obese".to_string(),
        }
    }
}
