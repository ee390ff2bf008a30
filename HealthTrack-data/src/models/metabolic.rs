use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage model for a metabolic-rate measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrRecord {
    /// Day the measurement was taken
    pub date: NaiveDate,

    /// Body weight in kilograms
    pub weight: f64,

    /// Height in centimetres
    pub height: f64,

    /// Age in whole years
    pub age: u32,

    /// Gender used by the Mifflin-St Jeor formula
    pub gender: Gender,

    /// Self-reported activity level
    pub activity_level: ActivityLevel,

    /// Display label for the activity level, fixed at creation time
    pub activity_description: String,

    /// Basal metabolic rate in kcal/day, rounded to the nearest integer
    pub bmr: i32,

    /// Total daily energy expenditure in kcal/day
    pub tdee: i32,
}

/// Gender as used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl ToString for Gender {
    fn to_string(&self) -> String {
        match self {
            Gender::Male => "male".to_string(),
            Gender::Female => "female".to_string(),
        }
    }
}

/// Activity level on the fixed five-step scale
///
/// Persisted as its integer value (1..=5); each level carries a fixed
/// multiplicative factor applied to the BMR and a fixed display label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityLevel {
    /// Sedentary, little or no exercise
    Sedentary,

    /// Light activity, 1-3 days per week
    Light,

    /// Moderate activity, 3-5 days per week
    Moderate,

    /// Hard activity, 6-7 days per week
    High,

    /// Very hard activity, every day
    Extreme,
}

impl ActivityLevel {
    /// Integer value persisted on the wire
    pub fn level(&self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::Light => 2,
            ActivityLevel::Moderate => 3,
            ActivityLevel::High => 4,
            ActivityLevel::Extreme => 5,
        }
    }

    /// Multiplicative factor applied to the BMR to obtain the TDEE
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    /// Display label stored alongside the level
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary, little or no exercise",
            ActivityLevel::Light => "light activity (1-3 days/week)",
            ActivityLevel::Moderate => "moderate activity (3-5 days/week)",
            ActivityLevel::High => "hard activity (6-7 days/week)",
            ActivityLevel::Extreme => "very hard activity (every day)",
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::Light),
            3 => Ok(ActivityLevel::Moderate),
            4 => Ok(ActivityLevel::High),
            5 => Ok(ActivityLevel::Extreme),
            other => Err(format!(
                "activity level must be between 1 and 5, got {}",
                other
            )),
        }
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.level()
    }
}
