use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use health_track_data::models::CalorieEntry;

/// All food-intake entries recorded for one day, with their total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Day the entries were recorded for
    pub date: NaiveDate,

    /// Entries in insertion order
    pub entries: Vec<CalorieEntry>,

    /// Sum of all calories for the day
    pub total: u32,
}

/// Result of comparing energy expenditure against intake for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Day the balance was computed for
    pub date: NaiveDate,

    /// Total calories recorded for the day
    pub intake: u32,

    /// Daily energy expenditure governing the day (as-of lookup)
    pub tdee: i32,

    /// Expenditure minus intake
    pub balance: i32,

    /// Which side of the balance the day falls on
    pub state: BalanceState,
}

/// Sign of the calorie balance
///
/// The balance is expenditure minus intake, so a positive balance means
/// the body burned more than it took in: a caloric deficit. A negative
/// balance is a surplus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceState {
    /// Expenditure exceeds intake
    Deficit,

    /// Intake exceeds expenditure
    Surplus,

    /// Intake matches expenditure exactly
    Balanced,
}

impl BalanceState {
    /// Classify a balance value by its sign
    pub fn for_balance(balance: i32) -> Self {
        if balance > 0 {
            BalanceState::Deficit
        } else if balance < 0 {
            BalanceState::Surplus
        } else {
            BalanceState::Balanced
        }
    }
}

impl ToString for BalanceState {
    fn to_string(&self) -> String {
        match self {
            BalanceState::Deficit => "deficit".to_string(),
            BalanceState::Surplus => "surplus".to_string(),
            BalanceState::Balanced => "balanced".to_string(),
        }
    }
}

impl BalanceReport {
    /// Explanatory sentence matching the sign of the balance
    pub fn note(&self) -> String {
        match self.state {
            BalanceState::Deficit => format!(
                "A gap of +{} calories puts you in a caloric deficit; the body \
                 draws on stored energy to cover it, which supports weight loss.",
                self.balance
            ),
            BalanceState::Surplus => format!(
                "A gap of {} calories puts you in a caloric surplus; the excess \
                 energy is stored as fat and can lead to weight gain.",
                self.balance
            ),
            BalanceState::Balanced => {
                "Intake and expenditure are in balance, which helps maintain \
                 your current weight."
                    .to_string()
            }
        }
    }
}
