use serde::{Deserialize, Serialize};

/// Storage model for a single food-intake entry
///
/// Entries are grouped under their date key in the persisted document and
/// keep insertion order. The same food name may appear more than once per
/// day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEntry {
    /// Name of the food as entered by the user
    pub food: String,

    /// Energy content in kilocalories
    pub calories: u32,
}
