// Data storage models
// These types define the exact shape of the persisted JSON document.

mod bmi;
mod calorie;
mod document;
mod metabolic;

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiRecord};
pub use calorie::CalorieEntry;
pub use document::HealthDocument;
pub use metabolic::{ActivityLevel, BmrRecord, Gender};
