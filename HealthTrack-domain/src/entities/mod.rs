// Domain entities
mod reports;
mod requests;

// Re-export commonly used types
pub use reports::{BalanceReport, BalanceState, DailyIntake};
pub use requests::{CreateBmiRequest, CreateBmrRequest, CreateCalorieEntryRequest};

// Re-export the storage models so callers only need the domain crate
pub use health_track_data::models::{
    ActivityLevel, BmiCategory, BmiRecord, BmrRecord, CalorieEntry, Gender, HealthDocument,
};
