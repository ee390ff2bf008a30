pub mod balance;
pub mod metrics;
pub mod tracker;

// Domain services
// This module contains business logic implementations.

// Re-export the service and its error type
pub use tracker::{HealthServiceError, HealthTracker};
