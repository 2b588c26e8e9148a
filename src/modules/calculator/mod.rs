pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    CalculationInput, CalculationRequest, CalculationResponse, CostBreakdown, LeakageReport,
    NumericField, SavingsResult, MAX_MRR,
};
pub use services::LeakageCalculator;
