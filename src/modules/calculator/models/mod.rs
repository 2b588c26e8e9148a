pub mod calculation_input;
pub mod cost_breakdown;

pub use calculation_input::{CalculationInput, CalculationRequest, NumericField, MAX_MRR};
pub use cost_breakdown::{CalculationResponse, CostBreakdown, LeakageReport, SavingsResult};
