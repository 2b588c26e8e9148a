pub mod leakage_calculator;

pub use leakage_calculator::LeakageCalculator;
