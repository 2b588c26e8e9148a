//! Revenue Leakage Calculator Library
//!
//! Estimates what a merchant loses to payment fees, FX costs, failed payments,
//! tax handling and chargebacks, and compares it with an alternative processor.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::calculator;
pub use modules::processors;
