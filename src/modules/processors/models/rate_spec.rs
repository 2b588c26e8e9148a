use crate::core::{AppError, Result};

/// Pricing of a payment processor: a percentage of volume plus a flat fee per transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSpec {
    /// Whole-number percentage, 2.9 means 2.9%
    pub percentage_rate: f64,
    pub fixed_fee: f64,
}

impl RateSpec {
    /// Build a rate, rejecting negative or non-finite values
    pub fn new(percentage_rate: f64, fixed_fee: f64) -> Result<Self> {
        if !percentage_rate.is_finite() || percentage_rate < 0.0 {
            return Err(AppError::configuration(format!(
                "percentage rate must be a non-negative number, got {}",
                percentage_rate
            )));
        }
        if !fixed_fee.is_finite() || fixed_fee < 0.0 {
            return Err(AppError::configuration(format!(
                "fixed fee must be a non-negative number, got {}",
                fixed_fee
            )));
        }

        Ok(Self {
            percentage_rate,
            fixed_fee,
        })
    }

    /// Fees for a month of volume split across `transactions` charges
    pub fn fees_for(&self, volume: f64, transactions: f64) -> f64 {
        self.fees_with_surcharge(volume, transactions, 0.0)
    }

    /// Same as [`fees_for`](Self::fees_for) with extra percentage points on top of the rate
    pub fn fees_with_surcharge(&self, volume: f64, transactions: f64, surcharge: f64) -> f64 {
        volume * (self.percentage_rate + surcharge) / 100.0 + self.fixed_fee * transactions
    }
}

/// An entry of the processor rate table
#[derive(Debug, Clone, PartialEq)]
pub struct Processor {
    /// Lowercase lookup key
    pub name: String,
    pub display_name: String,
    pub rate: RateSpec,
}

impl Processor {
    pub fn new(name: &str, display_name: &str, rate: RateSpec) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            display_name: display_name.to_string(),
            rate,
        }
    }
}
