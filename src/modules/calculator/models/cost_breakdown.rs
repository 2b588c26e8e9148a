use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::round_money;

/// Monthly leakage of one processor, split by cause
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub payment_fees: f64,
    pub fx_fees: f64,
    pub failed_payments: f64,
    pub tax_overhead: f64,
    pub chargebacks: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Build a breakdown whose total is the sum of its components
    pub fn new(
        payment_fees: f64,
        fx_fees: f64,
        failed_payments: f64,
        tax_overhead: f64,
        chargebacks: f64,
    ) -> Self {
        Self {
            payment_fees,
            fx_fees,
            failed_payments,
            tax_overhead,
            chargebacks,
            total: payment_fees + fx_fees + failed_payments + tax_overhead + chargebacks,
        }
    }

    pub fn rounded(&self) -> Self {
        Self {
            payment_fees: round_money(self.payment_fees),
            fx_fees: round_money(self.fx_fees),
            failed_payments: round_money(self.failed_payments),
            tax_overhead: round_money(self.tax_overhead),
            chargebacks: round_money(self.chargebacks),
            total: round_money(self.total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SavingsResult {
    /// Monthly difference
    pub total: f64,
    /// Share of the current leakage that is saved
    pub percentage: f64,
    pub annual: f64,
}

impl SavingsResult {
    pub fn between(current: &CostBreakdown, alternative: &CostBreakdown) -> Self {
        let total = current.total - alternative.total;
        let percentage = if current.total > 0.0 {
            total / current.total * 100.0
        } else {
            0.0
        };

        Self {
            total,
            percentage,
            annual: total * 12.0,
        }
    }

    pub fn rounded(&self) -> Self {
        Self {
            total: round_money(self.total),
            percentage: round_money(self.percentage),
            annual: round_money(self.annual),
        }
    }
}

/// Full calculator output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakageReport {
    pub current: CostBreakdown,
    pub alternative: CostBreakdown,
    pub savings: SavingsResult,
}

impl LeakageReport {
    pub fn new(current: CostBreakdown, alternative: CostBreakdown) -> Self {
        Self {
            savings: SavingsResult::between(&current, &alternative),
            current,
            alternative,
        }
    }

    /// Round every figure to cents; computation stays at full precision until here
    pub fn rounded(&self) -> Self {
        Self {
            current: self.current.rounded(),
            alternative: self.alternative.rounded(),
            savings: self.savings.rounded(),
        }
    }
}

/// Success body of `POST /api/calculate`.
///
/// The alternative breakdown is keyed by the alternative processor's name.
#[derive(Debug, Clone)]
pub struct CalculationResponse {
    pub alternative_name: String,
    pub report: LeakageReport,
}

impl CalculationResponse {
    /// Wraps a report, rounding it for output
    pub fn new(alternative_name: impl Into<String>, report: &LeakageReport) -> Self {
        Self {
            alternative_name: alternative_name.into(),
            report: report.rounded(),
        }
    }
}

impl Serialize for CalculationResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry("current", &self.report.current)?;
        map.serialize_entry(&self.alternative_name, &self.report.alternative)?;
        map.serialize_entry("savings", &self.report.savings)?;
        map.end()
    }
}
