use tracing::{debug, warn};

use crate::config::PricingConfig;
use crate::core::money::percent;
use crate::core::Result;
use crate::modules::calculator::models::{
    CalculationInput, CalculationRequest, CostBreakdown, LeakageReport,
};
use crate::modules::processors::{Processor, RateTable};

/// Estimates revenue leakage under the current processor and the alternative.
///
/// Pure and stateless: one instance is shared across all workers.
#[derive(Debug, Clone)]
pub struct LeakageCalculator {
    rates: RateTable,
    pricing: PricingConfig,
}

impl LeakageCalculator {
    pub fn new(rates: RateTable, pricing: PricingConfig) -> Self {
        Self { rates, pricing }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn alternative_name(&self) -> &str {
        &self.pricing.alternative.name
    }

    /// Coerce an untrusted request and compute its report
    pub fn calculate(&self, request: &CalculationRequest) -> Result<LeakageReport> {
        let input = CalculationInput::from_request(request, &self.pricing.primary_processor)
            .inspect_err(|e| warn!(error = %e, "Rejected calculation request"))?;

        self.compute(&input)
    }

    /// Compute the report for an already coerced input.
    ///
    /// Ranges and the processor name are checked here, once, for both
    /// requests and inputs built with [`CalculationInput::new`].
    /// Figures are left at full precision; round with [`LeakageReport::rounded`].
    pub fn compute(&self, input: &CalculationInput) -> Result<LeakageReport> {
        let processor = input
            .validate()
            .and_then(|()| self.rates.require(&input.processor))
            .inspect_err(|e| warn!(error = %e, "Rejected calculation input"))?;

        let current = self.current_costs(input, processor);
        let alternative = self.alternative_costs(input, &current);
        let report = LeakageReport::new(current, alternative);

        debug!(
            processor = %processor.name,
            mrr = input.mrr,
            current_total = report.current.total,
            alternative_total = report.alternative.total,
            savings = report.savings.total,
            "Computed leakage"
        );

        Ok(report)
    }

    fn current_costs(&self, input: &CalculationInput, processor: &Processor) -> CostBreakdown {
        let pricing = &self.pricing;
        let mrr = input.mrr;
        let international_volume = percent(input.international_percent) * mrr;

        let surcharge = if self.pays_international_surcharge(processor, input) {
            pricing.international_surcharge
        } else {
            0.0
        };

        CostBreakdown::new(
            processor
                .rate
                .fees_with_surcharge(mrr, self.transaction_count(mrr), surcharge),
            international_volume * percent(pricing.fx_markup_percent),
            mrr * percent(input.failed_payment_rate),
            percent(input.eu_percent) * mrr * percent(pricing.eu_tax_overhead_percent),
            self.chargebacks(mrr),
        )
    }

    fn alternative_costs(&self, input: &CalculationInput, current: &CostBreakdown) -> CostBreakdown {
        let alternative = &self.pricing.alternative;
        let mrr = input.mrr;
        let international_volume = percent(input.international_percent) * mrr;

        CostBreakdown::new(
            alternative.rate.fees_for(mrr, self.transaction_count(mrr)),
            international_volume * percent(alternative.fx_rate_percent),
            current.failed_payments * (1.0 - alternative.failed_payment_reduction),
            0.0,
            // chargeback rate does not depend on the processor
            current.chargebacks,
        )
    }

    fn pays_international_surcharge(&self, processor: &Processor, input: &CalculationInput) -> bool {
        processor.name == self.pricing.primary_processor && input.international_percent > 0.0
    }

    fn transaction_count(&self, mrr: f64) -> f64 {
        if self.pricing.average_transaction > 0.0 {
            mrr / self.pricing.average_transaction
        } else {
            0.0
        }
    }

    fn chargebacks(&self, mrr: f64) -> f64 {
        mrr * percent(self.pricing.chargeback_percent)
    }
}

impl Default for LeakageCalculator {
    fn default() -> Self {
        Self::new(RateTable::builtin(), PricingConfig::default())
    }
}
