use super::{parse_var, string_var};
use crate::core::{AppError, Result};
use crate::modules::processors::{RateSpec, RateTable};

/// Response keys the alternative processor name must not collide with
const RESERVED_RESPONSE_KEYS: [&str; 3] = ["success", "current", "savings"];

/// Assumptions behind the leakage formulas
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Processor that pays the international surcharge and is assumed when none is given
    pub primary_processor: String,
    /// Percentage points added to the primary processor's rate when any revenue is international
    pub international_surcharge: f64,
    /// Average charge size used to estimate the transaction count
    pub average_transaction: f64,
    pub fx_markup_percent: f64,
    pub eu_tax_overhead_percent: f64,
    pub chargeback_percent: f64,
    pub alternative: AlternativeConfig,
}

/// The processor the current stack is compared against
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeConfig {
    pub name: String,
    pub rate: RateSpec,
    pub fx_rate_percent: f64,
    /// Fraction of failed-payment loss the alternative recovers, in [0, 1]
    pub failed_payment_reduction: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            primary_processor: "stripe".to_string(),
            international_surcharge: 1.0,
            average_transaction: 50.0,
            fx_markup_percent: 2.0,
            eu_tax_overhead_percent: 0.5,
            chargeback_percent: 0.3,
            alternative: AlternativeConfig::default(),
        }
    }
}

impl Default for AlternativeConfig {
    fn default() -> Self {
        Self {
            name: "paaaid".to_string(),
            rate: RateSpec {
                percentage_rate: 2.5,
                fixed_fee: 0.25,
            },
            fx_rate_percent: 0.5,
            failed_payment_reduction: 0.2,
        }
    }
}

impl PricingConfig {
    /// Load overrides from `lookup`, keeping defaults for unset keys
    pub fn from_source<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let alternative = &defaults.alternative;

        let rate = RateSpec::new(
            parse_var(lookup, "ALTERNATIVE_RATE", alternative.rate.percentage_rate)?,
            parse_var(lookup, "ALTERNATIVE_FIXED_FEE", alternative.rate.fixed_fee)?,
        )?;

        Ok(Self {
            primary_processor: string_var(lookup, "PRIMARY_PROCESSOR", &defaults.primary_processor)
                .trim()
                .to_lowercase(),
            international_surcharge: parse_var(
                lookup,
                "INTERNATIONAL_SURCHARGE",
                defaults.international_surcharge,
            )?,
            average_transaction: parse_var(
                lookup,
                "AVERAGE_TRANSACTION",
                defaults.average_transaction,
            )?,
            fx_markup_percent: parse_var(lookup, "FX_MARKUP_PERCENT", defaults.fx_markup_percent)?,
            eu_tax_overhead_percent: parse_var(
                lookup,
                "EU_TAX_OVERHEAD_PERCENT",
                defaults.eu_tax_overhead_percent,
            )?,
            chargeback_percent: parse_var(
                lookup,
                "CHARGEBACK_PERCENT",
                defaults.chargeback_percent,
            )?,
            alternative: AlternativeConfig {
                name: string_var(lookup, "ALTERNATIVE_NAME", &alternative.name)
                    .trim()
                    .to_lowercase(),
                rate,
                fx_rate_percent: parse_var(
                    lookup,
                    "ALTERNATIVE_FX_RATE",
                    alternative.fx_rate_percent,
                )?,
                failed_payment_reduction: parse_var(
                    lookup,
                    "FAILED_PAYMENT_REDUCTION",
                    alternative.failed_payment_reduction,
                )?,
            },
        })
    }

    /// Validate the model against the processors it will be used with
    pub fn validate(&self, rates: &RateTable) -> Result<()> {
        if !rates.contains(&self.primary_processor) {
            return Err(AppError::configuration(format!(
                "Primary processor '{}' is not in the rate table",
                self.primary_processor
            )));
        }

        let constants = [
            ("INTERNATIONAL_SURCHARGE", self.international_surcharge),
            ("AVERAGE_TRANSACTION", self.average_transaction),
            ("FX_MARKUP_PERCENT", self.fx_markup_percent),
            ("EU_TAX_OVERHEAD_PERCENT", self.eu_tax_overhead_percent),
            ("CHARGEBACK_PERCENT", self.chargeback_percent),
            ("ALTERNATIVE_FX_RATE", self.alternative.fx_rate_percent),
        ];
        for (key, value) in constants {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::configuration(format!(
                    "{} must be a non-negative number",
                    key
                )));
            }
        }

        RateSpec::new(
            self.alternative.rate.percentage_rate,
            self.alternative.rate.fixed_fee,
        )?;

        if !(0.0..=1.0).contains(&self.alternative.failed_payment_reduction) {
            return Err(AppError::configuration(
                "FAILED_PAYMENT_REDUCTION must be between 0 and 1",
            ));
        }

        let name = self.alternative.name.as_str();
        if name.is_empty() {
            return Err(AppError::configuration("ALTERNATIVE_NAME must not be empty"));
        }
        if RESERVED_RESPONSE_KEYS.contains(&name) {
            return Err(AppError::configuration(format!(
                "ALTERNATIVE_NAME '{}' collides with a response field",
                name
            )));
        }

        Ok(())
    }
}
