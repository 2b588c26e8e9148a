use serde::Deserialize;

use crate::core::{AppError, Result};

/// Largest accepted monthly revenue. Keeps every derived figure well inside
/// the range that rounds to exact cents.
pub const MAX_MRR: f64 = 1e15;

/// A numeric request field as it arrives on the wire.
///
/// Front ends send either JSON numbers or the raw text of an input box,
/// so both are accepted and coerced later.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericField {
    /// Coerce to a finite float, naming `field` in the error
    pub fn coerce(&self, field: &str) -> Result<f64> {
        let value = match self {
            NumericField::Number(value) => *value,
            NumericField::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| AppError::invalid_input(format!("{}: {}", field, e)))?,
            NumericField::Other(value) => {
                return Err(AppError::invalid_input(format!(
                    "{}: expected a number, got {}",
                    field,
                    json_type(value)
                )))
            }
        };

        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{}: must be a finite number",
                field
            )));
        }

        Ok(value)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Body of `POST /api/calculate`. Missing or null fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub mrr: Option<NumericField>,
    #[serde(default)]
    pub processor: Option<String>,
    #[serde(default)]
    pub international_percent: Option<NumericField>,
    #[serde(default)]
    pub eu_percent: Option<NumericField>,
    #[serde(default)]
    pub failed_payment_rate: Option<NumericField>,
}

/// Validated calculator input, one per request
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    pub mrr: f64,
    /// Lowercase processor name
    pub processor: String,
    pub international_percent: f64,
    pub eu_percent: f64,
    pub failed_payment_rate: f64,
}

impl CalculationInput {
    pub fn new(
        mrr: f64,
        processor: &str,
        international_percent: f64,
        eu_percent: f64,
        failed_payment_rate: f64,
    ) -> Self {
        Self {
            mrr,
            processor: processor.trim().to_lowercase(),
            international_percent,
            eu_percent,
            failed_payment_rate,
        }
    }

    /// Coerce an untrusted request, substituting `default_processor` when none is named.
    ///
    /// Only types are checked here; ranges are checked by [`CalculationInput::validate`].
    pub fn from_request(request: &CalculationRequest, default_processor: &str) -> Result<Self> {
        let processor = request
            .processor
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(default_processor);

        Ok(Self::new(
            coerce_or_zero(&request.mrr, "mrr")?,
            processor,
            coerce_or_zero(&request.international_percent, "international_percent")?,
            coerce_or_zero(&request.eu_percent, "eu_percent")?,
            coerce_or_zero(&request.failed_payment_rate, "failed_payment_rate")?,
        ))
    }

    /// Range checks on the numeric fields
    pub fn validate(&self) -> Result<()> {
        if !self.mrr.is_finite() || self.mrr < 0.0 {
            return Err(AppError::invalid_input("mrr: must be zero or greater"));
        }
        if self.mrr > MAX_MRR {
            return Err(AppError::invalid_input(format!(
                "mrr: must not exceed {}",
                MAX_MRR
            )));
        }

        let percentages = [
            ("international_percent", self.international_percent),
            ("eu_percent", self.eu_percent),
            ("failed_payment_rate", self.failed_payment_rate),
        ];
        for (field, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(AppError::invalid_input(format!(
                    "{}: must be between 0 and 100",
                    field
                )));
            }
        }

        Ok(())
    }
}

fn coerce_or_zero(field: &Option<NumericField>, name: &str) -> Result<f64> {
    field
        .as_ref()
        .map_or(Ok(0.0), |value| value.coerce(name))
}
