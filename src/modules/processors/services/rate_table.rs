use std::collections::BTreeMap;

use crate::core::{AppError, Result};
use crate::modules::processors::models::{Processor, RateSpec};

/// Read-only table of supported processors, keyed by lowercase name.
///
/// Built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct RateTable {
    processors: BTreeMap<String, Processor>,
}

impl RateTable {
    /// The processors offered by the calculator front end
    pub fn builtin() -> Self {
        let entries = [
            ("stripe", "Stripe", 2.9, 0.30),
            ("paypal", "PayPal", 3.49, 0.49),
            ("paddle", "Paddle", 5.0, 0.50),
            ("lemon", "Lemon Squeezy", 5.0, 0.50),
        ];

        let processors = entries
            .into_iter()
            .map(|(name, display_name, percentage_rate, fixed_fee)| {
                Processor::new(
                    name,
                    display_name,
                    RateSpec {
                        percentage_rate,
                        fixed_fee,
                    },
                )
            })
            .collect();

        Self::from_processors(processors)
    }

    pub fn from_processors(processors: Vec<Processor>) -> Self {
        Self {
            processors: processors
                .into_iter()
                .map(|processor| (processor.name.clone(), processor))
                .collect(),
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Processor> {
        self.processors.get(&name.trim().to_lowercase())
    }

    /// Lookup that fails with the list of supported names
    pub fn require(&self, name: &str) -> Result<&Processor> {
        self.get(name)
            .ok_or_else(|| AppError::unknown_processor(name.trim(), self.supported_names()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Supported names in alphabetical order
    pub fn supported_names(&self) -> Vec<String> {
        self.processors.keys().cloned().collect()
    }

    pub fn processors(&self) -> impl Iterator<Item = &Processor> {
        self.processors.values()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
