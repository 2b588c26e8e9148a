use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::modules::calculator::services::LeakageCalculator;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessorSummary {
    pub name: String,
    pub display_name: String,
    pub percentage_rate: f64,
    pub fixed_fee: f64,
    /// Percentage points added when any revenue is international
    pub international_surcharge: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessorListResponse {
    pub primary: String,
    pub alternative: String,
    pub processors: Vec<ProcessorSummary>,
}

/// List the processors the calculator can compare
/// GET /api/processors
pub async fn list_processors(calculator: web::Data<LeakageCalculator>) -> HttpResponse {
    let pricing = calculator.pricing();

    let processors = calculator
        .rates()
        .processors()
        .map(|processor| ProcessorSummary {
            name: processor.name.clone(),
            display_name: processor.display_name.clone(),
            percentage_rate: processor.rate.percentage_rate,
            fixed_fee: processor.rate.fixed_fee,
            international_surcharge: if processor.name == pricing.primary_processor {
                pricing.international_surcharge
            } else {
                0.0
            },
        })
        .collect();

    HttpResponse::Ok().json(ProcessorListResponse {
        primary: pricing.primary_processor.clone(),
        alternative: pricing.alternative.name.clone(),
        processors,
    })
}

/// Configure processor routes, mounted under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/processors", web::get().to(list_processors));
}
