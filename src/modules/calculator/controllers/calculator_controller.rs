use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::calculator::models::{CalculationRequest, CalculationResponse};
use crate::modules::calculator::services::LeakageCalculator;

/// Compare leakage under the current processor and the alternative
/// POST /api/calculate
pub async fn calculate(
    calculator: web::Data<LeakageCalculator>,
    request: web::Json<CalculationRequest>,
) -> Result<HttpResponse, AppError> {
    let report = calculator.calculate(&request)?;

    Ok(HttpResponse::Ok().json(CalculationResponse::new(
        calculator.alternative_name(),
        &report,
    )))
}

/// Configure calculator routes, mounted under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculate", web::post().to(calculate));
}
