use actix_web::web;

use crate::middleware::json_config;
use crate::modules::calculator::controllers::calculator_controller;
use crate::modules::calculator::services::LeakageCalculator;
use crate::modules::health::controllers::health_controller;
use crate::modules::processors::controllers::processor_controller;

/// Mount shared state and every route of the service.
///
/// Used by the binary and by tests so both serve the same application.
pub fn configure_app(
    calculator: web::Data<LeakageCalculator>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(calculator.clone())
            .app_data(json_config())
            .configure(health_controller::configure)
            .service(
                web::scope("/api")
                    .configure(calculator_controller::configure)
                    .configure(processor_controller::configure),
            );
    }
}
