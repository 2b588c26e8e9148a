// Test Server Helpers
//
// Spawns a real HTTP test server using actix-test with the production
// middleware stack and route table.

use actix_web::{web, App};

use leakage_calculator::app::configure_app;
use leakage_calculator::calculator::LeakageCalculator;
use leakage_calculator::config::{CorsConfig, PricingConfig};
use leakage_calculator::middleware::{build_cors, RequestId};
use leakage_calculator::processors::RateTable;

pub use actix_test::TestServer;

/// Origin the test server accepts cross-origin calls from
pub const TEST_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Spawn a real HTTP test server with the default rate table and pricing
///
/// # Behavior
/// - Starts actix-web server on random available port
/// - Wraps the same middleware as the production binary (CORS, request IDs)
/// - Server stops automatically when TestServer drops
///
/// # Example
/// ```no_run
/// #[actix_web::test]
/// async fn test_health_endpoint() {
///     let srv = spawn_test_server();
///     let response = srv.get("/health").send().await.unwrap();
///     assert_eq!(response.status(), 200);
/// }
/// ```
pub fn spawn_test_server() -> TestServer {
    spawn_test_server_with_pricing(PricingConfig::default())
}

/// Spawn test server with custom pricing assumptions
pub fn spawn_test_server_with_pricing(pricing: PricingConfig) -> TestServer {
    let calculator = web::Data::new(LeakageCalculator::new(RateTable::builtin(), pricing));
    let cors = CorsConfig {
        allowed_origins: vec![TEST_FRONTEND_ORIGIN.to_string()],
    };

    actix_test::start(move || {
        App::new()
            .wrap(RequestId)
            .wrap(build_cors(&cors))
            .configure(configure_app(calculator.clone()))
    })
}
