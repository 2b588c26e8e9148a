use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leakage_calculator::app::configure_app;
use leakage_calculator::calculator::LeakageCalculator;
use leakage_calculator::config::Config;
use leakage_calculator::middleware::{build_cors, RequestId};
use leakage_calculator::processors::RateTable;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    let rates = RateTable::builtin();
    config
        .validate(&rates)
        .context("Configuration validation failed")?;

    tracing::info!("Starting Revenue Leakage Calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        processors = ?rates.supported_names(),
        primary = %config.pricing.primary_processor,
        alternative = %config.pricing.alternative.name,
        "Rate table loaded"
    );

    let calculator = web::Data::new(LeakageCalculator::new(rates, config.pricing.clone()));
    let cors_config = config.cors.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_config))
            .configure(configure_app(calculator.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "leakage_calculator={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json_logging() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
