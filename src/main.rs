use actix_web::{App, HttpServer};
use anyhow::Context;
use payment_facade::config::Config;
use payment_facade::middleware::{ErrorHandler, RequestId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    let json_logs = config.app.json_logs();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("payment_facade={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting payment façade");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    if !config.razorpay.is_configured() {
        tracing::warn!(
            "RAZORPAY_KEY_ID/RAZORPAY_KEY_SECRET not set; provider=razorpay requests will fail"
        );
    }

    let data = payment_facade::app_data(config.razorpay.clone());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(payment_facade::configure_app)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated")?;
    Ok(())
}
