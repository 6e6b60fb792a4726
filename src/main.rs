use anyhow::Context;
use billing_service::configuration::get_configuration;
use billing_service::startup::build;
use billing_service::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("billing_service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config).context("Failed to bind the HTTP server.")?;
    app.run().await?;

    Ok(())
}
