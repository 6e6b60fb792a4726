//! tests/api/helpers.rs

use billing_service::configuration::get_configuration;
use billing_service::startup::build;
use billing_service::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    let sink = if std::env::var("TEST_LOG").is_ok() {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        BoxMakeWriter::new(std::io::sink)
    };
    init_subscriber(get_subscriber(subscriber_name, default_filter_level, sink));
});

pub struct Test {
    pub address: String,
    pub client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: String) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", self.address, path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::Response {
        self.client
            .request(method, &format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;

    // Launch the server
    let app = build(config.clone()).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());
    config.application.port = app.port();

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    Test {
        address,
        client: reqwest::Client::new(),
    }
}
