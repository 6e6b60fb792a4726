//! src/startup.rs
use crate::configuration::Settings;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Bind the configured address and prepare the server.
///
/// Port `0` asks the OS for a free port; `Application::port` reports the one it picked.
pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let address = config.application.address();
    let tcp_listener = TcpListener::bind(&address)?;
    let port = tcp_listener.local_addr()?.port();
    tracing::info!(%address, port, "Listening");

    let server = run(tcp_listener)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
