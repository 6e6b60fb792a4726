//! src/routes/mod.rs
use actix_web::web;

mod health_check;
pub use health_check::*;

/// Route table for the service.
///
/// `/` is registered for every method and doubles as the default service,
/// so any path under `/` reaches the health check.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").to(health_check))
        .default_service(web::to(health_check));
}
