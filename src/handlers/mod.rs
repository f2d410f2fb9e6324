pub mod health_handler;
pub mod solver_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use solver_handler::solve;

/// Registers the routes and a JSON extractor that reports bad bodies as 400s
/// with the usual error payload.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(health_check)
    .service(solve);
}
