use actix_web::web;

pub mod health;
pub mod invoices;
pub mod taxes;

/// Register every module's routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::controllers::configure(cfg);
    taxes::controllers::configure(cfg);
    invoices::controllers::configure(cfg);
}
