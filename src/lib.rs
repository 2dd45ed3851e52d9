//! LexLedger Tax Service Library
//!
//! Canadian sales tax (GST/HST/PST/QST) for legal invoices: the province
//! rate table, the tax calculator, CAD formatting, and the HTTP endpoints
//! the invoice-generation flow calls.

use actix_web::web;

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::taxes;

use middleware::{json_error_handler, MetricsCollector};

/// Shared app data plus every route; used by `main` and the contract tests
pub fn configure_app(collector: MetricsCollector) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(collector))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
        modules::configure(cfg);
    }
}
