use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::middleware::MetricsCollector;
use crate::modules::invoices::models::LineItem;
use crate::modules::invoices::services::InvoiceTotals;
use crate::modules::taxes::{Jurisdiction, TaxCalculator};

/// Request body for POST /invoices/totals
#[derive(Debug, Deserialize)]
pub struct InvoiceTotalsRequest {
    pub jurisdiction: String,
    pub line_items: Vec<LineItem>,
}

/// Compute the persisted totals for a draft invoice
/// POST /invoices/totals
#[tracing::instrument(skip(metrics, request))]
pub async fn compute_totals(
    metrics: web::Data<MetricsCollector>,
    request: web::Json<InvoiceTotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let jurisdiction: Jurisdiction = request.jurisdiction.parse()?;

    let totals = InvoiceTotals::compute(&TaxCalculator::new(), &request.line_items, jurisdiction)?;
    metrics.record_calculation(jurisdiction);

    Ok(HttpResponse::Ok().json(totals))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/invoices").route("/totals", web::post().to(compute_totals)));
}
