// Metrics endpoint controller - exposes collected metrics
//
// GET /metrics - Returns current metrics snapshot

use actix_web::{web, HttpResponse};
use crate::middleware::MetricsCollector;

/// Get current metrics
#[tracing::instrument(skip(collector))]
pub async fn get_metrics(collector: web::Data<MetricsCollector>) -> HttpResponse {
    HttpResponse::Ok().json(collector.get_metrics())
}
