// Metrics middleware for collecting response times, error rates, and tax
// calculation volume
//
// Tracks:
// - Request response times (avg/min/max)
// - HTTP status code classes
// - Endpoint hit and error counts, keyed by route pattern
// - Tax calculations per jurisdiction

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::middleware::request_id::RequestIdValue;
use crate::modules::taxes::Jurisdiction;

/// Endpoint key for requests that matched no route
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Metrics storage, shared by every worker
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    data: Arc<Mutex<MetricsData>>,
}

#[derive(Debug, Default)]
struct MetricsData {
    total_requests: u64,
    successful_requests: u64,
    client_errors: u64,
    server_errors: u64,
    total_response_time_ms: u64,
    min_response_time_ms: u64,
    max_response_time_ms: u64,
    endpoint_counts: HashMap<String, u64>,
    endpoint_errors: HashMap<String, u64>,
    calculations_by_jurisdiction: HashMap<String, u64>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock only ever leaves counters half-updated
    fn lock(&self) -> MutexGuard<'_, MetricsData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a request metric
    fn record_request(&self, endpoint: &str, status_code: u16, response_time_ms: u64) {
        let mut data = self.lock();

        data.total_requests += 1;
        data.total_response_time_ms += response_time_ms;

        if data.min_response_time_ms == 0 || response_time_ms < data.min_response_time_ms {
            data.min_response_time_ms = response_time_ms;
        }
        if response_time_ms > data.max_response_time_ms {
            data.max_response_time_ms = response_time_ms;
        }

        match status_code {
            200..=299 => data.successful_requests += 1,
            400..=499 => data.client_errors += 1,
            500..=599 => data.server_errors += 1,
            _ => {}
        }

        *data.endpoint_counts.entry(endpoint.to_string()).or_insert(0) += 1;

        if status_code >= 400 {
            *data.endpoint_errors.entry(endpoint.to_string()).or_insert(0) += 1;
        }
    }

    /// Count one successful tax calculation
    pub fn record_calculation(&self, jurisdiction: Jurisdiction) {
        let mut data = self.lock();
        *data
            .calculations_by_jurisdiction
            .entry(jurisdiction.code().to_string())
            .or_insert(0) += 1;
    }

    /// Get current metrics snapshot
    pub fn get_metrics(&self) -> Metrics {
        let data = self.lock();

        let ratio = |count: u64| {
            if data.total_requests > 0 {
                (count as f64 / data.total_requests as f64) * 100.0
            } else {
                0.0
            }
        };

        Metrics {
            total_requests: data.total_requests,
            successful_requests: data.successful_requests,
            client_errors: data.client_errors,
            server_errors: data.server_errors,
            avg_response_time_ms: data
                .total_response_time_ms
                .checked_div(data.total_requests)
                .unwrap_or(0),
            min_response_time_ms: data.min_response_time_ms,
            max_response_time_ms: data.max_response_time_ms,
            error_rate: ratio(data.client_errors + data.server_errors),
            success_rate: ratio(data.successful_requests),
            endpoint_counts: data.endpoint_counts.clone(),
            endpoint_errors: data.endpoint_errors.clone(),
            calculations_by_jurisdiction: data.calculations_by_jurisdiction.clone(),
        }
    }

    /// Reset all metrics
    pub fn reset(&self) {
        *self.lock() = MetricsData::default();
    }
}

/// Metrics snapshot
#[derive(Debug, Clone, serde::Serialize)]
pub struct Metrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub avg_response_time_ms: u64,
    pub min_response_time_ms: u64,
    pub max_response_time_ms: u64,
    pub error_rate: f64,
    pub success_rate: f64,
    pub endpoint_counts: HashMap<String, u64>,
    pub endpoint_errors: HashMap<String, u64>,
    pub calculations_by_jurisdiction: HashMap<String, u64>,
}

/// Metrics middleware
pub struct MetricsMiddleware {
    collector: MetricsCollector,
}

impl MetricsMiddleware {
    pub fn new(collector: MetricsCollector) -> Self {
        Self { collector }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
            collector: self.collector.clone(),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
    collector: MetricsCollector,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let collector = self.collector.clone();
        let start_time = Instant::now();

        Box::pin(async move {
            let request_id = req
                .extensions()
                .get::<RequestIdValue>()
                .map(|id| id.0.clone())
                .unwrap_or_else(|| "unknown".to_string());

            let response = svc.call(req).await?;

            let response_time_ms = start_time.elapsed().as_millis() as u64;
            let status_code = response.status().as_u16();
            let endpoint = response
                .request()
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());

            collector.record_request(&endpoint, status_code, response_time_ms);

            tracing::debug!(
                request_id = %request_id,
                endpoint = %endpoint,
                status = status_code,
                response_time_ms = response_time_ms,
                "Recorded request metrics"
            );

            Ok(response)
        })
    }
}
