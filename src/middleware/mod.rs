pub mod error_handler;
pub mod metrics;
pub mod request_id;

pub use error_handler::json_error_handler;
pub use metrics::{Metrics, MetricsCollector, MetricsMiddleware, UNMATCHED_ENDPOINT};
pub use request_id::RequestId;
