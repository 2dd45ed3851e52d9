pub mod health_controller;
pub mod metrics;

pub use health_controller::configure;
