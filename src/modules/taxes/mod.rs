pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Jurisdiction, TaxBreakdownLine, TaxCalculation, TaxComponent, TaxRates};
pub use services::TaxCalculator;
