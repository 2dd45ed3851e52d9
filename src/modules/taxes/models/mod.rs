pub mod jurisdiction;
pub mod tax;

pub use jurisdiction::Jurisdiction;
pub use tax::{TaxBreakdownLine, TaxCalculation, TaxComponent, TaxRates};
