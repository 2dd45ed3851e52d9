pub mod rate_table;
pub mod tax_calculator;

pub use rate_table::rates_for;
pub use tax_calculator::TaxCalculator;
