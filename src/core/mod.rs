pub mod currency;
pub mod error;

pub use currency::{format_cad, parse_cad, round_cents};
pub use error::{AppError, Result};
