// Invoices module: the totals the invoice-generation flow persists

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{LineItem, LineItemKind};
pub use services::InvoiceTotals;
