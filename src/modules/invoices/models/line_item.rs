// A line item on a client invoice: either billed professional time or a
// disbursement re-billed to the client. Only taxable lines feed the sales
// tax base.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::round_cents;
use crate::core::{AppError, Result};

/// What a line item bills for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    /// Professional time: quantity is hours, unit price the hourly rate
    Fee,
    /// Expense incurred on the client's behalf
    Disbursement,
}

fn default_taxable() -> bool {
    true
}

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Description of the service or expense
    pub description: String,

    pub kind: LineItemKind,

    /// Hours for fees, units for disbursements
    pub quantity: Decimal,

    /// Price per unit in CAD
    pub unit_price: Decimal,

    /// Whether sales tax applies (e.g. filing fees paid as the client's
    /// agent do not attract GST/HST)
    #[serde(default = "default_taxable")]
    pub taxable: bool,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Service/expense description (max 255 chars)
    /// * `kind` - Fee or disbursement
    /// * `quantity` - Must be positive
    /// * `unit_price` - Must be non-negative
    /// * `taxable` - Whether the line is in the tax base
    pub fn new(
        description: impl Into<String>,
        kind: LineItemKind,
        quantity: Decimal,
        unit_price: Decimal,
        taxable: bool,
    ) -> Result<Self> {
        let item = Self {
            description: description.into(),
            kind,
            quantity,
            unit_price,
            taxable,
        };
        item.validate()?;

        Ok(item)
    }

    /// Professional time at an hourly rate, always taxable
    pub fn fee(description: impl Into<String>, hours: Decimal, hourly_rate: Decimal) -> Result<Self> {
        Self::new(description, LineItemKind::Fee, hours, hourly_rate, true)
    }

    /// A single disbursement of `amount`
    pub fn disbursement(description: impl Into<String>, amount: Decimal, taxable: bool) -> Result<Self> {
        Self::new(description, LineItemKind::Disbursement, Decimal::ONE, amount, taxable)
    }

    /// Line amount: quantity × unit_price, rounded to cents
    pub fn amount(&self) -> Result<Decimal> {
        self.quantity
            .checked_mul(self.unit_price)
            .map(round_cents)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Line item '{}' amount is too large: {} x {}",
                    self.description, self.quantity, self.unit_price
                ))
            })
    }

    /// Checks a line item, including ones that arrived through deserialization
    pub fn validate(&self) -> Result<()> {
        Self::validate_description(&self.description)?;
        Self::validate_quantity(self.quantity)?;
        Self::validate_unit_price(self.unit_price)?;

        Ok(())
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }

        if description.len() > 255 {
            return Err(AppError::validation(
                "Line item description cannot exceed 255 characters",
            ));
        }

        Ok(())
    }

    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
