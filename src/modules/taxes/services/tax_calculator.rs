use rust_decimal::Decimal;

use crate::core::currency::round_cents;
use crate::core::error::AppError;
use crate::modules::taxes::models::{
    Jurisdiction, TaxBreakdownLine, TaxCalculation, TaxComponent, TaxRates,
};
use crate::modules::taxes::services::rate_table::rates_for;

/// TaxCalculator turns an invoice subtotal into Canadian sales tax amounts
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn rates(&self, jurisdiction: Jurisdiction) -> TaxRates {
        rates_for(jurisdiction)
    }

    /// Calculate the tax amounts for a subtotal billed in `jurisdiction`.
    ///
    /// Each component is `round(subtotal × rate)` on its own, before
    /// summing. The echoed subtotal is rounded with the same rule and the
    /// total is the sum of the rounded parts, so the total can differ by a
    /// cent from rounding the unrounded sum.
    ///
    /// Subtotals whose tax or total cannot be represented as a `Decimal`
    /// are rejected with `AppError::Validation`.
    pub fn calculate(
        &self,
        subtotal: Decimal,
        jurisdiction: Jurisdiction,
    ) -> Result<TaxCalculation, AppError> {
        self.validate_subtotal(subtotal)?;

        let rates = self.rates(jurisdiction);
        let gst = component_tax(subtotal, rates.gst)?;
        let pst = component_tax(subtotal, rates.pst)?;
        let hst = component_tax(subtotal, rates.hst)?;
        let qst = component_tax(subtotal, rates.qst)?;

        let subtotal = round_cents(subtotal);
        let total = [gst, pst, hst, qst]
            .into_iter()
            .try_fold(subtotal, |sum, amount| sum.checked_add(amount))
            .map(round_cents)
            .ok_or_else(|| out_of_range(subtotal))?;

        tracing::debug!(
            jurisdiction = %jurisdiction,
            subtotal = %subtotal,
            gst = %gst,
            pst = %pst,
            hst = %hst,
            qst = %qst,
            total = %total,
            "Calculated sales tax"
        );

        Ok(TaxCalculation {
            jurisdiction,
            subtotal,
            gst,
            pst,
            hst,
            qst,
            total,
        })
    }

    /// Invoice tax lines for the non-zero components, HST then GST, PST, QST
    pub fn breakdown(&self, calculation: &TaxCalculation) -> Vec<TaxBreakdownLine> {
        let rates = self.rates(calculation.jurisdiction);

        TaxComponent::DISPLAY_ORDER
            .into_iter()
            .filter(|component| calculation.amount(*component) > Decimal::ZERO)
            .map(|component| {
                let rate = rates.rate(component);
                TaxBreakdownLine {
                    component,
                    label: component.label(rate),
                    rate,
                    amount: calculation.amount(component),
                }
            })
            .collect()
    }

    /// Subtotals must be zero or positive; credit notes are issued as
    /// separate documents rather than negative invoices
    pub fn validate_subtotal(&self, subtotal: Decimal) -> Result<(), AppError> {
        if subtotal < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "Subtotal cannot be negative, got {}",
                subtotal
            )));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn component_tax(subtotal: Decimal, rate: Decimal) -> Result<Decimal, AppError> {
    subtotal
        .checked_mul(rate)
        .map(round_cents)
        .ok_or_else(|| out_of_range(subtotal))
}

fn out_of_range(subtotal: Decimal) -> AppError {
    AppError::Validation(format!("Subtotal {} is too large to calculate tax on", subtotal))
}
