use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{round_cents, AppError, Result};
use crate::modules::invoices::models::{LineItem, LineItemKind};
use crate::modules::taxes::{Jurisdiction, TaxBreakdownLine, TaxCalculation, TaxCalculator};

/// Invoice totals as persisted on the invoice record.
///
/// Sales tax is charged on the taxable subtotal only;
/// `total = tax.total + non_taxable_subtotal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub jurisdiction: Jurisdiction,
    pub fees_subtotal: Decimal,
    pub disbursements_subtotal: Decimal,
    pub taxable_subtotal: Decimal,
    pub non_taxable_subtotal: Decimal,
    pub tax: TaxCalculation,
    pub breakdown: Vec<TaxBreakdownLine>,
    pub total: Decimal,
}

impl InvoiceTotals {
    pub fn compute(
        calculator: &TaxCalculator,
        line_items: &[LineItem],
        jurisdiction: Jurisdiction,
    ) -> Result<Self> {
        if line_items.is_empty() {
            return Err(AppError::validation("Invoice must have at least one line item"));
        }

        let mut fees_subtotal = Decimal::ZERO;
        let mut disbursements_subtotal = Decimal::ZERO;
        let mut taxable_subtotal = Decimal::ZERO;
        let mut non_taxable_subtotal = Decimal::ZERO;

        for item in line_items {
            item.validate()?;
            let amount = item.amount()?;

            let by_kind = match item.kind {
                LineItemKind::Fee => &mut fees_subtotal,
                LineItemKind::Disbursement => &mut disbursements_subtotal,
            };
            *by_kind = accumulate(*by_kind, amount)?;

            let by_tax = if item.taxable {
                &mut taxable_subtotal
            } else {
                &mut non_taxable_subtotal
            };
            *by_tax = accumulate(*by_tax, amount)?;
        }

        let tax = calculator.calculate(taxable_subtotal, jurisdiction)?;
        let breakdown = calculator.breakdown(&tax);
        let total = round_cents(accumulate(tax.total, non_taxable_subtotal)?);

        tracing::debug!(
            jurisdiction = %jurisdiction,
            line_items = line_items.len(),
            taxable_subtotal = %taxable_subtotal,
            non_taxable_subtotal = %non_taxable_subtotal,
            total = %total,
            "Computed invoice totals"
        );

        Ok(Self {
            jurisdiction,
            fees_subtotal: round_cents(fees_subtotal),
            disbursements_subtotal: round_cents(disbursements_subtotal),
            taxable_subtotal: tax.subtotal,
            non_taxable_subtotal: round_cents(non_taxable_subtotal),
            tax,
            breakdown,
            total,
        })
    }

    /// Sum of all line amounts before tax
    pub fn subtotal(&self) -> Decimal {
        self.taxable_subtotal + self.non_taxable_subtotal
    }
}

fn accumulate(sum: Decimal, amount: Decimal) -> Result<Decimal> {
    sum.checked_add(amount)
        .ok_or_else(|| AppError::validation("Invoice total is too large to compute"))
}
