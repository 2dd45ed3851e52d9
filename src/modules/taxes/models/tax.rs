use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::Jurisdiction;

/// One of the four Canadian sales taxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxComponent {
    /// Harmonized sales tax (federal and provincial combined)
    Hst,
    /// Federal goods and services tax
    Gst,
    /// Provincial sales tax
    Pst,
    /// Quebec sales tax
    Qst,
}

impl TaxComponent {
    /// Presentation order on invoices
    pub const DISPLAY_ORDER: [TaxComponent; 4] = [
        TaxComponent::Hst,
        TaxComponent::Gst,
        TaxComponent::Pst,
        TaxComponent::Qst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TaxComponent::Hst => "HST",
            TaxComponent::Gst => "GST",
            TaxComponent::Pst => "PST",
            TaxComponent::Qst => "QST",
        }
    }

    /// Display label with the nominal rate, e.g. `"HST (13%)"`
    ///
    /// The percentage is derived from the rate itself so the label can
    /// never drift from the number used in the arithmetic.
    pub fn label(&self, rate: Decimal) -> String {
        let percent = (rate * Decimal::ONE_HUNDRED).normalize();
        format!("{} ({}%)", self.name(), percent)
    }
}

/// The four sales tax rates applicable in a jurisdiction, as fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub gst: Decimal,
    pub pst: Decimal,
    pub hst: Decimal,
    pub qst: Decimal,
}

impl TaxRates {
    /// HST province: federal and provincial parts are folded into one rate
    pub fn harmonized(hst: Decimal) -> Self {
        Self {
            gst: Decimal::ZERO,
            pst: Decimal::ZERO,
            hst,
            qst: Decimal::ZERO,
        }
    }

    /// GST plus a separate provincial sales tax (zero where none applies)
    pub fn federal_provincial(gst: Decimal, pst: Decimal) -> Self {
        Self {
            gst,
            pst,
            hst: Decimal::ZERO,
            qst: Decimal::ZERO,
        }
    }

    /// GST plus Quebec sales tax
    pub fn federal_quebec(gst: Decimal, qst: Decimal) -> Self {
        Self {
            gst,
            pst: Decimal::ZERO,
            hst: Decimal::ZERO,
            qst,
        }
    }

    pub fn rate(&self, component: TaxComponent) -> Decimal {
        match component {
            TaxComponent::Hst => self.hst,
            TaxComponent::Gst => self.gst,
            TaxComponent::Pst => self.pst,
            TaxComponent::Qst => self.qst,
        }
    }

    /// Sum of all four rates
    pub fn combined(&self) -> Decimal {
        self.gst + self.pst + self.hst + self.qst
    }

    /// Labels for the non-zero components, in display order
    pub fn labels(&self) -> Vec<String> {
        TaxComponent::DISPLAY_ORDER
            .into_iter()
            .filter(|c| self.rate(*c) > Decimal::ZERO)
            .map(|c| c.label(self.rate(c)))
            .collect()
    }
}

/// Province-specific tax amounts for one subtotal, all at cent precision.
///
/// `total == subtotal + gst + pst + hst + qst` holds exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub jurisdiction: Jurisdiction,
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub pst: Decimal,
    pub hst: Decimal,
    pub qst: Decimal,
    pub total: Decimal,
}

impl TaxCalculation {
    pub fn amount(&self, component: TaxComponent) -> Decimal {
        match component {
            TaxComponent::Hst => self.hst,
            TaxComponent::Gst => self.gst,
            TaxComponent::Pst => self.pst,
            TaxComponent::Qst => self.qst,
        }
    }

    /// Sum of the four tax amounts
    pub fn tax_total(&self) -> Decimal {
        self.gst + self.pst + self.hst + self.qst
    }
}

/// A single displayed tax line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdownLine {
    pub component: TaxComponent,
    pub label: String,
    pub rate: Decimal,
    pub amount: Decimal,
}
