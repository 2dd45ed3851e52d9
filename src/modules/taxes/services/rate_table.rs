//! Sales tax rates per province and territory (2024).
//!
//! Harmonized provinces carry only HST; everyone else pays GST plus, where
//! applicable, PST or QST. Percent labels are generated from these values.

use rust_decimal::Decimal;

use crate::modules::taxes::models::{Jurisdiction, TaxRates};

fn fraction(basis: i64, scale: u32) -> Decimal {
    Decimal::new(basis, scale)
}

/// Rates for a jurisdiction
pub fn rates_for(jurisdiction: Jurisdiction) -> TaxRates {
    let gst = fraction(5, 2);

    match jurisdiction {
        Jurisdiction::Ontario => TaxRates::harmonized(fraction(13, 2)),
        Jurisdiction::NewBrunswick
        | Jurisdiction::NewfoundlandAndLabrador
        | Jurisdiction::NovaScotia
        | Jurisdiction::PrinceEdwardIsland => TaxRates::harmonized(fraction(15, 2)),
        Jurisdiction::BritishColumbia | Jurisdiction::Manitoba => {
            TaxRates::federal_provincial(gst, fraction(7, 2))
        }
        Jurisdiction::Saskatchewan => TaxRates::federal_provincial(gst, fraction(6, 2)),
        Jurisdiction::Quebec => TaxRates::federal_quebec(gst, fraction(9975, 5)),
        Jurisdiction::Alberta
        | Jurisdiction::NorthwestTerritories
        | Jurisdiction::Nunavut
        | Jurisdiction::Yukon => TaxRates::federal_provincial(gst, Decimal::ZERO),
    }
}

impl Jurisdiction {
    pub fn rates(&self) -> TaxRates {
        rates_for(*self)
    }
}
