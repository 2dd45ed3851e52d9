// Province tax rate table (2024 rates)
//
// Every jurisdiction's four rates must match the published table exactly,
// and labels must be generated from the same numbers.

use lexledger::taxes::{Jurisdiction, TaxRates};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn expected_rates(jurisdiction: Jurisdiction) -> (Decimal, Decimal, Decimal, Decimal) {
    use Jurisdiction::*;

    // (gst, pst, hst, qst)
    match jurisdiction {
        Ontario => (dec!(0), dec!(0), dec!(0.13), dec!(0)),
        NewBrunswick | NewfoundlandAndLabrador | NovaScotia | PrinceEdwardIsland => {
            (dec!(0), dec!(0), dec!(0.15), dec!(0))
        }
        BritishColumbia | Manitoba => (dec!(0.05), dec!(0.07), dec!(0), dec!(0)),
        Saskatchewan => (dec!(0.05), dec!(0.06), dec!(0), dec!(0)),
        Quebec => (dec!(0.05), dec!(0), dec!(0), dec!(0.09975)),
        Alberta | NorthwestTerritories | Nunavut | Yukon => (dec!(0.05), dec!(0), dec!(0), dec!(0)),
    }
}

#[test]
fn test_rates_match_published_table() {
    for jurisdiction in Jurisdiction::ALL {
        let TaxRates { gst, pst, hst, qst } = jurisdiction.rates();
        assert_eq!(
            (gst, pst, hst, qst),
            expected_rates(jurisdiction),
            "rates for {}",
            jurisdiction
        );
    }
}

#[test]
fn test_thirteen_distinct_jurisdictions() {
    let mut codes: Vec<&str> = Jurisdiction::ALL.iter().map(|j| j.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 13);
}

#[test]
fn test_combined_rates() {
    assert_eq!(Jurisdiction::Ontario.rates().combined(), dec!(0.13));
    assert_eq!(Jurisdiction::NovaScotia.rates().combined(), dec!(0.15));
    assert_eq!(Jurisdiction::BritishColumbia.rates().combined(), dec!(0.12));
    assert_eq!(Jurisdiction::Saskatchewan.rates().combined(), dec!(0.11));
    assert_eq!(Jurisdiction::Quebec.rates().combined(), dec!(0.14975));
    assert_eq!(Jurisdiction::Yukon.rates().combined(), dec!(0.05));
}

#[test]
fn test_labels_follow_rates() {
    assert_eq!(Jurisdiction::Ontario.rates().labels(), vec!["HST (13%)"]);
    assert_eq!(Jurisdiction::PrinceEdwardIsland.rates().labels(), vec!["HST (15%)"]);
    assert_eq!(
        Jurisdiction::Manitoba.rates().labels(),
        vec!["GST (5%)", "PST (7%)"]
    );
    assert_eq!(
        Jurisdiction::Saskatchewan.rates().labels(),
        vec!["GST (5%)", "PST (6%)"]
    );
    assert_eq!(
        Jurisdiction::Quebec.rates().labels(),
        vec!["GST (5%)", "QST (9.975%)"]
    );
    assert_eq!(Jurisdiction::Nunavut.rates().labels(), vec!["GST (5%)"]);
}

#[test]
fn test_unknown_code_is_invalid_jurisdiction() {
    let err = "XX".parse::<Jurisdiction>().unwrap_err();
    assert_eq!(err.code(), "INVALID_JURISDICTION");
}
