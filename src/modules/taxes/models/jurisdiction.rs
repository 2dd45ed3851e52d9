use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::AppError;

/// Canadian province or territory, the lookup key for sales tax rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Jurisdiction {
    #[serde(rename = "AB")]
    Alberta,
    #[serde(rename = "BC")]
    BritishColumbia,
    #[serde(rename = "MB")]
    Manitoba,
    #[serde(rename = "NB")]
    NewBrunswick,
    #[serde(rename = "NL")]
    NewfoundlandAndLabrador,
    #[serde(rename = "NS")]
    NovaScotia,
    #[serde(rename = "NT")]
    NorthwestTerritories,
    #[serde(rename = "NU")]
    Nunavut,
    #[serde(rename = "ON")]
    Ontario,
    #[serde(rename = "PE")]
    PrinceEdwardIsland,
    #[serde(rename = "QC")]
    Quebec,
    #[serde(rename = "SK")]
    Saskatchewan,
    #[serde(rename = "YT")]
    Yukon,
}

impl Jurisdiction {
    /// All jurisdictions, ordered by code
    pub const ALL: [Jurisdiction; 13] = [
        Jurisdiction::Alberta,
        Jurisdiction::BritishColumbia,
        Jurisdiction::Manitoba,
        Jurisdiction::NewBrunswick,
        Jurisdiction::NewfoundlandAndLabrador,
        Jurisdiction::NovaScotia,
        Jurisdiction::NorthwestTerritories,
        Jurisdiction::Nunavut,
        Jurisdiction::Ontario,
        Jurisdiction::PrinceEdwardIsland,
        Jurisdiction::Quebec,
        Jurisdiction::Saskatchewan,
        Jurisdiction::Yukon,
    ];

    /// Two-letter postal abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Alberta => "AB",
            Jurisdiction::BritishColumbia => "BC",
            Jurisdiction::Manitoba => "MB",
            Jurisdiction::NewBrunswick => "NB",
            Jurisdiction::NewfoundlandAndLabrador => "NL",
            Jurisdiction::NovaScotia => "NS",
            Jurisdiction::NorthwestTerritories => "NT",
            Jurisdiction::Nunavut => "NU",
            Jurisdiction::Ontario => "ON",
            Jurisdiction::PrinceEdwardIsland => "PE",
            Jurisdiction::Quebec => "QC",
            Jurisdiction::Saskatchewan => "SK",
            Jurisdiction::Yukon => "YT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Jurisdiction::Alberta => "Alberta",
            Jurisdiction::BritishColumbia => "British Columbia",
            Jurisdiction::Manitoba => "Manitoba",
            Jurisdiction::NewBrunswick => "New Brunswick",
            Jurisdiction::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Jurisdiction::NovaScotia => "Nova Scotia",
            Jurisdiction::NorthwestTerritories => "Northwest Territories",
            Jurisdiction::Nunavut => "Nunavut",
            Jurisdiction::Ontario => "Ontario",
            Jurisdiction::PrinceEdwardIsland => "Prince Edward Island",
            Jurisdiction::Quebec => "Quebec",
            Jurisdiction::Saskatchewan => "Saskatchewan",
            Jurisdiction::Yukon => "Yukon",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Jurisdiction::ALL
            .into_iter()
            .find(|j| j.code() == code)
            .ok_or_else(|| AppError::invalid_jurisdiction(s.trim()))
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Jurisdiction {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
