//! Tax controller for HTTP endpoints
//!
//! Used by the invoice-generation flow to price a subtotal and to render
//! the tax lines of an invoice.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::format_cad;
use crate::core::error::AppError;
use crate::middleware::MetricsCollector;
use crate::modules::taxes::models::{Jurisdiction, TaxBreakdownLine, TaxCalculation, TaxRates};
use crate::modules::taxes::services::TaxCalculator;

/// Request body for POST /taxes/calculate
#[derive(Debug, Deserialize)]
pub struct CalculateTaxRequest {
    pub subtotal: Decimal,
    pub jurisdiction: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JurisdictionResponse {
    pub code: String,
    pub name: String,
    pub rates: TaxRates,
    pub combined_rate: Decimal,
    pub labels: Vec<String>,
}

impl From<Jurisdiction> for JurisdictionResponse {
    fn from(jurisdiction: Jurisdiction) -> Self {
        let rates = jurisdiction.rates();
        Self {
            code: jurisdiction.code().to_string(),
            name: jurisdiction.name().to_string(),
            combined_rate: rates.combined(),
            labels: rates.labels(),
            rates,
        }
    }
}

/// Display strings, already formatted for the en-CA locale
#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedAmounts {
    pub subtotal: String,
    pub lines: Vec<FormattedLine>,
    pub total: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedLine {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateTaxResponse {
    pub calculation: TaxCalculation,
    pub breakdown: Vec<TaxBreakdownLine>,
    pub formatted: FormattedAmounts,
}

impl CalculateTaxResponse {
    pub fn new(calculation: TaxCalculation, breakdown: Vec<TaxBreakdownLine>) -> Self {
        let formatted = FormattedAmounts {
            subtotal: format_cad(calculation.subtotal),
            lines: breakdown
                .iter()
                .map(|line| FormattedLine {
                    label: line.label.clone(),
                    amount: format_cad(line.amount),
                })
                .collect(),
            total: format_cad(calculation.total),
        };

        Self {
            calculation,
            breakdown,
            formatted,
        }
    }
}

/// List every jurisdiction with its rates
///
/// GET /taxes/jurisdictions
pub async fn list_jurisdictions() -> HttpResponse {
    let jurisdictions: Vec<JurisdictionResponse> = Jurisdiction::ALL
        .into_iter()
        .map(JurisdictionResponse::from)
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "jurisdictions": jurisdictions,
    }))
}

/// Get rates for one jurisdiction
///
/// GET /taxes/jurisdictions/{code}
pub async fn get_jurisdiction(code: web::Path<String>) -> Result<HttpResponse, AppError> {
    let jurisdiction: Jurisdiction = code.parse()?;

    Ok(HttpResponse::Ok().json(JurisdictionResponse::from(jurisdiction)))
}

/// Calculate the tax on a subtotal
///
/// POST /taxes/calculate
#[tracing::instrument(skip(metrics, request), fields(jurisdiction = %request.jurisdiction))]
pub async fn calculate_tax(
    metrics: web::Data<MetricsCollector>,
    request: web::Json<CalculateTaxRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let jurisdiction: Jurisdiction = request.jurisdiction.parse()?;

    let calculator = TaxCalculator::new();
    let calculation = calculator.calculate(request.subtotal, jurisdiction)?;
    let breakdown = calculator.breakdown(&calculation);

    metrics.record_calculation(jurisdiction);

    Ok(HttpResponse::Ok().json(CalculateTaxResponse::new(calculation, breakdown)))
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("/jurisdictions", web::get().to(list_jurisdictions))
            .route("/jurisdictions/{code}", web::get().to(get_jurisdiction))
            .route("/calculate", web::post().to(calculate_tax)),
    );
}
