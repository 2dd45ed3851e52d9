// Contract tests for the tax endpoints
//
// Exercises the real route configuration in-process via actix_web::test.

use actix_web::{test, App};
use serde_json::{json, Value};

use lexledger::configure_app;
use lexledger::middleware::{MetricsCollector, MetricsMiddleware, RequestId};

macro_rules! app {
    () => {
        app!(MetricsCollector::new())
    };
    ($collector:expr) => {{
        let collector = $collector;
        test::init_service(
            App::new()
                .wrap(MetricsMiddleware::new(collector.clone()))
                .wrap(RequestId)
                .configure(configure_app(collector)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_list_jurisdictions() {
    let app = app!();

    let req = test::TestRequest::get().uri("/taxes/jurisdictions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let jurisdictions = body["jurisdictions"].as_array().unwrap();
    assert_eq!(jurisdictions.len(), 13);

    let quebec = jurisdictions.iter().find(|j| j["code"] == "QC").unwrap();
    assert_eq!(quebec["name"], "Quebec");
    assert_eq!(quebec["rates"]["qst"], "0.09975");
    assert_eq!(quebec["labels"], json!(["GST (5%)", "QST (9.975%)"]));
}

#[actix_web::test]
async fn test_get_jurisdiction_is_case_insensitive() {
    let app = app!();

    let req = test::TestRequest::get().uri("/taxes/jurisdictions/sk").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SK");
    assert_eq!(body["combined_rate"], "0.11");
}

#[actix_web::test]
async fn test_get_unknown_jurisdiction() {
    let app = app!();

    let req = test::TestRequest::get().uri("/taxes/jurisdictions/ZZ").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_JURISDICTION");
}

#[actix_web::test]
async fn test_calculate_ontario() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"subtotal": "100.00", "jurisdiction": "ON"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["calculation"]["jurisdiction"], "ON");
    assert_eq!(body["calculation"]["subtotal"], "100.00");
    assert_eq!(body["calculation"]["hst"], "13.00");
    assert_eq!(body["calculation"]["gst"], "0.00");
    assert_eq!(body["calculation"]["total"], "113.00");

    let breakdown = body["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0]["component"], "hst");
    assert_eq!(breakdown[0]["label"], "HST (13%)");
    assert_eq!(breakdown[0]["amount"], "13.00");

    assert_eq!(body["formatted"]["total"], "$113.00");
    assert_eq!(body["formatted"]["lines"][0]["amount"], "$13.00");
}

#[actix_web::test]
async fn test_calculate_accepts_numeric_subtotal() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"subtotal": 33.33, "jurisdiction": "SK"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["calculation"]["gst"], "1.67");
    assert_eq!(body["calculation"]["pst"], "2.00");
    assert_eq!(body["calculation"]["total"], "37.00");
}

#[actix_web::test]
async fn test_calculate_rejects_negative_subtotal() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"subtotal": "-50.00", "jurisdiction": "BC"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_calculate_rejects_subtotal_too_large() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"subtotal": "79228162514264337593543950335", "jurisdiction": "ON"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_calculate_rejects_unknown_jurisdiction() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"subtotal": "10.00", "jurisdiction": "CA"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_JURISDICTION");
}

#[actix_web::test]
async fn test_calculate_rejects_malformed_body() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/taxes/calculate")
        .set_json(json!({"jurisdiction": "ON"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_metrics_track_calculations() {
    let collector = MetricsCollector::new();
    let app = app!(collector.clone());

    for code in ["QC", "QC", "AB"] {
        let req = test::TestRequest::post()
            .uri("/taxes/calculate")
            .set_json(json!({"subtotal": "10.00", "jurisdiction": code}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["calculations_by_jurisdiction"]["QC"], 2);
    assert_eq!(body["calculations_by_jurisdiction"]["AB"], 1);
    assert_eq!(collector.get_metrics().endpoint_counts.get("/taxes/calculate"), Some(&3));
}

#[actix_web::test]
async fn test_metrics_key_endpoints_by_route_pattern() {
    let collector = MetricsCollector::new();
    let app = app!(collector.clone());

    for uri in ["/taxes/jurisdictions/AB", "/taxes/jurisdictions/ZZ", "/nope", "/also/nope"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_service(&app, req).await;
    }

    let metrics = collector.get_metrics();
    assert_eq!(metrics.endpoint_counts.get("/taxes/jurisdictions/{code}"), Some(&2));
    assert_eq!(metrics.endpoint_errors.get("/taxes/jurisdictions/{code}"), Some(&1));
    assert_eq!(metrics.endpoint_counts.get("unmatched"), Some(&2));
    assert!(!metrics.endpoint_counts.contains_key("/taxes/jurisdictions/AB"));
    assert_eq!(metrics.endpoint_counts.len(), 2);
}

#[actix_web::test]
async fn test_health() {
    let app = app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
