// Gateway initialization failures surface as 500 envelopes
//
// Without a configured key/secret the live provider refuses to init; the
// request is answered before the body is decoded.

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::test;
use helpers::TestDataFactory;
use payment_facade::config::ProviderCredentials;
use serde_json::{json, Value};

fn key_without_secret() -> ProviderCredentials {
    ProviderCredentials {
        key_id: Some("rzp_test_key".to_string()),
        ..ProviderCredentials::unconfigured()
    }
}

#[actix_web::test]
async fn test_pay_with_unconfigured_live_provider() {
    let app = init_app!(ProviderCredentials::unconfigured());

    let req = test::TestRequest::post()
        .uri("/pay?provider=razorpay")
        .set_json(TestDataFactory::create_payment_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "payment_id": "",
            "error": "Configuration error: missing Razorpay key or secret in config"
        })
    );
}

#[actix_web::test]
async fn test_verify_with_missing_secret() {
    let app = init_app!(key_without_secret());

    let req = test::TestRequest::post()
        .uri("/verify?provider=razorpay")
        .set_json(TestDataFactory::verify_payment_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["verified"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Configuration error"));
}

#[actix_web::test]
async fn test_init_failure_precedes_body_decoding() {
    let app = init_app!(ProviderCredentials::unconfigured());

    let req = test::TestRequest::post()
        .uri("/pay?provider=razorpay")
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["payment_id"], "");
}

#[actix_web::test]
async fn test_refund_and_invoice_with_unconfigured_live_provider() {
    let app = init_app!(ProviderCredentials::unconfigured());

    let req = test::TestRequest::post()
        .uri("/refund?provider=razorpay")
        .set_json(TestDataFactory::refund_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["refund_id"], "");

    let req = test::TestRequest::post()
        .uri("/invoice?provider=razorpay")
        .set_json(TestDataFactory::invoice_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice_id"], "");
}

#[actix_web::test]
async fn test_first_provider_value_selects_live_gateway() {
    let app = init_app!(ProviderCredentials::unconfigured());

    let req = test::TestRequest::post()
        .uri("/pay?provider=razorpay&provider=dummy")
        .set_json(TestDataFactory::create_payment_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["payment_id"], "");
}

#[actix_web::test]
async fn test_dummy_unaffected_by_missing_credentials() {
    let app = init_app!(ProviderCredentials::unconfigured());

    let req = test::TestRequest::post()
        .uri("/pay?provider=dummy")
        .set_json(TestDataFactory::create_payment_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
