// Property-based tests for the dummy gateway
//
// Every operation succeeds with its canned identifier regardless of input.

use payment_facade::gateways::{DummyGateway, GatewayConfig, InvoiceDetails, PaymentGateway};
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn test_create_payment_always_dummy_id(
        amount in any::<i64>(),
        currency in "\\PC{0,5}",
        receipt in "\\PC{0,20}"
    ) {
        let outcome = block_on(DummyGateway::new().create_payment(amount, &currency, &receipt))
            .unwrap();

        prop_assert_eq!(outcome.payment_id(), "dummy_payment_id");
        prop_assert!(outcome.order_summary().is_none());
    }

    #[test]
    fn test_verify_payment_always_true(
        payment_id in "\\PC{0,20}",
        signature in "\\PC{0,64}"
    ) {
        let verified = block_on(DummyGateway::new().verify_payment(&payment_id, &signature));
        prop_assert!(verified.unwrap());
    }

    #[test]
    fn test_init_accepts_any_config(
        entries in proptest::collection::hash_map("[a-z]{1,8}", "\\PC{0,16}", 0..5)
    ) {
        let config: GatewayConfig = entries;
        let mut gateway = DummyGateway::new();
        prop_assert!(block_on(gateway.init(&config)).is_ok());
    }

    #[test]
    fn test_refund_always_dummy_id(payment_id in "\\PC{0,20}", amount in any::<i64>()) {
        let refund_id = block_on(DummyGateway::new().refund(&payment_id, amount)).unwrap();
        prop_assert_eq!(refund_id, "dummy_refund_id");
    }
}

#[tokio::test]
async fn test_generate_invoice_ignores_details() {
    let mut details = InvoiceDetails::new();
    details.insert("note".to_string(), serde_json::json!("anything"));

    let invoice_id = DummyGateway::new()
        .generate_invoice("pay_1", &details)
        .await
        .unwrap();
    assert_eq!(invoice_id, "dummy_invoice_id");
}

#[tokio::test]
async fn test_empty_signature_is_verified() {
    assert!(DummyGateway::new().verify_payment("", "").await.unwrap());
}
