// Property-based tests for provider selection
//
// Any selector other than a known provider name resolves to the dummy
// gateway; the lookup never fails.

use payment_facade::core::AppError;
use payment_facade::gateways::{get_gateway, GatewayConfig, ProviderKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_unrecognized_names_select_dummy(name in "\\PC*") {
        prop_assume!(name != "razorpay");

        prop_assert_eq!(ProviderKind::from_name(&name), ProviderKind::Dummy);
        let gateway = get_gateway(&name);
        prop_assert_eq!(gateway.name(), "dummy");
    }

    #[test]
    fn test_case_variants_are_not_recognized(
        name in "[rR][aA][zZ][oO][rR][pP][aA][yY]"
    ) {
        let expected = if name == "razorpay" { "razorpay" } else { "dummy" };
        let gateway = get_gateway(&name);
        prop_assert_eq!(gateway.name(), expected);
    }

    #[test]
    fn test_lookup_is_deterministic(name in "[a-z]{0,12}") {
        prop_assert_eq!(ProviderKind::from_name(&name), ProviderKind::from_name(&name));
    }
}

#[test]
fn test_empty_name_selects_dummy() {
    assert_eq!(get_gateway("").name(), "dummy");
}

#[tokio::test]
async fn test_each_lookup_returns_uninitialized_gateway() {
    let config = GatewayConfig::from([
        ("key".to_string(), "rzp_test_key".to_string()),
        ("secret".to_string(), "rzp_test_secret".to_string()),
    ]);
    let mut first = get_gateway("razorpay");
    first.init(&config).await.unwrap();

    // A second lookup shares nothing with the first.
    let second = get_gateway("razorpay");
    let result = second.create_payment(500, "INR", "r1").await;
    assert!(matches!(result, Err(AppError::Configuration(_))));
}
