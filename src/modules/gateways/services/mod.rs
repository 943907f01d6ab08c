pub mod dummy;
pub mod gateway_registry;
pub mod gateway_trait;
pub mod razorpay;

pub use dummy::DummyGateway;
pub use gateway_registry::{get_gateway, list_gateways, GatewayInfo, ProviderKind};
pub use gateway_trait::{
    GatewayConfig, InvoiceDetails, OrderSummary, PaymentGateway, PaymentOutcome,
};
pub use razorpay::{RazorpayClient, RazorpayGateway};
