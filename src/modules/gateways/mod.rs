pub mod controllers;
pub mod services;

pub use controllers::configure;
pub use services::{
    get_gateway, DummyGateway, GatewayConfig, GatewayInfo, InvoiceDetails, OrderSummary,
    PaymentGateway, PaymentOutcome, ProviderKind, RazorpayGateway,
};
