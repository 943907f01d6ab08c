use std::fmt;

use serde::Serialize;

use super::dummy::DummyGateway;
use super::gateway_trait::PaymentGateway;
use super::razorpay::RazorpayGateway;

/// Known payment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Dummy,
    Razorpay,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Dummy, ProviderKind::Razorpay];

    /// Resolve a provider selector; anything unrecognized (including "") is the dummy
    pub fn from_name(name: &str) -> Self {
        match name {
            "razorpay" => ProviderKind::Razorpay,
            _ => ProviderKind::Dummy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Dummy => "dummy",
            ProviderKind::Razorpay => "razorpay",
        }
    }

    /// Whether the provider talks to a real payment network
    pub fn is_live(&self) -> bool {
        matches!(self, ProviderKind::Razorpay)
    }

    /// Fresh, uninitialized gateway for this provider
    pub fn new_gateway(&self) -> Box<dyn PaymentGateway> {
        match self {
            ProviderKind::Dummy => Box::new(DummyGateway::new()),
            ProviderKind::Razorpay => Box::new(RazorpayGateway::new()),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a gateway by provider name
///
/// Never fails: unknown names get the dummy gateway. The returned gateway
/// must be `init`ed before use.
pub fn get_gateway(name: &str) -> Box<dyn PaymentGateway> {
    ProviderKind::from_name(name).new_gateway()
}

/// List all available gateways
pub fn list_gateways() -> Vec<GatewayInfo> {
    ProviderKind::ALL
        .iter()
        .map(|kind| GatewayInfo {
            name: *kind,
            live: kind.is_live(),
            default: *kind == ProviderKind::default(),
        })
        .collect()
}

/// Gateway information for listing
#[derive(Debug, Clone, Serialize)]
pub struct GatewayInfo {
    pub name: ProviderKind,
    pub live: bool,
    pub default: bool,
}
