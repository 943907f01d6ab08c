pub mod payment_request;
pub mod payment_response;

pub use payment_request::{
    CreatePaymentRequest, GenerateInvoiceRequest, ProviderQuery, RefundRequest,
    VerifyPaymentRequest,
};
pub use payment_response::{
    CreatePaymentResponse, Envelope, InvoiceResponse, RefundResponse, VerifyPaymentResponse,
};
