// Test Data Factory
//
// Request payloads for the payment endpoints.

use serde_json::{json, Value};

pub struct TestDataFactory;

impl TestDataFactory {
    /// Valid POST /pay payload
    pub fn create_payment_payload() -> Value {
        json!({
            "amount": 500,
            "currency": "INR",
            "receipt": "r1"
        })
    }

    /// Valid POST /verify payload
    pub fn verify_payment_payload() -> Value {
        json!({
            "payment_id": "pay_29QQoUBi66xm2f",
            "signature": "9ef4dffbfd84f1318f6739a3ce19f9d85851857ae648f114332d8401e0949a3d"
        })
    }

    /// Valid POST /refund payload
    pub fn refund_payload() -> Value {
        json!({
            "payment_id": "pay_29QQoUBi66xm2f",
            "amount": 250
        })
    }

    /// Valid POST /invoice payload
    pub fn invoice_payload() -> Value {
        json!({
            "payment_id": "pay_29QQoUBi66xm2f",
            "details": {
                "customer": {"name": "Gaurav Kumar", "email": "gaurav@example.com"},
                "line_items": [{"name": "Book", "amount": 500}]
            }
        })
    }
}
