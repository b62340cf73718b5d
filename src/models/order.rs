use crate::models::id::RecordId;
use crate::models::post::null_as_empty;
use serde::{Deserialize, Serialize};

/// Payment states the backend is known to report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
    /// Anything else; displayed verbatim
    Unknown,
}

impl PaymentStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "pending" => PaymentStatus::Pending,
            "success" => PaymentStatus::Success,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    pub user_id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
    #[serde(default)]
    pub total_amount: f64,
    /// Backend-authoritative; never computed locally
    #[serde(default)]
    pub payment_status: String,
}

impl Order {
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::parse(&self.payment_status)
    }
}

/// Body of `POST /api/orders`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: RecordId,
    pub items: Vec<String>,
    pub total_amount: u32,
}

/// Body of `POST /api/payments/mock-complete`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockPayment {
    pub order_id: RecordId,
    pub success: bool,
}
