//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::NewPayment;

/// Request to record a new payment.
///
/// Any `id` field in the body is ignored; the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Unique transaction identifier
    #[schema(example = "TXN12345")]
    pub transaction_id: String,
    /// Payment amount; a decimal string or JSON number
    #[schema(value_type = String, example = "200.00")]
    pub amount: Decimal,
    /// Currency code
    #[schema(example = "USD")]
    pub currency: String,
    /// When the payment was made; defaults to the time of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<CreatePaymentRequest> for NewPayment {
    fn from(req: CreatePaymentRequest) -> Self {
        let payment = NewPayment::new(req.transaction_id, req.amount, req.currency);
        match req.timestamp {
            Some(timestamp) => payment.with_timestamp(timestamp),
            None => payment,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
    /// Error category label
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable message
    #[schema(example = "Payment not found for transaction ID: TXN99999")]
    pub message: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub code: u16,
}
