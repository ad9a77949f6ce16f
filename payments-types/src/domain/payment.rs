//! Payment domain model.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Store-assigned surrogate identifier for a Payment.
///
/// Opaque to callers: it is never part of a create request and is only
/// used internally by the store to address a row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PaymentId(i64);

impl PaymentId {
    /// Wraps a raw store identifier.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw store identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// Postgres keeps microseconds, so anything finer would not round-trip.
fn normalize_timestamp(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(6)
}

/// A payment that has not been stored yet.
///
/// This is what the store's `insert` consumes; the surrogate id is
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewPayment {
    transaction_id: String,
    amount: Decimal,
    currency: String,
    timestamp: DateTime<Utc>,
}

impl NewPayment {
    /// Creates a new payment recorded at the current time.
    pub fn new(
        transaction_id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            currency: currency.into(),
            timestamp: normalize_timestamp(Utc::now()),
        }
    }

    /// Overrides the recording time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = normalize_timestamp(timestamp);
        self
    }

    /// Checks the fields that must be present before anything is stored.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.transaction_id.trim().is_empty() {
            return Err(DomainError::EmptyTransactionId);
        }
        if self.currency.trim().is_empty() {
            return Err(DomainError::EmptyCurrency);
        }
        Ok(())
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A stored payment record.
///
/// Payments are immutable once created; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Store-assigned surrogate id
    #[schema(value_type = i64, example = 1)]
    id: PaymentId,
    /// Caller-supplied unique transaction identifier
    #[schema(example = "TXN12345")]
    transaction_id: String,
    /// Exact decimal amount, serialized as a string
    #[schema(value_type = String, example = "200.00")]
    amount: Decimal,
    /// Currency code (not validated against ISO 4217)
    #[schema(example = "USD")]
    currency: String,
    /// When the payment was recorded
    timestamp: DateTime<Utc>,
}

impl Payment {
    /// Builds the stored form of `new` under the id the store assigned.
    pub fn from_new(id: PaymentId, new: NewPayment) -> Self {
        Self {
            id,
            transaction_id: new.transaction_id,
            amount: new.amount,
            currency: new.currency,
            timestamp: new.timestamp,
        }
    }

    /// Reconstructs a payment from database fields.
    pub fn from_parts(
        id: PaymentId,
        transaction_id: String,
        amount: Decimal,
        currency: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            transaction_id,
            amount,
            currency,
            timestamp,
        }
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the record without its surrogate id.
    pub fn to_new_payment(&self) -> NewPayment {
        NewPayment {
            transaction_id: self.transaction_id.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            timestamp: self.timestamp,
        }
    }
}
