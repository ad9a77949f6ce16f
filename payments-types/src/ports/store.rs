//! Payment store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory) implement this trait.

use crate::domain::{NewPayment, Payment};
use crate::error::StoreError;

/// The persistence port for payment records.
///
/// Implementations must make the uniqueness check on the transaction ID and
/// the insert atomic, and must never expose a partially written record.
/// Mutating operations run in a single database transaction.
#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync + 'static {
    /// Persists a new payment and returns it with its assigned id.
    ///
    /// Fails with `StoreError::ConstraintViolation` if the transaction ID is
    /// already stored.
    async fn insert(&self, payment: NewPayment) -> Result<Payment, StoreError>;

    /// Exact-match lookup by transaction ID.
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payment>, StoreError>;

    /// Removes a previously fetched payment.
    ///
    /// Fails with `StoreError::NotFound` if the record is already gone.
    async fn delete(&self, payment: &Payment) -> Result<(), StoreError>;
}
