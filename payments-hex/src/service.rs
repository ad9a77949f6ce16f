//! Payment Application Service
//!
//! Orchestrates payment operations through the store port.
//! Contains NO infrastructure logic - pure business orchestration.

use payments_types::{AppError, NewPayment, Payment, PaymentStore, StoreError};

/// Application service for payment records.
///
/// Generic over `S: PaymentStore` - the adapter is injected at compile time.
/// This enables:
/// - Swapping stores without code changes
/// - Testing with an in-memory store
/// - Compile-time checks for port implementation
pub struct PaymentService<S: PaymentStore> {
    store: S,
}

impl<S: PaymentStore> PaymentService<S> {
    /// Creates a new payment service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a new payment.
    ///
    /// Any store failure, a duplicate transaction ID included, is reported
    /// as `AppError::PaymentProcessingFailed`.
    #[tracing::instrument(skip_all, fields(transaction_id = %payment.transaction_id()))]
    pub async fn process_payment(&self, payment: NewPayment) -> Result<Payment, AppError> {
        payment.validate()?;

        let stored = self
            .store
            .insert(payment)
            .await
            .map_err(processing_failed)?;

        tracing::info!(id = %stored.id(), "Payment stored");
        Ok(stored)
    }

    /// Looks up a payment by its transaction ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_payment_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Payment, AppError> {
        self.store
            .find_by_transaction_id(transaction_id)
            .await
            .map_err(processing_failed)?
            .ok_or_else(|| AppError::not_found(transaction_id))
    }

    /// Deletes the payment with the given transaction ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete_payment(&self, transaction_id: &str) -> Result<(), AppError> {
        let payment = self.get_payment_by_transaction_id(transaction_id).await?;

        // The store deletes only the exact row fetched above and reports NotFound otherwise.
        match self.store.delete(&payment).await {
            Ok(()) => {
                tracing::info!(id = %payment.id(), "Payment deleted");
                Ok(())
            }
            // Removed by a concurrent request between lookup and delete
            Err(StoreError::NotFound) => Err(AppError::not_found(transaction_id)),
            Err(err) => Err(processing_failed(err)),
        }
    }
}

fn processing_failed(cause: StoreError) -> AppError {
    tracing::error!(error = %cause, "Payment store operation failed");
    AppError::from(cause)
}
