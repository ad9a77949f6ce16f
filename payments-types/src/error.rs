//! Error types for the payment records service.

/// Domain-level errors (invalid payment values).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Transaction ID cannot be empty")]
    EmptyTransactionId,

    #[error("Currency cannot be empty")]
    EmptyCurrency,
}

/// Store-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Entity not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Payment not found for transaction ID: {transaction_id}")]
    PaymentNotFound { transaction_id: String },

    #[error("Error processing payment")]
    PaymentProcessingFailed {
        #[source]
        cause: StoreError,
    },

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn not_found(transaction_id: impl Into<String>) -> Self {
        AppError::PaymentNotFound {
            transaction_id: transaction_id.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(cause: StoreError) -> Self {
        AppError::PaymentProcessingFailed { cause }
    }
}
