//! Database row types and conversions shared by the SQL adapters.

use sqlx::FromRow;

use payments_types::{Payment, PaymentId, StoreError};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Payment row from SQLite, where amount and timestamp are stored as text.
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct DbSqlitePayment {
    pub id: i64,
    pub transaction_id: String,
    pub amount: String,
    pub currency: String,
    pub timestamp: String,
}

/// Payment row from PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct DbPgPayment {
    pub id: i64,
    pub transaction_id: String,
    pub amount: rust_decimal::Decimal,
    pub currency: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
pub fn parse_amount(s: &str) -> Result<rust_decimal::Decimal, StoreError> {
    s.parse()
        .map_err(|e| StoreError::Database(format!("Invalid amount {}: {}", s, e)))
}

#[cfg(feature = "sqlite")]
pub fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, StoreError> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| StoreError::Database(format!("Invalid timestamp {}: {}", s, e)))?
        .with_timezone(&chrono::Utc))
}

/// Maps a write failure, turning unique violations into constraint errors.
pub fn map_write_error(err: sqlx::Error, transaction_id: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::ConstraintViolation(format!(
                "transaction ID {} already exists",
                transaction_id
            ))
        }
        _ => StoreError::Database(err.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
impl DbSqlitePayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, StoreError> {
        let amount = parse_amount(&self.amount)?;
        let timestamp = parse_timestamp(&self.timestamp)?;

        Ok(Payment::from_parts(
            PaymentId::from_i64(self.id),
            self.transaction_id,
            amount,
            self.currency,
            timestamp,
        ))
    }
}

#[cfg(feature = "postgres")]
impl DbPgPayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, StoreError> {
        Ok(Payment::from_parts(
            PaymentId::from_i64(self.id),
            self.transaction_id,
            self.amount,
            self.currency,
            self.timestamp,
        ))
    }
}
