//! # Payments Types
//!
//! Domain types and port traits for the payment records service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Payment, NewPayment, PaymentId)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, store and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{NewPayment, Payment, PaymentId};
pub use dto::*;
pub use error::{AppError, DomainError, StoreError};
pub use ports::PaymentStore;
