//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payment records service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates store operations)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: PaymentStore`, allowing
//! different store implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;
