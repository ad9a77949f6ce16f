//! Domain models for the payment records service.

pub mod payment;

pub use payment::{NewPayment, Payment, PaymentId};
