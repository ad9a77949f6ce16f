//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::{CreatePaymentRequest, ErrorResponse, Payment};
use utoipa::OpenApi;

// Dummy functions to generate path documentation.
// The real handlers are generic over the store, so they are described here.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Record a new payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Payment stored", body = Payment),
        (status = 400, description = "Malformed body or blank fields", body = ErrorResponse),
        (status = 500, description = "Error processing payment", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Get a payment by transaction ID
#[utoipa::path(
    get,
    path = "/payments/{transaction_id}",
    tag = "payments",
    params(
        ("transaction_id" = String, Path, description = "Caller-supplied transaction ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = Payment),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn get_payment() {}

/// Delete a payment by transaction ID
#[utoipa::path(
    delete,
    path = "/payments/{transaction_id}",
    tag = "payments",
    params(
        ("transaction_id" = String, Path, description = "Caller-supplied transaction ID")
    ),
    responses(
        (status = 200, description = "Payment deleted"),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn delete_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Records Service API",
        version = "1.0.0",
        description = "Create, look up and delete payment records keyed by a caller-supplied transaction ID.",
        license(name = "MIT"),
    ),
    paths(health, create_payment, get_payment, delete_payment),
    components(schemas(Payment, CreatePaymentRequest, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment record operations"),
    )
)]
pub struct ApiDoc;
