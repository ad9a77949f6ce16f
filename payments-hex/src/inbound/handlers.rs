//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use utoipa::OpenApi;

use payments_types::{AppError, CreatePaymentRequest, ErrorResponse, PaymentStore};

use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: PaymentStore> {
    pub service: PaymentService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label) = match &self.0 {
            AppError::PaymentNotFound { .. } => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::PaymentProcessingFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Unexpected Error"),
        };

        // Display never includes the store cause; that stays in the logs.
        let body = ErrorResponse {
            timestamp: Utc::now(),
            error: label.to_string(),
            message: self.0.to_string(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Record a new payment.
#[tracing::instrument(skip_all)]
pub async fn create_payment<S: PaymentStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    tracing::debug!(transaction_id = %req.transaction_id, "Creating payment");

    let payment = state.service.process_payment(req.into()).await?;
    Ok(Json(payment))
}

/// Get a payment by transaction ID.
#[tracing::instrument(skip_all, fields(transaction_id = %transaction_id))]
pub async fn get_payment<S: PaymentStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state
        .service
        .get_payment_by_transaction_id(&transaction_id)
        .await?;
    Ok(Json(payment))
}

/// Delete a payment by transaction ID.
#[tracing::instrument(skip_all, fields(transaction_id = %transaction_id))]
pub async fn delete_payment<S: PaymentStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete_payment(&transaction_id).await?;
    Ok(StatusCode::OK)
}
