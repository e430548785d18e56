use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Shop service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ShopServiceError {
    #[error("missing data")]
    MissingData,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid quantity")]
    InvalidQuantity,
    #[error("invalid price")]
    InvalidPrice,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("customer not found")]
    CustomerNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("password hashing failed")]
    PasswordHash(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ShopServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingData => "MISSING_DATA",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PasswordHash(_) => "PASSWORD_HASH",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ShopServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingData
            | Self::InvalidEmail
            | Self::InvalidQuantity
            | Self::InvalidPrice
            | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::CustomerNotFound | Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyExists => StatusCode::CONFLICT,
            Self::PasswordHash(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are already visible through the TraceLayer; only 500s carry a
        // cause chain worth logging.
        match &self {
            Self::PasswordHash(e) | Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = self.kind(), "internal error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
