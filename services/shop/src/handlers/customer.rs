use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use tienda_domain::id::CustomerId;

use crate::domain::types::Customer;
use crate::error::ShopServiceError;
use crate::handlers::{DataResponse, MessageResponse, json_body};
use crate::state::AppState;
use crate::usecase::account::{
    AuthenticateCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
    RegisterCustomerInput, RegisterCustomerUseCase, UpdateAddressUseCase, UpdatePasswordInput,
    UpdatePasswordUseCase,
};

/// Public view of a customer. Never carries the password digest.
#[derive(Serialize)]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    #[serde(serialize_with = "tienda_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tienda_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            address: customer.address,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

fn parse_customer_id(raw: &str) -> Result<CustomerId, ShopServiceError> {
    raw.parse().map_err(|_| ShopServiceError::InvalidId)
}

// ── GET /customers/ ──────────────────────────────────────────────────────────

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<CustomerResponse>>>, ShopServiceError> {
    let usecase = ListCustomersUseCase {
        repo: state.customer_repo(),
    };
    let customers = usecase.execute().await?;
    Ok(Json(DataResponse {
        data: customers.into_iter().map(CustomerResponse::from).collect(),
    }))
}

// ── POST /customers/reg ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub customer_id: i32,
}

pub async fn register_customer(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ShopServiceError> {
    let body = json_body(body)?;
    let usecase = RegisterCustomerUseCase {
        repo: state.customer_repo(),
        hasher: state.hasher(),
    };
    let customer = usecase
        .execute(RegisterCustomerInput {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone_number: body.phone_number,
            address: body.address,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Customer registered successfully",
            customer_id: customer.customer_id,
        }),
    ))
}

// ── POST /customers/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_customer(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>, ShopServiceError> {
    let body = json_body(body)?;
    let usecase = AuthenticateCustomerUseCase {
        repo: state.customer_repo(),
        hasher: state.hasher(),
    };
    let customer = usecase.execute(&body.email, &body.password).await?;
    Ok(Json(customer.into()))
}

// ── GET /customers/{id} ──────────────────────────────────────────────────────

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ShopServiceError> {
    let customer_id = parse_customer_id(&id)?;
    let usecase = GetCustomerUseCase {
        repo: state.customer_repo(),
    };
    let customer = usecase.execute(customer_id).await?;
    Ok(Json(customer.into()))
}

// ── PUT /customers/{id}/address ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAddressRequest {
    #[serde(default)]
    pub address: String,
}

pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAddressRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ShopServiceError> {
    let customer_id = parse_customer_id(&id)?;
    let body = json_body(body)?;
    let usecase = UpdateAddressUseCase {
        repo: state.customer_repo(),
    };
    usecase.execute(customer_id, &body.address).await?;
    Ok(Json(MessageResponse {
        message: "Address updated successfully",
    }))
}

// ── PUT /customers/{id}/password ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ShopServiceError> {
    let customer_id = parse_customer_id(&id)?;
    let body = json_body(body)?;
    let usecase = UpdatePasswordUseCase {
        repo: state.customer_repo(),
        hasher: state.hasher(),
    };
    usecase
        .execute(
            customer_id,
            UpdatePasswordInput {
                old_password: body.old_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Password updated successfully",
    }))
}
