//! Account handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::{AccountId, ValidatedJson};
use crate::api::middleware::require_owner;
use crate::api::AppState;
use crate::domain::{AccountResponse, CreateAccountRequest, TransferRequest};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create account routes.
///
/// `GET /account/:id` always sits behind the owner guard; `DELETE` only
/// when `enforce_delete_ownership` is set.
pub fn account_routes(state: &AppState) -> Router<AppState> {
    let owner_guard = middleware::from_fn_with_state(state.clone(), require_owner);

    let remove = if state.config.enforce_delete_ownership {
        delete(delete_account).route_layer(owner_guard.clone())
    } else {
        delete(delete_account)
    };
    let by_id = get(get_account).route_layer(owner_guard).merge(remove);

    Router::new()
        .route("/account", post(create_account))
        .route("/account/:id", by_id)
        .route("/accounts", get(list_accounts))
        .route("/transfer", post(transfer))
}

/// Open a new account
#[utoipa::path(
    post,
    path = "/account",
    tag = "Accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Validation or storage error", body = ErrorResponse)
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAccountRequest>,
) -> AppResult<Created<AccountResponse>> {
    let account = state.account_service.create_account(payload).await?;
    Ok(Created(AccountResponse::from(account)))
}

/// Get an account (owner only)
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 400, description = "Malformed id or account not found", body = ErrorResponse),
        (status = 401, description = "Invalid token or not the owner", body = ErrorResponse)
    )
)]
pub async fn get_account(
    State(state): State<AppState>,
    AccountId(id): AccountId,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_account(id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = "Accounts",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted (or already absent)", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Owner guard rejected the request", body = ErrorResponse)
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    AccountId(id): AccountId,
) -> AppResult<Json<MessageResponse>> {
    state.account_service.delete_account(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "deleted account with id: {}",
        id
    ))))
}

/// List every account
#[utoipa::path(
    get,
    path = "/accounts",
    tag = "Accounts",
    responses(
        (status = 200, description = "All accounts", body = Vec<AccountResponse>),
        (status = 400, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_accounts(State(state): State<AppState>) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = state.account_service.list_accounts().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Submit a transfer; echoed back, balances untouched
#[utoipa::path(
    post,
    path = "/transfer",
    tag = "Accounts",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Request echoed", body = TransferRequest),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn transfer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TransferRequest>,
) -> AppResult<Json<TransferRequest>> {
    let echoed = state.account_service.transfer(payload).await?;
    Ok(Json(echoed))
}
