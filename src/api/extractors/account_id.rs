//! Account id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// The `{id}` path segment parsed as a UUID.
///
/// Malformed ids become a validation error instead of axum's plain-text
/// rejection, so clients always get the JSON error envelope.
#[derive(Debug, Clone, Copy)]
pub struct AccountId(pub Uuid);

/// Parse a raw path segment into an account id
pub fn parse_account_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::validation(format!("invalid account id: {}", raw)))
}

#[async_trait]
impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        parse_account_id(&raw).map(AccountId)
    }
}
