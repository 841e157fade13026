//! Owner guard middleware.

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::api::extractors::parse_account_id;
use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, TOKEN_COOKIE_NAME};
use crate::errors::{AppError, AuthFailure};

/// Pull the token from the Authorization header, falling back to the
/// `token` cookie. The `Bearer ` prefix is optional.
pub fn extract_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        let token = value.strip_prefix(BEARER_TOKEN_PREFIX).unwrap_or(value);
        return Some(token.trim().to_string());
    }

    jar.get(TOKEN_COOKIE_NAME).map(|c| c.value().to_string())
}

/// Only the account named in the path may pass.
///
/// The token is checked before the path id, so an unauthenticated caller
/// never learns whether an id is well-formed.
pub async fn require_owner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(request.headers(), &jar).ok_or(AuthFailure::InvalidToken)?;
    let account = state.auth_service.validate_token(&token).await?;

    let id = parse_account_id(&raw_id)?;
    if account.id != id {
        tracing::warn!("Account {} denied access to account {}", account.id, id);
        return Err(AuthFailure::PermissionDenied.into());
    }

    Ok(next.run(request).await)
}
