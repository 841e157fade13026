//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{TOKEN_COOKIE_LIFETIME_MINUTES, TOKEN_COOKIE_NAME};
use crate::domain::LoginRequest;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

fn token_cookie(value: String, lifetime: Duration) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE_NAME, value))
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(lifetime)
        .expires(OffsetDateTime::now_utc() + lifetime)
        .build()
}

/// Login with account number and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, token also set as cookie", body = TokenResponse),
        (status = 400, description = "Bad body or wrong credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<TokenResponse>)> {
    let token = state
        .auth_service
        .login(payload.number, payload.password)
        .await?;

    let cookie = token_cookie(
        token.token.clone(),
        Duration::minutes(TOKEN_COOKIE_LIFETIME_MINUTES),
    );

    Ok((jar.add(cookie), Json(token)))
}

/// Clear the token cookie
///
/// Tokens are stateless; one already handed out stays valid until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Cookie cleared", body = MessageResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let expired = Cookie::build((TOKEN_COOKIE_NAME, ""))
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build();

    (jar.add(expired), Json(MessageResponse::new("logged out")))
}
