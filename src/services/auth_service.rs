//! Authentication service - token issue/validation and login.
//!
//! Tokens are stateless HS256 JWTs carrying the account id as subject.
//! Nothing is stored server-side, so a token stays valid until it expires
//! even after logout.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::run_blocking;
use crate::config::{Config, SECONDS_PER_MINUTE, TOKEN_TYPE_BEARER};
use crate::domain::{Account, Password};
use crate::errors::{AppError, AppResult, AuthFailure};
use crate::infra::AccountRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id the token was issued to
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 900)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, number: i64, password: String) -> AppResult<TokenResponse>;

    /// Sign a token for the given account
    fn issue_token(&self, account: &Account) -> AppResult<String>;

    /// Verify a token and resolve its subject to a stored account.
    /// A subject that cannot be resolved, for any reason, is denied.
    async fn validate_token(&self, token: &str) -> AppResult<Account>;
}

fn encode_claims(account: &Account, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.jwt_expiration_minutes);

    let claims = Claims {
        sub: account.id,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Tokens signed with anything other than HS256 are rejected.
fn decode_claims(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by an account repository.
pub struct Authenticator {
    accounts: Arc<dyn AccountRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(accounts: Arc<dyn AccountRepository>, config: Config) -> Self {
        Self { accounts, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, number: i64, password: String) -> AppResult<TokenResponse> {
        // Unknown numbers and wrong passwords look the same to the caller
        let account = match self.accounts.get_account_by_number(number).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                tracing::info!("Login rejected for unknown account number {}", number);
                return Err(AuthFailure::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let stored = Password::from_hash(account.encrypted_password.clone());
        let valid = run_blocking(move || Ok(stored.verify(&password))).await?;
        if !valid {
            tracing::info!("Login rejected for account {}", account.id);
            return Err(AuthFailure::InvalidCredentials.into());
        }

        let token = self.issue_token(&account)?;
        tracing::info!("Account {} logged in", account.id);

        Ok(TokenResponse {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_minutes * SECONDS_PER_MINUTE,
        })
    }

    fn issue_token(&self, account: &Account) -> AppResult<String> {
        encode_claims(account, &self.config)
    }

    async fn validate_token(&self, token: &str) -> AppResult<Account> {
        let claims = decode_claims(token, &self.config)?;

        // Any failure to resolve the subject, storage errors included, is a 401
        self.accounts
            .get_account_by_id(claims.sub)
            .await
            .map_err(|e| {
                tracing::warn!("Token subject {} could not be resolved: {:?}", claims.sub, e);
                AuthFailure::PermissionDenied.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use mockall::predicate::eq;

    use crate::infra::MockAccountRepository;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";
    const OTHER_SECRET: &str = "another-secret-key-for-testing-32chars!";

    fn config(secret: &str) -> Config {
        Config::new("postgres://localhost/test", secret).unwrap()
    }

    fn stored_account(password: &str) -> Account {
        Account::new("Ada".to_string(), "Lovelace".to_string(), password).unwrap()
    }

    fn resolving(account: &Account) -> MockAccountRepository {
        let mut repo = MockAccountRepository::new();
        let stored = account.clone();
        repo.expect_get_account_by_id()
            .with(eq(account.id))
            .returning(move |_| Ok(stored.clone()));
        repo
    }

    #[tokio::test]
    async fn test_issue_then_validate_resolves_same_account() {
        let account = stored_account("secret");
        let auth = Authenticator::new(Arc::new(resolving(&account)), config(SECRET));

        let token = auth.issue_token(&account).unwrap();
        let resolved = auth.validate_token(&token).await.unwrap();

        assert_eq!(resolved.id, account.id);
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let account = stored_account("secret");
        let issuer = Authenticator::new(Arc::new(MockAccountRepository::new()), config(OTHER_SECRET));
        let verifier = Authenticator::new(Arc::new(MockAccountRepository::new()), config(SECRET));

        let token = issuer.issue_token(&account).unwrap();
        let err = verifier.validate_token(&token).await.unwrap_err();

        assert!(matches!(err, AppError::Jwt(_)));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_token_rejected() {
        let auth = Authenticator::new(Arc::new(MockAccountRepository::new()), config(SECRET));

        for token in ["", "not-a-token", "a.b.c"] {
            let err = auth.validate_token(token).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED, "token {:?}", token);
        }
    }

    #[tokio::test]
    async fn test_unknown_subject_rejected() {
        let account = stored_account("secret");
        let mut repo = MockAccountRepository::new();
        repo.expect_get_account_by_id()
            .returning(|id| Err(AppError::not_found(format!("account {}", id))));
        let auth = Authenticator::new(Arc::new(repo), config(SECRET));

        let token = auth.issue_token(&account).unwrap();
        let err = auth.validate_token(&token).await.unwrap_err();

        assert!(matches!(err, AppError::Auth(AuthFailure::PermissionDenied)));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_storage_failure_on_subject_is_denied() {
        let account = stored_account("secret");
        let mut repo = MockAccountRepository::new();
        repo.expect_get_account_by_id()
            .returning(|_| Err(sea_orm::DbErr::Custom("connection reset".into()).into()));
        let auth = Authenticator::new(Arc::new(repo), config(SECRET));

        let token = auth.issue_token(&account).unwrap();
        let err = auth.validate_token(&token).await.unwrap_err();

        assert!(matches!(err, AppError::Auth(AuthFailure::PermissionDenied)));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let account = stored_account("secret");
        let auth = Authenticator::new(Arc::new(MockAccountRepository::new()), config(SECRET));

        let past = Utc::now() - Duration::hours(1);
        let claims = Claims {
            sub: account.id,
            exp: past.timestamp(),
            iat: (past - Duration::minutes(15)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(auth.validate_token(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_other_algorithm_rejected() {
        let account = stored_account("secret");
        let auth = Authenticator::new(Arc::new(MockAccountRepository::new()), config(SECRET));

        let claims = Claims {
            sub: account.id,
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(auth.validate_token(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_token_expiry_is_in_the_future() {
        let account = stored_account("secret");
        let auth = Authenticator::new(Arc::new(MockAccountRepository::new()), config(SECRET));

        let token = auth.issue_token(&account).unwrap();
        let claims = decode_claims(&token, &config(SECRET)).unwrap();

        assert_eq!(claims.sub, account.id);
        assert!(claims.exp > Utc::now().timestamp());
        assert_eq!(claims.exp - claims.iat, 15 * SECONDS_PER_MINUTE);
    }

    #[tokio::test]
    async fn test_login_success() {
        let account = stored_account("secret");
        let mut repo = MockAccountRepository::new();
        let stored = account.clone();
        repo.expect_get_account_by_number()
            .with(eq(account.number))
            .returning(move |_| Ok(stored.clone()));
        let auth = Authenticator::new(Arc::new(repo), config(SECRET));

        let response = auth.login(account.number, "secret".to_string()).await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 900);
        let claims = decode_claims(&response.token, &config(SECRET)).unwrap();
        assert_eq!(claims.sub, account.id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let account = stored_account("secret");
        let mut repo = MockAccountRepository::new();
        let stored = account.clone();
        repo.expect_get_account_by_number()
            .returning(move |_| Ok(stored.clone()));
        let auth = Authenticator::new(Arc::new(repo), config(SECRET));

        let err = auth.login(account.number, "wrong".to_string()).await.unwrap_err();

        assert!(matches!(err, AppError::Auth(AuthFailure::InvalidCredentials)));
        assert_eq!(err.to_string(), "unable to login, verify credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_number() {
        let mut repo = MockAccountRepository::new();
        repo.expect_get_account_by_number()
            .returning(|n| Err(AppError::not_found(format!("account {}", n))));
        let auth = Authenticator::new(Arc::new(repo), config(SECRET));

        let err = auth.login(123, "secret".to_string()).await.unwrap_err();

        assert!(matches!(err, AppError::Auth(AuthFailure::InvalidCredentials)));
    }
}
