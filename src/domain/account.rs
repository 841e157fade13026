//! Account domain entity and request/response shapes.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::Password;
use crate::config::ACCOUNT_NUMBER_UPPER_BOUND;
use crate::errors::AppResult;

/// Account domain entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub encrypted_password: String,
    /// Secondary, user-facing login key
    pub number: i64,
    /// Smallest currency unit
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account, hashing the password.
    ///
    /// Nothing is persisted; the caller hands the result to storage.
    /// The number is random and not guaranteed unique.
    ///
    /// # Errors
    /// Returns a hashing error if the password cannot be hashed.
    pub fn new(first_name: String, last_name: String, password: &str) -> AppResult<Self> {
        let encrypted_password = Password::new(password)?.into_string();

        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            encrypted_password,
            number: rand::thread_rng().gen_range(0..ACCOUNT_NUMBER_UPPER_BOUND),
            balance: 0,
            created_at: Utc::now(),
        })
    }

    /// Check a plaintext password against the stored hash
    pub fn verify_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.encrypted_password.clone()).verify(plain_text)
    }
}

/// Account creation request
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    #[validate(length(min = 1, max = 50, message = "first_name must be 1 to 50 characters"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "last_name must be 1 to 50 characters"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pw123456")]
    pub password: String,
}

impl std::fmt::Debug for CreateAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login request
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account number assigned at creation
    #[schema(example = 482913)]
    pub number: i64,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pw123456")]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("number", &self.number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Transfer request, echoed back unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TransferRequest {
    /// Destination account id
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub to_account: Uuid,
    #[schema(example = 100)]
    pub amount: i64,
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = 482913)]
    pub number: i64,
    #[schema(example = 0)]
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            number: account.number,
            balance: account.balance,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Account {
        Account::new("Ada".to_string(), "Lovelace".to_string(), "pw123456").unwrap()
    }

    #[test]
    fn test_new_account_defaults() {
        let account = ada();

        assert_eq!(account.first_name, "Ada");
        assert_eq!(account.last_name, "Lovelace");
        assert_eq!(account.balance, 0);
        assert!((0..ACCOUNT_NUMBER_UPPER_BOUND).contains(&account.number));
        assert_eq!(account.id.get_version_num(), 4);
        assert!(account.created_at <= Utc::now());
    }

    #[test]
    fn test_password_is_hashed() {
        let account = ada();

        assert_ne!(account.encrypted_password, "pw123456");
        assert!(account.verify_password("pw123456"));
        assert!(!account.verify_password("wrong"));
    }

    #[test]
    fn test_ids_are_unique() {
        let first = ada();
        let second = ada();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_serialization_excludes_hash() {
        let account = ada();
        let json = serde_json::to_value(&account).unwrap();

        assert!(json.get("encrypted_password").is_none());
        assert!(!json.to_string().contains(&account.encrypted_password));
        assert_eq!(json["balance"], 0);
        assert_eq!(json["id"], account.id.to_string());
    }

    #[test]
    fn test_response_has_no_password_field() {
        let account = ada();
        let json = serde_json::to_value(AccountResponse::from(account.clone())).unwrap();

        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys.len(),
            6,
            "unexpected response fields: {:?}",
            keys
        );
        assert_eq!(json["number"], account.number);
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"first_name":"Ada","last_name":"Lovelace","password":"pw123456"}"#,
        )
        .unwrap();
        let login = LoginRequest {
            number: 1,
            password: "pw123456".to_string(),
        };

        assert!(!format!("{:?}", request).contains("pw123456"));
        assert!(!format!("{:?}", login).contains("pw123456"));
    }

    #[test]
    fn test_create_request_validation() {
        let empty_name = CreateAccountRequest {
            first_name: String::new(),
            last_name: "Lovelace".to_string(),
            password: "pw".to_string(),
        };
        let long_name = CreateAccountRequest {
            first_name: "A".repeat(51),
            last_name: "Lovelace".to_string(),
            password: "pw".to_string(),
        };
        let valid = CreateAccountRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "secret".to_string(),
        };

        assert!(empty_name.validate().is_err());
        assert!(long_name.validate().is_err());
        assert!(valid.validate().is_ok());
    }
}
