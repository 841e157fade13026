//! OpenAPI documentation configuration.
//!
//! The document is served as JSON at `/api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{account_handler, auth_handler, health_handler};
use crate::domain::{AccountResponse, CreateAccountRequest, LoginRequest, TransferRequest};
use crate::errors::ErrorResponse;
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the bank API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bank API",
        version = "0.1.0",
        description = "Accounts, token login and transfer intake over JSON/HTTP"
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    paths(
        // Account endpoints
        account_handler::create_account,
        account_handler::get_account,
        account_handler::delete_account,
        account_handler::list_accounts,
        account_handler::transfer,
        // Authentication endpoints
        auth_handler::login,
        auth_handler::logout,
        // Operations
        health_handler::health,
    ),
    components(
        schemas(
            AccountResponse,
            CreateAccountRequest,
            LoginRequest,
            TransferRequest,
            TokenResponse,
            MessageResponse,
            ErrorResponse,
            health_handler::HealthResponse,
            health_handler::ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Accounts", description = "Account management and transfers"),
        (name = "Authentication", description = "Login and logout"),
        (name = "Health", description = "Liveness and storage probe")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /login, also accepted via the `token` cookie"))
                        .build(),
                ),
            );
        }
    }
}
