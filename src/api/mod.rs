//! API layer - HTTP surface of the service
//!
//! Handlers translate requests into service calls; the owner guard and
//! extractors turn malformed input into `AppError`s before a handler runs.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
