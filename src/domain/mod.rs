//! Domain layer - Core business entities and logic
//!
//! The account entity, the shapes clients send and receive, and the
//! password value object. Nothing here touches storage or HTTP.

pub mod account;
pub mod password;

pub use account::{Account, AccountResponse, CreateAccountRequest, LoginRequest, TransferRequest};
pub use password::Password;
