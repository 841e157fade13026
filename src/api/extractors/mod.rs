//! Custom request extractors.

mod account_id;
mod validated_json;

pub use account_id::{parse_account_id, AccountId};
pub use validated_json::ValidatedJson;
