//! SeaORM entity definitions, kept apart from the domain `Account`.

pub mod account;
