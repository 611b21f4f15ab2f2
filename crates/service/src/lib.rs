//! Service layer: domain types, repository abstractions and the services
//! the HTTP handlers call.
//! - `users`: account records (registration, lookup, credential check).
//! - `rentals`: rental confirmation records.
//!
//! Each area has an in-memory repository for tests and local runs and a
//! SeaORM repository for the relational store.

pub mod errors;
pub mod users;
pub mod rentals;
#[cfg(test)]
pub mod test_support;
