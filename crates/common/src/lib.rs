//! Shared building blocks for the rental backend crates.
//!
//! Kept free of web-framework and database dependencies so every layer can
//! pull it in.

pub mod types;
pub mod utils;
