//! SeaORM entities for the rental backend and the helpers that open the
//! database connection they live in.

pub mod db;
pub mod user;
pub mod rental_detail;
