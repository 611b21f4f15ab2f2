//! Rental confirmations submitted from the booking form.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::RentalDetail;
pub use repository::RentalRepository;
pub use service::RentalService;
