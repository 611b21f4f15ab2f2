//! User accounts: domain record, repository abstraction and service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::User;
pub use repository::UserRepository;
pub use service::UserService;
