//! Migrator registering the rental backend tables.
//! `user` and `confirm` are independent; no foreign keys between them.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_user;
mod m20240501_000002_create_confirm;
mod m20240501_000003_add_user_saved_seq;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_user::Migration),
            Box::new(m20240501_000002_create_confirm::Migration),
            Box::new(m20240501_000003_add_user_saved_seq::Migration),
        ]
    }
}
