use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `user` table. Email is a lookup key, not a unique one;
/// `saved_seq` orders rows sharing an email by last write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
    pub phone: Option<String>,
    pub saved_seq: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
