use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `confirm` table: one submitted rental confirmation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "confirm")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub vehicle_address: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
