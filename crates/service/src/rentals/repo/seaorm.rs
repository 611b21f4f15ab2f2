use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use models::rental_detail;

use crate::errors::ServiceError;
use crate::rentals::domain::RentalDetail;
use crate::rentals::repository::RentalRepository;

/// Rental repository backed by the `confirm` table.
pub struct SeaOrmRentalRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRentalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl RentalRepository for SeaOrmRentalRepository {
    async fn save(&self, d: RentalDetail) -> Result<RentalDetail, ServiceError> {
        let id = d.id;
        let am = rental_detail::ActiveModel {
            id: id.map_or(ActiveValue::NotSet, ActiveValue::Unchanged),
            name: ActiveValue::Set(d.name),
            phone_number: ActiveValue::Set(d.phone_number),
            address: ActiveValue::Set(d.address),
            vehicle_address: ActiveValue::Set(d.vehicle_address),
            file_name: ActiveValue::Set(d.file_name),
        };
        let saved = match id {
            None => am.insert(&self.db).await?,
            Some(id) => am.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                    ServiceError::not_found(&format!("rental detail {id}"))
                }
                other => other.into(),
            })?,
        };
        Ok(saved.into())
    }

    async fn list_all(&self) -> Result<Vec<RentalDetail>, ServiceError> {
        let rows = rental_detail::Entity::find()
            .order_by_asc(rental_detail::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(RentalDetail::from).collect())
    }
}
