use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use models::user;

use crate::errors::ServiceError;
use crate::users::domain::User;
use crate::users::repository::UserRepository;

/// User repository backed by the `user` table.
///
/// Every write stamps the row with the next `saved_seq`; email lookups
/// return the matching row with the highest one.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn newest_matching(&self, query: sea_orm::Select<user::Entity>) -> Result<Option<User>, ServiceError> {
        let found = query
            .order_by_desc(user::Column::SavedSeq)
            .order_by_desc(user::Column::Id)
            .one(&self.db)
            .await?;
        Ok(found.map(User::from))
    }
}

async fn next_saved_seq<C: ConnectionTrait>(conn: &C) -> Result<i64, DbErr> {
    let current: Option<Option<i64>> = user::Entity::find()
        .select_only()
        .column_as(user::Column::SavedSeq.max(), "max_seq")
        .into_tuple()
        .one(conn)
        .await?;
    Ok(current.flatten().unwrap_or(0) + 1)
}

fn active_model(id: ActiveValue<i32>, saved_seq: i64, u: User) -> user::ActiveModel {
    user::ActiveModel {
        id,
        name: ActiveValue::Set(u.name),
        email: ActiveValue::Set(u.email),
        password: ActiveValue::Set(u.password),
        image_url: ActiveValue::Set(u.image_url),
        phone: ActiveValue::Set(u.phone),
        saved_seq: ActiveValue::Set(saved_seq),
    }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, u: User) -> Result<User, ServiceError> {
        let txn = self.db.begin().await?;
        let seq = next_saved_seq(&txn).await?;
        let saved = match u.id {
            None => active_model(ActiveValue::NotSet, seq, u).insert(&txn).await?,
            Some(id) => active_model(ActiveValue::Unchanged(id), seq, u)
                .update(&txn)
                .await
                .map_err(|e| match e {
                    DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                        ServiceError::not_found(&format!("user {id}"))
                    }
                    other => other.into(),
                })?,
        };
        txn.commit().await?;
        Ok(saved.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        self.newest_matching(user::Entity::find().filter(user::Column::Email.eq(email)))
            .await
    }

    async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError> {
        self.newest_matching(
            user::Entity::find()
                .filter(user::Column::Email.eq(email))
                .filter(user::Column::Password.eq(password)),
        )
        .await
    }

    async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        let rows = user::Entity::find().order_by_asc(user::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
