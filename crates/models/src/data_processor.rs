use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One numeric value per user. `user_id` is assigned by the caller, never generated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "data_processor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub dp_value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert or overwrite the row keyed by `user_id` in a single statement.
pub async fn upsert<C>(db: &C, user_id: i32, dp_value: i64) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        user_id: Set(user_id),
        dp_value: Set(dp_value),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_column(Column::DpValue)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(Model { user_id, dp_value })
}

pub async fn find<C>(db: &C, user_id: i32) -> Result<Option<Model>, errors::ModelError>
where
    C: ConnectionTrait,
{
    Ok(Entity::find_by_id(user_id).one(db).await?)
}
