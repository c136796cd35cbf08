use chrono::Utc;
use entity::thing::{ActiveModel as ThingActive, Column, Entity as Thing, Model as ThingModel};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::db::connection::{ReadConnection, ReadWriteConnection};
use crate::types::{error::AppError, thing::ThingParams};

/// Every thing, newest first. Rows created in the same instant come out in
/// reverse insertion order.
pub async fn list_newest_first(conn: &ReadConnection) -> Result<Vec<ThingModel>, AppError> {
    Ok(Thing::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn.connection())
        .await?)
}

pub async fn insert(conn: &ReadWriteConnection, params: ThingParams) -> Result<ThingModel, AppError> {
    let now = Utc::now();

    let thing = ThingActive {
        name: Set(params.name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(conn.connection())
    .await
    .map_err(AppError::from_write)?;

    info!(id = thing.id, "Created thing.");
    Ok(thing)
}
