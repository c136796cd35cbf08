use actix_web::{get, web};

use crate::db::DatabaseRouter;
use crate::types::response::{Page, PageResult};

#[get("")]
async fn health(db: web::Data<DatabaseRouter>) -> PageResult {
    db.ping().await?;
    Ok(Page::EmptyOk)
}
