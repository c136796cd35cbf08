use actix_web::{get, web};

use crate::db::{thing, DatabaseRouter};
use crate::types::{
    response::{Page, PageResult},
    thing::ThingView,
};
use crate::views::Views;

#[get("/")]
async fn index(db: web::Data<DatabaseRouter>, views: web::Data<Views>) -> PageResult {
    let things = db
        .run_read_only(|conn| async move { thing::list_newest_first(&conn).await })
        .await?;

    let things: Vec<ThingView> = things.into_iter().map(ThingView::from).collect();
    Ok(Page::Ok(views.things_index(&things)?))
}
