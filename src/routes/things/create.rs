use actix_web::{post, web};
use tracing::warn;

use crate::db::{thing, DatabaseRouter};
use crate::types::{
    response::{Page, PageResult},
    thing::ThingParams,
};
use crate::views::Views;

const SAVE_FAILED: &str = "Thing could not be saved. Please try again.";

#[post("")]
async fn create(
    db: web::Data<DatabaseRouter>,
    views: web::Data<Views>,
    form: web::Form<Vec<(String, String)>>,
) -> PageResult {
    let params = ThingParams::from_form(&form.into_inner())?;

    let submitted = params.clone();
    let saved = db
        .run_writable(|conn| async move { thing::insert(&conn, submitted).await })
        .await;

    match saved {
        Ok(_) => Ok(Page::Redirect("/")),
        Err(e) if e.is_recoverable() => {
            warn!("Thing could not be saved: {}", e);
            Ok(Page::Invalid(views.things_new(&params, &[SAVE_FAILED.to_string()])?))
        }
        Err(e) => Err(e),
    }
}
