use actix_web::{get, web};

use crate::types::{
    response::{Page, PageResult},
    thing::ThingParams,
};
use crate::views::Views;

#[get("/new")]
async fn new(views: web::Data<Views>) -> PageResult {
    Ok(Page::Ok(views.things_new(&ThingParams::default(), &[])?))
}
