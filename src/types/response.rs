use actix_web::{http::header, HttpResponse, Responder};

use crate::types::error::AppError;

pub enum Page {
    Ok(String),
    EmptyOk,
    /// 303 to the given location, so a form POST turns into a GET.
    Redirect(&'static str),
    /// The submitted form re-rendered with its errors.
    Invalid(String),
}

impl Responder for Page {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            Page::Ok(html) => HttpResponse::Ok()
                .content_type(header::ContentType::html())
                .body(html),
            Page::EmptyOk => HttpResponse::Ok().finish(),
            Page::Redirect(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish(),
            Page::Invalid(html) => HttpResponse::UnprocessableEntity()
                .content_type(header::ContentType::html())
                .body(html),
        }
    }
}

pub type PageResult = Result<Page, AppError>;
