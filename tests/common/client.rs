use actix_web::{web, App};
use things::{db::DatabaseRouter, views::Views};

pub struct TestClient {
    pub db: DatabaseRouter,
}

impl TestClient {
    pub fn new(db: DatabaseRouter) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.db.clone()))
            .app_data(web::Data::new(Views::new().expect("Failed to compile views")))
            .configure(things::routes::configure_routes)
    }
}
