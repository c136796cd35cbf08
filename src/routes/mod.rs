use actix_web::web;

pub mod health;
pub mod things;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(things::index::index);
    cfg.service(
        web::scope("/things")
            .service(things::new::new)
            .service(things::create::create)
    );
    cfg.service(
        web::scope("/health").service(health::health)
    );
}
