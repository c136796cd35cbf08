use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use things::config::EnvConfig;
use things::db::DatabaseRouter;
use things::routes::configure_routes;
use things::views::Views;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Migrate from the main process only. Each worker opens its own pools below.
    DatabaseRouter::connect(&config.database)
        .await
        .map_err(io::Error::other)?
        .migrate()
        .await
        .map_err(io::Error::other)?;

    let views = web::Data::new(Views::new().map_err(|e| io::Error::other(e.to_string()))?);
    let database = config.database.clone();

    info!(
        environment = %config.server.environment,
        workers = config.server.workers,
        threads = config.server.threads,
        "Starting server on port {}",
        config.server.port
    );

    HttpServer::new(move || {
        let database = database.clone();

        App::new()
            .wrap(Logger::default())
            .app_data(views.clone())
            .data_factory(move || {
                let database = database.clone();
                async move { DatabaseRouter::connect(&database).await }
            })
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(("0.0.0.0", config.server.port))?
    .run()
    .await
}
