use actix_web::{middleware, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::info;
use user_api::config::EnvConfig;
use user_api::db::db_service::DbService;
use user_api::routes::configure_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let addr = config.bind_address();

    let db_service = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
